use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub rocket_resolved: bool,
    pub campaign_resolved: bool,
    reported: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.rocket_resolved && self.campaign_resolved
    }
}

pub fn report_loading_complete(mut loading_progress: ResMut<LoadingProgress>) {
    if loading_progress.reported || !loading_progress.is_complete() {
        return;
    }
    info!("✓ Rocket and campaign figures resolved");
    loading_progress.reported = true;
}
