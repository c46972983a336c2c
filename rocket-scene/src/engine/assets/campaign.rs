use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use constants::progress::{DEFAULT_CAMPAIGN_GOAL, DEFAULT_CAMPAIGN_RAISED};

/// Fundraising figures shown by the progress bar.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Asset, TypePath)]
pub struct CampaignFigures {
    pub goal: f64,
    pub raised: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CampaignError {
    #[error("campaign goal must be a positive number, got {0}")]
    InvalidGoal(f64),
    #[error("amount raised must be a non-negative number, got {0}")]
    InvalidRaised(f64),
}

impl Default for CampaignFigures {
    fn default() -> Self {
        Self {
            goal: DEFAULT_CAMPAIGN_GOAL,
            raised: DEFAULT_CAMPAIGN_RAISED,
        }
    }
}

impl CampaignFigures {
    pub fn validated(self) -> Result<Self, CampaignError> {
        if !self.goal.is_finite() || self.goal <= 0.0 {
            return Err(CampaignError::InvalidGoal(self.goal));
        }
        if !self.raised.is_finite() || self.raised < 0.0 {
            return Err(CampaignError::InvalidRaised(self.raised));
        }
        Ok(self)
    }

    /// Share of the goal already raised, in percent. Not clamped, overfunded campaigns exceed 100.
    pub fn percentage(&self) -> f64 {
        self.raised / self.goal * 100.0
    }
}
