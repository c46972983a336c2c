use std::time::Duration;

use bevy::prelude::*;

use constants::progress::{PROGRESS_START_DELAY_MS, PROGRESS_TICK_COUNT, PROGRESS_TICK_MS};

use crate::engine::assets::campaign::CampaignFigures;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Counting,
    Finished,
}

/// What the progress bar should currently show.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    /// Target fill of the bar, raised / goal in percent.
    pub width_percent: f64,
    pub counter: f64,
    pub raised: f64,
    /// Set on the frame that leaves the start delay, the only one that moves the bar's target.
    pub starts_counting: bool,
}

impl ProgressFrame {
    pub fn width_css(&self) -> String {
        format!("{:.2}%", self.width_percent)
    }

    pub fn amount_text(&self) -> String {
        format!("${}", self.counter.floor() as u64)
    }

    /// How far the counter has travelled towards `raised`, in `[0, 1]`.
    pub fn fill_fraction(&self) -> f64 {
        if self.raised > 0.0 {
            (self.counter / self.raised).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// One-shot counter animation. Waits out the start delay and the campaign
/// figures, then steps the counter by `raised / 100` per tick until it
/// reaches `raised`. There is no reset.
#[derive(Resource, Debug)]
pub struct ProgressAnimator {
    delay: Timer,
    tick: Timer,
    figures: Option<CampaignFigures>,
    counter: f64,
    phase: Phase,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(PROGRESS_START_DELAY_MS),
            Duration::from_millis(PROGRESS_TICK_MS),
        )
    }
}

impl ProgressAnimator {
    pub fn new(delay: Duration, tick: Duration) -> Self {
        Self {
            delay: Timer::new(delay, TimerMode::Once),
            tick: Timer::new(tick, TimerMode::Repeating),
            figures: None,
            counter: 0.0,
            phase: Phase::Waiting,
        }
    }

    /// First figures win, later calls are ignored.
    pub fn set_figures(&mut self, figures: CampaignFigures) {
        if self.figures.is_none() {
            self.figures = Some(figures);
        }
    }

    pub fn counter(&self) -> f64 {
        self.counter
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Moves the animation forward, returning a frame whenever the display changes.
    pub fn advance(&mut self, delta: Duration) -> Option<ProgressFrame> {
        match self.phase {
            Phase::Finished => None,
            Phase::Waiting => {
                let remaining = self.delay.remaining();
                self.delay.tick(delta);
                let figures = self.figures?;
                if !self.delay.finished() {
                    return None;
                }
                // Time past the end of the delay in this frame already counts.
                let overshoot = if self.delay.just_finished() {
                    delta.saturating_sub(remaining)
                } else {
                    Duration::ZERO
                };
                self.phase = Phase::Counting;
                self.count(&figures, overshoot);
                Some(self.frame(&figures, true))
            }
            Phase::Counting => {
                let figures = self.figures?;
                if self.count(&figures, delta) == 0 {
                    return None;
                }
                Some(self.frame(&figures, false))
            }
        }
    }

    /// Applies every tick elapsed in `delta`, returning how many there were.
    fn count(&mut self, figures: &CampaignFigures, delta: Duration) -> u32 {
        self.tick.tick(delta);
        let ticks = self.tick.times_finished_this_tick();

        let step = figures.raised / PROGRESS_TICK_COUNT;
        for _ in 0..ticks {
            self.counter += step;
            if self.counter >= figures.raised {
                self.counter = figures.raised;
                self.phase = Phase::Finished;
                break;
            }
        }
        ticks
    }

    fn frame(&self, figures: &CampaignFigures, starts_counting: bool) -> ProgressFrame {
        ProgressFrame {
            width_percent: figures.percentage(),
            counter: self.counter,
            raised: figures.raised,
            starts_counting,
        }
    }
}

pub fn animate_progress(
    time: Res<Time>,
    figures: Option<Res<CampaignFigures>>,
    mut animator: ResMut<ProgressAnimator>,
    mut frames: EventWriter<ProgressFrame>,
) {
    if let Some(figures) = figures {
        animator.set_figures(*figures);
    }

    let Some(frame) = animator.advance(time.delta()) else {
        return;
    };
    if animator.is_finished() {
        info!("Progress counter settled at {:.0}", animator.counter());
    }
    frames.write(frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(PROGRESS_TICK_MS);
    const DELAY: Duration = Duration::from_millis(PROGRESS_START_DELAY_MS);

    fn started(figures: CampaignFigures) -> (ProgressAnimator, ProgressFrame) {
        let mut animator = ProgressAnimator::default();
        animator.set_figures(figures);
        let first = animator.advance(DELAY).expect("delay elapsed");
        (animator, first)
    }

    fn run_to_end(animator: &mut ProgressAnimator) -> Vec<ProgressFrame> {
        let mut frames = Vec::new();
        for _ in 0..1_000 {
            if let Some(frame) = animator.advance(TICK) {
                frames.push(frame);
            }
            if animator.is_finished() {
                break;
            }
        }
        frames
    }

    #[test]
    fn nothing_shows_before_the_delay() {
        let mut animator = ProgressAnimator::default();
        animator.set_figures(CampaignFigures::default());

        assert_eq!(animator.advance(Duration::from_millis(499)), None);
        assert!(animator.advance(Duration::from_millis(1)).is_some());
    }

    #[test]
    fn waits_for_figures_after_the_delay() {
        let mut animator = ProgressAnimator::default();
        assert_eq!(animator.advance(Duration::from_secs(2)), None);

        animator.set_figures(CampaignFigures::default());
        let frame = animator.advance(Duration::ZERO).expect("figures arrived");
        assert_eq!(frame.counter, 0.0);
        assert_eq!(frame.amount_text(), "$0");
    }

    #[test]
    fn reaches_placeholder_figures() {
        let (mut animator, first) = started(CampaignFigures::default());
        assert_eq!(first.width_css(), "27.10%");

        let frames = run_to_end(&mut animator);
        let last = frames.last().expect("counter ticked");

        assert!(animator.is_finished());
        assert_eq!(last.counter, 420.0);
        assert_eq!(last.amount_text(), "$420");
        assert_eq!(last.width_css(), "27.10%");
        assert_eq!(last.fill_fraction(), 1.0);
        assert!((100..=101).contains(&frames.len()));
    }

    #[test]
    fn counter_is_monotonic_and_bounded() {
        let figures = CampaignFigures {
            goal: 1000.0,
            raised: 333.3,
        };
        let (mut animator, first) = started(figures);

        let mut previous = first.counter;
        for frame in run_to_end(&mut animator) {
            assert!(frame.counter >= previous);
            assert!(frame.counter <= figures.raised);
            previous = frame.counter;
        }
        assert_eq!(animator.counter(), figures.raised);
    }

    #[test]
    fn long_frame_applies_every_elapsed_tick() {
        let (mut animator, _) = started(CampaignFigures::default());

        let frame = animator.advance(TICK * 25).unwrap();
        assert!((frame.counter - 105.0).abs() < 1e-9);
        assert_eq!(frame.amount_text(), "$105");

        let frame = animator.advance(Duration::from_secs(5)).unwrap();
        assert_eq!(frame.counter, 420.0);
        assert!(animator.is_finished());
    }

    #[test]
    fn finished_animator_stays_silent() {
        let (mut animator, _) = started(CampaignFigures::default());
        run_to_end(&mut animator);

        assert_eq!(animator.advance(Duration::from_secs(1)), None);
        animator.set_figures(CampaignFigures {
            goal: 10.0,
            raised: 10.0,
        });
        assert_eq!(animator.counter(), 420.0);
    }

    #[test]
    fn only_the_first_frame_starts_counting() {
        let (mut animator, first) = started(CampaignFigures::default());
        assert!(first.starts_counting);

        let frames = run_to_end(&mut animator);
        assert!(frames.iter().all(|frame| !frame.starts_counting));
    }

    #[test]
    fn delay_overshoot_counts_towards_ticks() {
        let mut animator = ProgressAnimator::default();
        animator.set_figures(CampaignFigures::default());

        let frame = animator.advance(DELAY + TICK * 3).unwrap();
        assert!(frame.starts_counting);
        assert!((frame.counter - 12.6).abs() < 1e-9);
        assert_eq!(frame.amount_text(), "$12");
    }

    #[test]
    fn late_figures_start_counting_from_zero() {
        let mut animator = ProgressAnimator::default();
        assert_eq!(animator.advance(DELAY + TICK * 30), None);

        animator.set_figures(CampaignFigures::default());
        let frame = animator.advance(TICK).unwrap();
        assert!(frame.starts_counting);
        assert_eq!(frame.counter, 0.0);
    }

    #[test]
    fn nothing_raised_finishes_on_first_tick() {
        let (mut animator, _) = started(CampaignFigures {
            goal: 1550.0,
            raised: 0.0,
        });

        let frame = animator.advance(TICK).unwrap();
        assert!(animator.is_finished());
        assert_eq!(frame.amount_text(), "$0");
        assert_eq!(frame.width_css(), "0.00%");
    }
}
