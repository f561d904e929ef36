//! Proficiency meter fill timing.

use std::time::Duration;

use folio_types::ui::staggered_progress;

const BASE_DELAY: Duration = Duration::from_millis(300);
const STAGGER: Duration = Duration::from_millis(100);
const FILL: Duration = Duration::from_secs(1);

/// Clock for the meter fill, started when the skills section is revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMeters {
    since_reveal: Option<Duration>,
}

impl SkillMeters {
    pub fn start(&mut self) {
        if self.since_reveal.is_none() {
            self.since_reveal = Some(Duration::ZERO);
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.since_reveal.is_some()
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(elapsed) = self.since_reveal.as_mut() {
            *elapsed = elapsed.saturating_add(delta);
        }
    }

    /// Fill fraction of meter `index`, `0.0` before the section is revealed.
    #[must_use]
    pub fn progress(&self, index: usize, reduced_motion: bool) -> f32 {
        let Some(elapsed) = self.since_reveal else {
            return 0.0;
        };
        if reduced_motion {
            return 1.0;
        }
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        let delay = BASE_DELAY.saturating_add(STAGGER.saturating_mul(step));
        staggered_progress(elapsed, delay, FILL)
    }

    /// Whether any meter is still filling.
    #[must_use]
    pub fn is_animating(&self, count: usize, reduced_motion: bool) -> bool {
        self.is_started()
            && !reduced_motion
            && (0..count).any(|index| self.progress(index, false) < 1.0)
    }
}
