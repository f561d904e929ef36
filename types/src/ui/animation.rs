use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Progress of a transition that starts `delay` after `elapsed` began counting.
#[must_use]
pub fn staggered_progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    match elapsed.checked_sub(delay) {
        Some(running) => normalized_progress(running, duration),
        None => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, staggered_progress};
    use std::time::Duration;

    #[test]
    fn timer_runs_then_completes() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress < 0.1));
        timer.advance(Duration::from_millis(50));
        assert!(matches!(timer.phase(), AnimPhase::Running { .. }));
        timer.advance(Duration::from_millis(60));
        assert_eq!(timer.phase(), AnimPhase::Completed);
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn staggered_progress_waits_for_delay() {
        let delay = Duration::from_millis(300);
        let duration = Duration::from_secs(1);
        assert!(staggered_progress(Duration::from_millis(200), delay, duration) < f32::EPSILON);
        let half = staggered_progress(Duration::from_millis(800), delay, duration);
        assert!((half - 0.5).abs() < 1e-3);
        let done = staggered_progress(Duration::from_secs(5), delay, duration);
        assert!((done - 1.0).abs() < f32::EPSILON);
    }
}
