//! Debounced "animate" flag.
//!
//! Each [`AnimationTimer::trigger`] raises the flag and schedules a revert
//! after the configured delay. A later trigger or [`AnimationTimer::cancel`]
//! supersedes any pending revert, so a stale timer never lowers the flag
//! set by a newer recomputation.

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Default)]
struct AnimationState {
    animating: bool,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct AnimationTimer {
    delay: Duration,
    state: Arc<Mutex<AnimationState>>,
}

impl AnimationTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(Mutex::new(AnimationState::default())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_animating(&self) -> bool {
        self.state.lock().animating
    }

    /// Raise the flag and replace any pending revert with a fresh one.
    pub fn trigger(&self) {
        let generation = {
            let mut state = self.state.lock();
            state.animating = true;
            state.generation = state.generation.wrapping_add(1);
            state.generation
        };

        let state = Arc::clone(&self.state);
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let mut state = state.lock();
            if state.generation == generation {
                state.animating = false;
            } else {
                debug!(generation, "Skipping superseded animation revert");
            }
        });
    }

    /// Drop any pending revert and lower the flag now.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);
        state.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_reverts_after_delay() {
        let timer = AnimationTimer::new(Duration::from_millis(100));
        assert!(!timer.is_animating());
        timer.trigger();
        assert!(timer.is_animating());
        thread::sleep(Duration::from_millis(400));
        assert!(!timer.is_animating());
    }

    #[test]
    fn test_retrigger_replaces_pending_revert() {
        let timer = AnimationTimer::new(Duration::from_millis(400));
        timer.trigger();
        thread::sleep(Duration::from_millis(200));
        timer.trigger();
        // Past the first deadline, before the second
        thread::sleep(Duration::from_millis(250));
        assert!(timer.is_animating());
        thread::sleep(Duration::from_millis(500));
        assert!(!timer.is_animating());
    }

    #[test]
    fn test_cancel_lowers_flag_immediately() {
        let timer = AnimationTimer::new(Duration::from_secs(5));
        timer.trigger();
        timer.cancel();
        assert!(!timer.is_animating());
    }
}
