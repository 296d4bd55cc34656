//! Countdown implementation.
//!
//! The countdown is caller-ticked: it holds no thread and no clock. The
//! owning loop invokes `tick()` about once per second while the countdown
//! runs, and each call decrements by exactly one second.
//!
//! ## Lifecycle
//!
//! ```text
//! unset --start(d)--> running(d) --tick()*--> running(1) --tick()--> unset
//!                         |
//!                       clear() (step change) --> unset
//! ```
//!
//! Reaching zero stops and clears in the same tick. An unset value is how
//! a renderer knows to offer "start" and the default duration text again.

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second elapsed; the countdown is still going.
    Ticked { remaining_secs: u32 },
    /// The countdown reached zero, stopped and cleared itself.
    Finished,
}

/// A single per-step countdown.
///
/// Durations are step constants supplied by the caller at `start` time;
/// the countdown itself does not know which step it belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: Option<u32>,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Arm and start the countdown. Rejected while a countdown is set,
    /// whether or not it is still running.
    pub fn start(&mut self, duration_secs: u32) -> Result<(), TimerError> {
        if duration_secs == 0 {
            return Err(TimerError::InvalidDuration);
        }
        if let Some(remaining_secs) = self.remaining_secs {
            return Err(TimerError::AlreadyActive { remaining_secs });
        }
        self.remaining_secs = Some(duration_secs);
        self.running = true;
        Ok(())
    }

    /// Advance one second. No-op unless running with time left.
    pub fn tick(&mut self) -> Option<Tick> {
        if !self.running {
            return None;
        }
        let remaining = self.remaining_secs?;
        match remaining.saturating_sub(1) {
            0 => {
                self.clear();
                Some(Tick::Finished)
            }
            next => {
                self.remaining_secs = Some(next);
                Some(Tick::Ticked {
                    remaining_secs: next,
                })
            }
        }
    }

    /// Unconditionally drop any countdown. Idempotent.
    pub fn clear(&mut self) {
        self.remaining_secs = None;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_arms_and_runs() {
        let mut countdown = Countdown::new();
        countdown.start(1200).unwrap();
        assert_eq!(countdown.remaining_secs(), Some(1200));
        assert!(countdown.is_running());
    }

    #[test]
    fn start_rejects_zero_duration() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.start(0), Err(TimerError::InvalidDuration));
        assert_eq!(countdown.remaining_secs(), None);
    }

    #[test]
    fn start_rejected_while_active() {
        let mut countdown = Countdown::new();
        countdown.start(300).unwrap();
        countdown.tick();
        assert_eq!(
            countdown.start(600),
            Err(TimerError::AlreadyActive { remaining_secs: 299 })
        );
        assert_eq!(countdown.remaining_secs(), Some(299));
    }

    #[test]
    fn full_countdown_clears_itself() {
        let mut countdown = Countdown::new();
        countdown.start(1200).unwrap();
        for _ in 0..1199 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining_secs(), Some(1));
        assert!(countdown.is_running());

        assert_eq!(countdown.tick(), Some(Tick::Finished));
        assert_eq!(countdown.remaining_secs(), None);
        assert!(!countdown.is_running());
    }

    #[test]
    fn tick_is_noop_when_unset() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining_secs(), None);
        assert!(!countdown.is_running());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut countdown = Countdown::new();
        countdown.start(60).unwrap();
        countdown.clear();
        countdown.clear();
        assert_eq!(countdown.remaining_secs(), None);
        assert!(!countdown.is_running());
    }

    #[test]
    fn restart_allowed_after_finish() {
        let mut countdown = Countdown::new();
        countdown.start(1).unwrap();
        assert_eq!(countdown.tick(), Some(Tick::Finished));
        countdown.start(5).unwrap();
        assert_eq!(countdown.remaining_secs(), Some(5));
    }
}
