use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routine::{Step, WorkoutType};

/// Every state change in a session produces an Event.
/// The front end re-renders after each one; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SleepRecorded {
        slept_well: bool,
        at: DateTime<Utc>,
    },
    RoutineStarted {
        first_step: Step,
        at: DateTime<Utc>,
    },
    WorkoutSelected {
        workout: WorkoutType,
        at: DateTime<Utc>,
    },
    StepAdvanced {
        from: Step,
        to: Step,
        at: DateTime<Utc>,
    },
    SpaceAssessed {
        messy: bool,
        to: Step,
        at: DateTime<Utc>,
    },
    /// The user confirmed completion; the session is back at `Initial`.
    RoutineCompleted {
        streak: u32,
        at: DateTime<Utc>,
    },
    /// The "back" affordance; streak unchanged.
    RoutineReset {
        at: DateTime<Utc>,
    },
    TimerStarted {
        step: Step,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and cleared itself.
    TimerFinished {
        step: Step,
        at: DateTime<Utc>,
    },
    /// A step change dropped an unfinished countdown.
    TimerCleared {
        at: DateTime<Utc>,
    },
    /// Full render-ready view of the session.
    StateSnapshot {
        step: Step,
        step_title: String,
        slept_well: Option<bool>,
        workout_type: Option<WorkoutType>,
        streak: u32,
        timer_remaining_secs: Option<u32>,
        timer_running: bool,
        /// Formatted remaining time, when a countdown is set.
        clock: Option<String>,
        /// Formatted full duration, when the step is timed.
        default_clock: Option<String>,
        at: DateTime<Utc>,
    },
}
