//! Routine state machine.
//!
//! A pure, synchronous state machine over the morning sequence. The
//! caller owns scheduling and rendering; the machine only validates
//! preconditions and moves between steps.
//!
//! ## Step sequence
//!
//! ```text
//! Initial -(slept well)-> Workout ---> Stretch ---+
//! Initial -(tired)------> Meditation -------------+-> Breakfast -> Shower -> Dressed -> Space
//!
//! Space -(messy)-> Declutter -> Complete
//! Space -(tidy)---------------> Complete -(confirm)-> Initial, streak + 1
//! ```

use serde::{Deserialize, Serialize};

use super::step::{Step, WorkoutType};
use crate::error::RoutineError;

/// Routine state machine.
///
/// Owns the current step, the sleep answer, the chosen workout type and
/// the streak counter. Every transition either succeeds or returns an
/// error and leaves the state untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineMachine {
    step: Step,
    slept_well: Option<bool>,
    workout_type: Option<WorkoutType>,
    streak: u32,
}

impl RoutineMachine {
    /// Create a machine at `Initial` with the given streak seed.
    pub fn new(streak_seed: u32) -> Self {
        Self {
            step: Step::Initial,
            slept_well: None,
            workout_type: None,
            streak: streak_seed,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn slept_well(&self) -> Option<bool> {
        self.slept_well
    }

    pub fn workout_type(&self) -> Option<WorkoutType> {
        self.workout_type
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record the sleep answer. Only valid on `Initial`; the answer may
    /// be changed freely until the routine begins.
    pub fn record_sleep_quality(&mut self, well: bool) -> Result<(), RoutineError> {
        if self.step != Step::Initial {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "record_sleep_quality",
            });
        }
        self.slept_well = Some(well);
        Ok(())
    }

    /// Leave `Initial` for the first activity: workout when rested,
    /// meditation when tired. Requires a recorded sleep answer.
    pub fn begin_routine(&mut self) -> Result<Step, RoutineError> {
        if self.step != Step::Initial {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "begin_routine",
            });
        }
        self.step = match self.slept_well {
            Some(true) => Step::Workout,
            Some(false) => Step::Meditation,
            None => return Err(RoutineError::SleepQualityNotRecorded),
        };
        Ok(self.step)
    }

    /// Choose the workout variant. Valid once, on the workout step.
    pub fn select_workout_type(&mut self, workout: WorkoutType) -> Result<(), RoutineError> {
        if self.step != Step::Workout {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "select_workout_type",
            });
        }
        if let Some(current) = self.workout_type {
            return Err(RoutineError::WorkoutAlreadySelected { current });
        }
        self.workout_type = Some(workout);
        Ok(())
    }

    /// Move to the defined successor of the current step.
    ///
    /// "Next", "Skip" and "Done" all land here. `Initial`, `Space` and
    /// `Complete` have no linear successor and reject the call: `Initial`
    /// leaves through [`begin_routine`](Self::begin_routine), `Space`
    /// through [`choose_space_outcome`](Self::choose_space_outcome).
    pub fn advance(&mut self) -> Result<Step, RoutineError> {
        match self.step.successor() {
            Some(next) => {
                self.step = next;
                Ok(next)
            }
            None => Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "advance",
            }),
        }
    }

    /// Answer the space check: a messy space detours through `Declutter`,
    /// a tidy one completes the routine.
    pub fn choose_space_outcome(&mut self, messy: bool) -> Result<Step, RoutineError> {
        if self.step != Step::Space {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "choose_space_outcome",
            });
        }
        self.step = if messy { Step::Declutter } else { Step::Complete };
        Ok(self.step)
    }

    /// Confirm completion: bump the streak and return to `Initial` with
    /// all transient fields cleared. Returns the new streak.
    pub fn complete_routine(&mut self) -> Result<u32, RoutineError> {
        if self.step != Step::Complete {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "complete_routine",
            });
        }
        self.streak = self.streak.saturating_add(1);
        self.step = Step::Initial;
        self.clear_transient();
        Ok(self.streak)
    }

    /// The "back" affordance: return to `Initial` from any later step.
    /// Leaves the streak untouched.
    pub fn reset_to_initial(&mut self) -> Result<(), RoutineError> {
        if self.step == Step::Initial {
            return Err(RoutineError::InvalidTransition {
                from: self.step,
                operation: "reset_to_initial",
            });
        }
        self.step = Step::Initial;
        self.clear_transient();
        Ok(())
    }

    fn clear_transient(&mut self) {
        self.slept_well = None;
        self.workout_type = None;
    }
}
