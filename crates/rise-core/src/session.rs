//! Interactive routine session.
//!
//! One session owns one routine machine and one countdown. All mutation
//! funnels through [`RoutineSession::apply`] and [`RoutineSession::tick`],
//! which keeps the step/timer coupling rule in a single place: whenever
//! the active step changes, the countdown is cleared.
//!
//! Sessions are independent values; two sessions never share state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, TimerError};
use crate::events::Event;
use crate::routine::{RoutineMachine, Step, WorkoutType};
use crate::timer::{format_clock, Countdown, Tick};

/// A discrete user intent, as surfaced by a front end.
///
/// "Next", "Skip" and the "Done" confirmation are presentation variants
/// of the same transition and all map to [`Intent::Advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    AnswerSleep { well: bool },
    Begin,
    ChooseWorkout { workout: WorkoutType },
    StartTimer,
    Advance,
    AssessSpace { messy: bool },
    Complete,
    Reset,
}

/// Session aggregate: one routine machine plus one countdown.
#[derive(Debug, Clone)]
pub struct RoutineSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    machine: RoutineMachine,
    countdown: Countdown,
}

impl RoutineSession {
    /// Create a fresh session at `Initial` with the given streak seed.
    pub fn new(streak_seed: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            machine: RoutineMachine::new(streak_seed),
            countdown: Countdown::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn step(&self) -> Step {
        self.machine.step()
    }

    pub fn streak(&self) -> u32 {
        self.machine.streak()
    }

    pub fn machine(&self) -> &RoutineMachine {
        &self.machine
    }

    pub fn timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn timer_remaining_secs(&self) -> Option<u32> {
        self.countdown.remaining_secs()
    }

    /// Full render-ready view of the session.
    pub fn snapshot(&self) -> Event {
        let step = self.machine.step();
        Event::StateSnapshot {
            step,
            step_title: step.title().to_string(),
            slept_well: self.machine.slept_well(),
            workout_type: self.machine.workout_type(),
            streak: self.machine.streak(),
            timer_remaining_secs: self.countdown.remaining_secs(),
            timer_running: self.countdown.is_running(),
            clock: self.countdown.remaining_secs().map(format_clock),
            default_clock: step.countdown_secs().map(format_clock),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one user intent. Returns the events it produced, oldest
    /// first. Precondition violations leave the session untouched.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<Event>, CoreError> {
        let events = match intent {
            Intent::AnswerSleep { well } => {
                self.machine.record_sleep_quality(well)?;
                vec![Event::SleepRecorded {
                    slept_well: well,
                    at: Utc::now(),
                }]
            }
            Intent::Begin => {
                let first_step = self.machine.begin_routine()?;
                let mut events = self.clear_countdown();
                events.push(Event::RoutineStarted {
                    first_step,
                    at: Utc::now(),
                });
                events
            }
            Intent::ChooseWorkout { workout } => {
                self.machine.select_workout_type(workout)?;
                vec![Event::WorkoutSelected {
                    workout,
                    at: Utc::now(),
                }]
            }
            Intent::StartTimer => {
                let step = self.machine.step();
                let duration_secs = step
                    .countdown_secs()
                    .ok_or(TimerError::StepNotTimed { step })?;
                self.countdown.start(duration_secs)?;
                vec![Event::TimerStarted {
                    step,
                    duration_secs,
                    at: Utc::now(),
                }]
            }
            Intent::Advance => {
                let from = self.machine.step();
                let to = self.machine.advance()?;
                let mut events = self.clear_countdown();
                events.push(Event::StepAdvanced {
                    from,
                    to,
                    at: Utc::now(),
                });
                events
            }
            Intent::AssessSpace { messy } => {
                let to = self.machine.choose_space_outcome(messy)?;
                let mut events = self.clear_countdown();
                events.push(Event::SpaceAssessed {
                    messy,
                    to,
                    at: Utc::now(),
                });
                events
            }
            Intent::Complete => {
                let streak = self.machine.complete_routine()?;
                let mut events = self.clear_countdown();
                events.push(Event::RoutineCompleted {
                    streak,
                    at: Utc::now(),
                });
                events
            }
            Intent::Reset => {
                self.machine.reset_to_initial()?;
                let mut events = self.clear_countdown();
                events.push(Event::RoutineReset { at: Utc::now() });
                events
            }
        };
        for event in &events {
            debug!(session = %self.id, ?event, "session event");
        }
        Ok(events)
    }

    /// One-second tick from the scheduling collaborator. Returns the
    /// finish event when the countdown crosses zero, `None` otherwise
    /// (including when no countdown is running).
    pub fn tick(&mut self) -> Option<Event> {
        match self.countdown.tick()? {
            Tick::Finished => {
                let event = Event::TimerFinished {
                    step: self.machine.step(),
                    at: Utc::now(),
                };
                debug!(session = %self.id, ?event, "session event");
                Some(event)
            }
            Tick::Ticked { .. } => None,
        }
    }

    /// Drop any countdown, reporting a `TimerCleared` event when one was
    /// actually set.
    fn clear_countdown(&mut self) -> Vec<Event> {
        if self.countdown.remaining_secs().is_none() && !self.countdown.is_running() {
            return Vec::new();
        }
        self.countdown.clear();
        vec![Event::TimerCleared { at: Utc::now() }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rested_routine_end_to_end() {
        let mut session = RoutineSession::new(5);
        session.apply(Intent::AnswerSleep { well: true }).unwrap();
        session.apply(Intent::Begin).unwrap();
        assert_eq!(session.step(), Step::Workout);

        session
            .apply(Intent::ChooseWorkout {
                workout: WorkoutType::Gym,
            })
            .unwrap();
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Stretch);
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Breakfast);
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Shower);
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Dressed);
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Space);

        session.apply(Intent::AssessSpace { messy: false }).unwrap();
        assert_eq!(session.step(), Step::Complete);
        session.apply(Intent::Complete).unwrap();

        assert_eq!(session.step(), Step::Initial);
        assert_eq!(session.streak(), 6);
    }

    #[test]
    fn start_timer_uses_step_duration() {
        let mut session = at_workout();
        let events = session.apply(Intent::StartTimer).unwrap();
        assert!(matches!(
            events.as_slice(),
            [Event::TimerStarted {
                step: Step::Workout,
                duration_secs: 1200,
                ..
            }]
        ));
        assert!(session.timer_running());
    }

    #[test]
    fn start_timer_rejected_on_untimed_step() {
        let mut session = RoutineSession::new(0);
        session.apply(Intent::AnswerSleep { well: false }).unwrap();
        session.apply(Intent::Begin).unwrap();
        session.apply(Intent::Advance).unwrap();
        assert_eq!(session.step(), Step::Breakfast);

        let err = session.apply(Intent::StartTimer).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Timer(TimerError::StepNotTimed {
                step: Step::Breakfast,
            })
        ));
    }

    #[test]
    fn advancing_clears_an_unfinished_countdown() {
        let mut session = at_workout();
        session.apply(Intent::StartTimer).unwrap();
        session.tick();
        assert!(session.timer_remaining_secs().is_some());

        let events = session.apply(Intent::Advance).unwrap();
        assert!(matches!(
            events.as_slice(),
            [
                Event::TimerCleared { .. },
                Event::StepAdvanced {
                    from: Step::Workout,
                    to: Step::Stretch,
                    ..
                },
            ]
        ));
        assert_eq!(session.timer_remaining_secs(), None);
        assert!(!session.timer_running());
    }

    #[test]
    fn back_clears_countdown_and_keeps_streak() {
        let mut session = at_workout();
        session.apply(Intent::StartTimer).unwrap();
        session.apply(Intent::Reset).unwrap();
        assert_eq!(session.step(), Step::Initial);
        assert_eq!(session.timer_remaining_secs(), None);
        assert_eq!(session.streak(), 5);
    }

    #[test]
    fn tick_reports_finish_and_clears() {
        let mut session = RoutineSession::new(0);
        session.apply(Intent::AnswerSleep { well: true }).unwrap();
        session.apply(Intent::Begin).unwrap();
        session
            .apply(Intent::ChooseWorkout {
                workout: WorkoutType::Home,
            })
            .unwrap();
        session.apply(Intent::StartTimer).unwrap();

        let mut finish = None;
        for _ in 0..1200 {
            finish = session.tick();
        }
        assert!(matches!(
            finish,
            Some(Event::TimerFinished {
                step: Step::Workout,
                ..
            })
        ));
        assert_eq!(session.timer_remaining_secs(), None);
        assert!(session.tick().is_none());
    }

    #[test]
    fn snapshot_reports_clocks() {
        let mut session = at_workout();
        if let Event::StateSnapshot {
            clock,
            default_clock,
            ..
        } = session.snapshot()
        {
            assert_eq!(clock, None);
            assert_eq!(default_clock, Some("20:00".to_string()));
        } else {
            panic!("expected StateSnapshot");
        }

        session.apply(Intent::StartTimer).unwrap();
        session.tick();
        if let Event::StateSnapshot { clock, .. } = session.snapshot() {
            assert_eq!(clock, Some("19:59".to_string()));
        } else {
            panic!("expected StateSnapshot");
        }
    }

    #[test]
    fn sessions_do_not_share_streaks() {
        let mut first = RoutineSession::new(5);
        let second = RoutineSession::new(5);
        first.apply(Intent::AnswerSleep { well: true }).unwrap();
        first.apply(Intent::Begin).unwrap();
        for _ in 0..5 {
            first.apply(Intent::Advance).unwrap();
        }
        first.apply(Intent::AssessSpace { messy: false }).unwrap();
        first.apply(Intent::Complete).unwrap();
        assert_eq!(first.streak(), 6);
        assert_eq!(second.streak(), 5);
    }

    /// A session walked to the workout step with streak seed 5.
    fn at_workout() -> RoutineSession {
        let mut session = RoutineSession::new(5);
        session.apply(Intent::AnswerSleep { well: true }).unwrap();
        session.apply(Intent::Begin).unwrap();
        session
            .apply(Intent::ChooseWorkout {
                workout: WorkoutType::Home,
            })
            .unwrap();
        session
    }
}
