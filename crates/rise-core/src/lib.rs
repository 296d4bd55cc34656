//! # Rise Core Library
//!
//! Core business logic for Rise, a guided morning-routine companion. It
//! implements a CLI-first philosophy: every operation is available through
//! the standalone `rise-cli` binary, which is a thin interactive layer
//! over this library.
//!
//! ## Architecture
//!
//! - **Routine machine**: a pure step state machine covering the morning
//!   sequence, its sleep-quality branch and the optional declutter detour
//! - **Countdown**: a caller-ticked per-step countdown; the front end
//!   invokes `tick()` about once per second while it runs
//! - **Session**: the aggregate that owns one machine and one countdown
//!   and keeps them consistent across step changes
//! - **Config**: TOML-based preferences (streak seed, display options)
//!
//! ## Key Components
//!
//! - [`RoutineMachine`]: step sequencing and streak accounting
//! - [`Countdown`]: the single per-step countdown
//! - [`RoutineSession`]: intent dispatch and state snapshots
//! - [`Config`]: preferences management

pub mod config;
pub mod error;
pub mod events;
pub mod routine;
pub mod session;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, RoutineError, TimerError};
pub use events::Event;
pub use routine::{RoutineMachine, Step, WorkoutType};
pub use session::{Intent, RoutineSession};
pub use timer::{format_clock, Countdown, Tick};
