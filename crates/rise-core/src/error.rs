//! Core error types for rise-core.
//!
//! Routine and timer errors are precondition violations: a front end that
//! only offers the controls valid for the current state never triggers
//! them. They are surfaced as typed errors so callers can treat them as
//! programmer mistakes rather than user-facing failures.

use std::path::PathBuf;
use thiserror::Error;

use crate::routine::{Step, WorkoutType};

/// Core error type for rise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Routine state machine errors
    #[error("routine error: {0}")]
    Routine(#[from] RoutineError),

    /// Countdown timer errors
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Routine state machine errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineError {
    /// An operation was requested from a step that does not define it.
    #[error("'{operation}' is not defined for step {from:?}")]
    InvalidTransition { from: Step, operation: &'static str },

    /// The routine was started before the sleep question was answered.
    #[error("cannot begin the routine before sleep quality is recorded")]
    SleepQualityNotRecorded,

    /// A workout type was selected while one was already chosen.
    #[error("workout type already selected: {current:?}")]
    WorkoutAlreadySelected { current: WorkoutType },
}

/// Countdown timer errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// `start` was called while a countdown was already set.
    #[error("a countdown is already set ({remaining_secs}s remaining)")]
    AlreadyActive { remaining_secs: u32 },

    /// `start` was called with a zero duration.
    #[error("countdown duration must be positive")]
    InvalidDuration,

    /// A countdown was requested on a step that has none.
    #[error("step {step:?} has no countdown")]
    StepNotTimed { step: Step },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-separated configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value could not be parsed for the key's type
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
