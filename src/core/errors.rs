/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 *
 * Running out of memory is not an error here: a reservation that does not
 * fit simply leaves the process waiting.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Submission-boundary errors with serialization support
///
/// Raised by request validation before anything reaches the scheduler.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process name cannot be empty")]
    #[diagnostic(
        code(process::empty_name),
        help("Provide a name or omit it to get one derived from the pid.")
    )]
    EmptyName,

    #[error("Memory requirement must be positive")]
    #[diagnostic(
        code(process::invalid_memory),
        help("Request at least 1 MB, or omit the value to draw a random one.")
    )]
    ZeroMemory,

    #[error("Duration must be positive")]
    #[diagnostic(
        code(process::invalid_duration),
        help("Request at least one tick, or omit the value to draw a random one.")
    )]
    ZeroDuration,

    #[error("Process needs {requested} MB but the pool only holds {total} MB")]
    #[diagnostic(
        code(process::exceeds_pool),
        help("A process larger than the whole pool would wait forever.")
    )]
    ExceedsPool { requested: u64, total: u64 },
}

/// Scheduler lifecycle errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("No tokio runtime available to host the scheduler loop")]
    #[diagnostic(
        code(scheduler::no_runtime),
        help("Call start() from inside a tokio runtime context.")
    )]
    NoRuntime,

    #[error("Tick interval must be positive")]
    #[diagnostic(
        code(scheduler::invalid_interval),
        help("Configure a non-zero tick_interval, or build with Scheduler::try_new.")
    )]
    InvalidInterval,

    #[error("Scheduler loop task failed: {0}")]
    #[diagnostic(
        code(scheduler::task_failed),
        help("The background loop panicked or was aborted. Check logs for details.")
    )]
    TaskFailed(String),
}

/// Configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Expected an unsigned integer.")
    )]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Review the pool size, tick interval and generation ranges.")
    )]
    Invalid(String),
}
