/*!
 * Core Types
 * Common types used across the simulator
 */

/// Memory quantity in MB-equivalent units
pub type MemoryMb = u64;

/// Simulated time in ticks (one tick per loop interval)
pub type Ticks = u32;

/// Common result type for scheduler lifecycle operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;

/// Common result type for submission-boundary operations
pub type ProcessResult<T> = Result<T, super::errors::ProcessError>;

/// Common result type for configuration loading
pub type ConfigResult<T> = Result<T, super::errors::ConfigError>;
