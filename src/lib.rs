/*!
 * Process Simulator Library
 *
 * Admission and time-sliced execution of synthetic processes competing for
 * a fixed memory pool. A presentation layer drives it through
 * [`Scheduler`] (or the [`SimulationControl`] / [`SimulationView`] traits)
 * and polls snapshots for display.
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{ConfigError, ProcessError, SchedulerError};
pub use crate::core::id::Pid;
pub use memory::{MemoryPool, MemoryPressure, MemoryUsage};
pub use monitoring::{init_tracing, log_snapshot};
pub use process::{Process, ProcessRequest, ProcessState};
pub use scheduler::{
    LoopState, Scheduler, SchedulerConfig, SchedulerSnapshot, SimulationControl, SimulationView,
    Statistics, TickReport,
};
