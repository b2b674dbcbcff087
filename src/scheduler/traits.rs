/*!
 * Scheduler Traits
 * Interfaces a presentation layer drives the simulator through
 */

use super::stats::Statistics;
use super::types::SchedulerSnapshot;
use super::Scheduler;
use crate::core::id::Pid;
use crate::memory::MemoryUsage;
use crate::process::ProcessRequest;

/// Mutating operations exposed to producers
pub trait SimulationControl: Send + Sync {
    fn submit(&self, request: ProcessRequest) -> Pid;

    /// Silent no-op for unknown pids
    fn cancel(&self, pid: Pid) -> bool;

    fn pause(&self);

    fn resume(&self);

    fn reset(&self);
}

/// Read-only operations exposed to observers
pub trait SimulationView: Send + Sync {
    fn snapshot(&self) -> SchedulerSnapshot;

    fn statistics(&self) -> Statistics;

    fn memory_usage(&self) -> MemoryUsage;
}

impl SimulationControl for Scheduler {
    fn submit(&self, request: ProcessRequest) -> Pid {
        Scheduler::submit(self, request)
    }

    fn cancel(&self, pid: Pid) -> bool {
        Scheduler::cancel(self, pid)
    }

    fn pause(&self) {
        Scheduler::pause(self)
    }

    fn resume(&self) {
        Scheduler::resume(self)
    }

    fn reset(&self) {
        Scheduler::reset(self)
    }
}

impl SimulationView for Scheduler {
    fn snapshot(&self) -> SchedulerSnapshot {
        Scheduler::snapshot(self)
    }

    fn statistics(&self) -> Statistics {
        Scheduler::statistics(self)
    }

    fn memory_usage(&self) -> MemoryUsage {
        Scheduler::memory_usage(self)
    }
}
