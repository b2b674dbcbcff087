/*!
 * Scheduler Core Operations
 * Submit, cancel, tick and reset
 */

use super::types::TickReport;
use super::Scheduler;
use crate::core::id::Pid;
use crate::core::limits::DEFAULT_PROCESS_NAME_PREFIX;
use crate::core::types::{MemoryMb, ProcessResult, Ticks};
use crate::process::{validate_request, Process, ProcessRequest};
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::SystemTime;
use tracing::{debug, info, trace};

impl Scheduler {
    /// Queue a process and run one admission pass
    ///
    /// Inputs are trusted; use `submit_checked` at an untrusted boundary.
    /// The returned pid may already be running when this returns.
    pub fn submit(&self, request: ProcessRequest) -> Pid {
        let (memory_mb, duration) = self.fill_in(&request);

        let mut state = self.state.write();
        // Assigned under the lock so queue order matches pid order
        let pid = self.ids.next();
        let name = match request.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("{}-{}", DEFAULT_PROCESS_NAME_PREFIX, pid),
        };

        info!(
            pid = %pid,
            name = %name,
            memory_mb,
            duration,
            "Process submitted"
        );

        state
            .waiting
            .push_back(Process::new(pid, name, memory_mb, duration));
        let admitted = state.admit(SystemTime::now());

        debug!(
            admitted = admitted.len(),
            waiting = state.waiting.len(),
            "Admission pass after submit"
        );

        pid
    }

    /// Validate against the current pool size, then submit
    ///
    /// Generated values are drawn first and checked too, so nothing larger
    /// than the pool is ever queued.
    pub fn submit_checked(&self, request: ProcessRequest) -> ProcessResult<Pid> {
        validate_request(&request, self.config.total_memory_mb)?;

        let (memory_mb, duration) = self.fill_in(&request);
        let request = ProcessRequest {
            memory_mb: Some(memory_mb),
            duration: Some(duration),
            ..request
        };
        validate_request(&request, self.config.total_memory_mb)?;

        Ok(self.submit(request))
    }

    /// Remove a waiting or running process, releasing any reservation
    ///
    /// Unknown pids are a silent no-op: the process may have just finished
    /// or been cancelled by someone else. Returns whether anything was
    /// removed. Cancelled processes never reach history or statistics.
    pub fn cancel(&self, pid: Pid) -> bool {
        let mut state = self.state.write();
        match state.cancel(pid) {
            Some(process) => {
                info!(
                    pid = %pid,
                    was = %process.state,
                    memory_mb = process.memory_mb,
                    "Process cancelled"
                );
                true
            }
            None => {
                debug!(pid = %pid, "Cancel ignored: process not waiting or running");
                false
            }
        }
    }

    /// Advance simulated time by one unit
    ///
    /// Runs regardless of the pause flag; the background loop is what
    /// honours pause. Exposed so callers can drive time by hand.
    pub fn tick(&self) -> TickReport {
        let report = self.state.write().advance(SystemTime::now());

        if report.is_quiet() {
            trace!(tick = report.tick, "Tick");
        } else {
            debug!(
                tick = report.tick,
                completed = report.completed.len(),
                admitted = report.admitted.len(),
                "Tick"
            );
        }

        report
    }

    /// Replace the pool with a fresh one and clear every collection
    ///
    /// The loop keeps running and its next tick sees the cleared state.
    /// Pids keep counting up; they are never reused.
    pub fn reset(&self) {
        let mut state = self.state.write();
        let dropped = state.waiting.len() + state.running.len();
        state.reset();
        info!(dropped, "Scheduler reset");
    }

    fn fill_in(&self, request: &ProcessRequest) -> (MemoryMb, Ticks) {
        if let (Some(memory_mb), Some(duration)) = (request.memory_mb, request.duration) {
            return (memory_mb, duration);
        }

        let mut rng = self.rng.lock();
        let memory_mb = request
            .memory_mb
            .unwrap_or_else(|| sample(&mut *rng, &self.config.memory_range_mb));
        let duration = request
            .duration
            .unwrap_or_else(|| sample(&mut *rng, &self.config.duration_range));
        (memory_mb, duration)
    }
}

fn sample<T, R>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.gen_range(range.clone())
    }
}
