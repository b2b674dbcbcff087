/*!
 * Scheduler State
 * The collections guarded together by the scheduler lock
 */

use super::stats::Statistics;
use super::types::TickReport;
use crate::core::id::Pid;
use crate::core::types::MemoryMb;
use crate::memory::MemoryPool;
use crate::process::Process;
use std::collections::{BTreeMap, VecDeque};
use std::time::SystemTime;
use tracing::debug;

/// Everything that must change as one unit
///
/// A process lives in exactly one of `waiting`, `running` or `terminated`
/// (or has been cancelled and dropped). Pool usage always equals the memory
/// of the `running` entries.
#[derive(Debug)]
pub(super) struct SchedulerState {
    pub(super) pool: MemoryPool,
    pub(super) waiting: VecDeque<Process>,
    pub(super) running: BTreeMap<Pid, Process>,
    pub(super) terminated: Vec<Process>,
    pub(super) stats: Statistics,
    pub(super) tick: u64,
}

impl SchedulerState {
    pub(super) fn new(total_memory: MemoryMb) -> Self {
        Self {
            pool: MemoryPool::new(total_memory),
            waiting: VecDeque::new(),
            running: BTreeMap::new(),
            terminated: Vec::new(),
            stats: Statistics::default(),
            tick: 0,
        }
    }

    /// One pass over the waiting queue in arrival order
    ///
    /// Every waiting process gets exactly one reservation attempt. Entries
    /// that do not fit keep their place, and later, smaller ones may still
    /// be admitted past them.
    pub(super) fn admit(&mut self, now: SystemTime) -> Vec<Pid> {
        let mut admitted = Vec::new();
        let mut still_waiting = VecDeque::with_capacity(self.waiting.len());

        while let Some(mut process) = self.waiting.pop_front() {
            if self.pool.reserve(process.memory_mb) {
                process.mark_running(now);
                debug!(
                    pid = %process.pid,
                    memory_mb = process.memory_mb,
                    available_mb = self.pool.available(),
                    "Process admitted"
                );
                admitted.push(process.pid);
                self.running.insert(process.pid, process);
            } else {
                still_waiting.push_back(process);
            }
        }

        self.waiting = still_waiting;
        admitted
    }

    /// Advance every running process by one tick
    ///
    /// Expired processes release their memory and move to history, then
    /// statistics are recomputed once and an admission pass runs so freed
    /// memory is reused within the same tick.
    pub(super) fn advance(&mut self, now: SystemTime) -> TickReport {
        self.tick += 1;

        let expired: Vec<Pid> = self
            .running
            .values_mut()
            .filter_map(|process| process.advance().then_some(process.pid))
            .collect();

        for pid in &expired {
            if let Some(mut process) = self.running.remove(pid) {
                process.mark_terminated(now);
                self.pool.release(process.memory_mb);
                debug!(
                    pid = %process.pid,
                    runtime_ms = process.runtime.map(|d| d.as_millis() as u64),
                    "Process terminated"
                );
                self.terminated.push(process);
            }
        }

        if !expired.is_empty() {
            self.stats = Statistics::from_history(&self.terminated);
        }

        let admitted = self.admit(now);

        TickReport {
            tick: self.tick,
            completed: expired,
            admitted,
        }
    }

    /// Remove a waiting or running process without recording it
    ///
    /// The waiting queue is searched first. Returns the removed process, or
    /// None when the pid is unknown here (already finished or cancelled).
    pub(super) fn cancel(&mut self, pid: Pid) -> Option<Process> {
        if let Some(index) = self.waiting.iter().position(|p| p.pid == pid) {
            return self.waiting.remove(index);
        }

        let process = self.running.remove(&pid)?;
        self.pool.release(process.memory_mb);
        Some(process)
    }

    /// Fresh pool at full capacity and empty collections
    pub(super) fn reset(&mut self) {
        *self = Self::new(self.pool.total());
    }
}
