/*!
 * Scheduler Queries
 * Read-only accessors returning owned copies
 *
 * Safe to call at any rate from any thread while the loop and producers run.
 */

use super::stats::Statistics;
use super::types::SchedulerSnapshot;
use super::Scheduler;
use crate::core::id::Pid;
use crate::memory::MemoryUsage;
use crate::process::Process;

impl Scheduler {
    /// Waiting queue in arrival order
    pub fn waiting(&self) -> Vec<Process> {
        self.state.read().waiting.iter().cloned().collect()
    }

    /// Running processes in pid order
    pub fn running(&self) -> Vec<Process> {
        self.state.read().running.values().cloned().collect()
    }

    /// Terminated history, oldest first
    pub fn terminated(&self) -> Vec<Process> {
        self.state.read().terminated.clone()
    }

    /// Terminated history, most recent first
    pub fn terminated_recent_first(&self) -> Vec<Process> {
        self.state.read().terminated.iter().rev().cloned().collect()
    }

    pub fn statistics(&self) -> Statistics {
        self.state.read().stats
    }

    pub fn memory_usage(&self) -> MemoryUsage {
        self.state.read().pool.usage()
    }

    /// Ticks since construction or the last reset
    pub fn current_tick(&self) -> u64 {
        self.state.read().tick
    }

    /// Look a process up wherever it currently is
    ///
    /// Cancelled processes are gone and return None.
    pub fn find(&self, pid: Pid) -> Option<Process> {
        let state = self.state.read();
        state
            .running
            .get(&pid)
            .or_else(|| state.waiting.iter().find(|p| p.pid == pid))
            .or_else(|| state.terminated.iter().find(|p| p.pid == pid))
            .cloned()
    }

    /// (waiting, running, terminated) counts from one consistent view
    pub fn counts(&self) -> (usize, usize, usize) {
        let state = self.state.read();
        (
            state.waiting.len(),
            state.running.len(),
            state.terminated.len(),
        )
    }

    /// Every collection plus statistics and memory, from one lock acquisition
    pub fn snapshot(&self) -> SchedulerSnapshot {
        let loop_state = self.loop_state();
        let state = self.state.read();
        SchedulerSnapshot {
            tick: state.tick,
            loop_state,
            waiting: state.waiting.iter().cloned().collect(),
            running: state.running.values().cloned().collect(),
            terminated: state.terminated.clone(),
            statistics: state.stats,
            memory: state.pool.usage(),
        }
    }
}
