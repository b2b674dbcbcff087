/*!
 * Scheduler Types
 * Loop states, tick reports and consistent snapshots
 */

use super::stats::Statistics;
use crate::core::id::Pid;
use crate::memory::MemoryUsage;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Background loop state
///
/// `Idle -> Running` on start, `Running <-> Paused` on pause/resume, and any
/// state `-> Stopped` on stop. Stopped is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    Idle,
    Running,
    /// Loop alive but not advancing simulated time
    Paused,
    Stopped,
}

impl LoopState {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for LoopState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick counter after this tick
    pub tick: u64,
    /// Processes that terminated, in pid order
    pub completed: Vec<Pid>,
    /// Processes admitted by the trailing admission pass, in queue order
    pub admitted: Vec<Pid>,
}

impl TickReport {
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.completed.is_empty() && self.admitted.is_empty()
    }
}

/// Every observable collection, captured under one lock acquisition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    pub tick: u64,
    pub loop_state: LoopState,
    pub waiting: Vec<Process>,
    pub running: Vec<Process>,
    /// Oldest first
    pub terminated: Vec<Process>,
    pub statistics: Statistics,
    pub memory: MemoryUsage,
}

impl SchedulerSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
