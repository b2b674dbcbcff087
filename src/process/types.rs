/*!
 * Process Types
 * The record describing one unit of simulated work and its lifecycle
 */

use crate::core::id::Pid;
use crate::core::types::{MemoryMb, Ticks};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Queued until its memory can be reserved
    Waiting,
    /// Holding its reservation and counting down
    Running,
    /// Ran to completion; memory has been returned
    Terminated,
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ProcessState::Waiting => write!(f, "waiting"),
            ProcessState::Running => write!(f, "running"),
            ProcessState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Simulated process
///
/// Occupies pool memory if and only if `state` is `Running`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub name: String,
    pub memory_mb: MemoryMb,
    pub duration: Ticks,
    pub remaining: Ticks,
    pub state: ProcessState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<SystemTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<SystemTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Duration>,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(pid: Pid, name: String, memory_mb: MemoryMb, duration: Ticks) -> Self {
        Self {
            pid,
            name,
            memory_mb,
            duration,
            remaining: duration,
            state: ProcessState::Waiting,
            started_at: None,
            finished_at: None,
            runtime: None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        matches!(self.state, ProcessState::Waiting)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Ticks already consumed
    #[inline]
    pub fn elapsed(&self) -> Ticks {
        self.duration - self.remaining
    }

    pub(crate) fn mark_running(&mut self, now: SystemTime) {
        self.state = ProcessState::Running;
        self.started_at = Some(now);
    }

    /// Consume one tick; true once nothing remains
    pub(crate) fn advance(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub(crate) fn mark_terminated(&mut self, now: SystemTime) {
        self.state = ProcessState::Terminated;
        self.finished_at = Some(now);
        // A clock step backwards yields zero rather than an error
        self.runtime = self
            .started_at
            .map(|start| now.duration_since(start).unwrap_or_default());
    }
}
