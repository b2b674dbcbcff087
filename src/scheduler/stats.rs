/*!
 * Scheduler Statistics
 * Aggregate metrics derived from the terminated history
 *
 * Recomputed from the whole history whenever it changes rather than folded
 * in incrementally, so repeated averaging never drifts. Cancelled processes
 * never reach the history and so never count.
 */

use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics over terminated processes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Processes that ran to completion
    pub completed: usize,
    /// Mean memory requirement of completed processes (MB)
    pub avg_memory_mb: f64,
    /// Mean observed runtime of completed processes (seconds)
    pub avg_runtime_secs: f64,
}

impl Statistics {
    /// Aggregate over a terminated history
    ///
    /// All averages are zero for an empty history. Runtime only averages
    /// entries that recorded one.
    pub fn from_history(history: &[Process]) -> Self {
        let completed = history.len();
        if completed == 0 {
            return Self::default();
        }

        let total_memory: u64 = history.iter().map(|p| p.memory_mb).sum();

        let (runtime_sum, runtime_count) = history
            .iter()
            .filter_map(|p| p.runtime)
            .fold((0.0_f64, 0_usize), |(sum, count), runtime| {
                (sum + runtime.as_secs_f64(), count + 1)
            });

        Self {
            completed,
            avg_memory_mb: total_memory as f64 / completed as f64,
            avg_runtime_secs: if runtime_count == 0 {
                0.0
            } else {
                runtime_sum / runtime_count as f64
            },
        }
    }

    #[inline]
    pub fn avg_runtime(&self) -> Duration {
        Duration::from_secs_f64(self.avg_runtime_secs)
    }
}
