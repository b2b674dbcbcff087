/*!
 * Scheduler
 *
 * Admits waiting processes into a bounded memory pool, counts running
 * processes down once per tick, reclaims memory on completion or
 * cancellation, and keeps statistics over the terminated history.
 *
 * # Locking
 *
 * The waiting queue, running set, terminated history, statistics and the
 * pool handle sit behind a single `RwLock` and change together: every
 * mutation holds the write lock for its whole body, and every multi-field
 * read holds the read lock, so observers never see a process in two places
 * or counted twice. The pool keeps its own atomic accounting underneath.
 *
 * The background loop (see `task`) is the only intentional suspension
 * point; each lock hold is a single pass over bounded collections.
 */

use crate::core::id::PidGenerator;
use crate::core::types::{ConfigResult, MemoryMb};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;

pub mod config;
mod operations;
mod queries;
mod state;
pub mod stats;
mod task;
pub mod traits;
pub mod types;

pub use config::SchedulerConfig;
pub use stats::Statistics;
pub use traits::{SimulationControl, SimulationView};
pub use types::{LoopState, SchedulerSnapshot, TickReport};

use state::SchedulerState;
use task::LoopControl;

/// Process scheduler and memory manager
///
/// Cheap to clone; clones share all state, so one instance can be handed to
/// the loop, producers and observers alike.
pub struct Scheduler {
    state: Arc<RwLock<SchedulerState>>,
    control: Arc<LoopControl>,
    ids: PidGenerator,
    rng: Arc<Mutex<StdRng>>,
    config: Arc<SchedulerConfig>,
}

impl Scheduler {
    /// Create a scheduler after validating `config`
    pub fn try_new(config: SchedulerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a scheduler from a config already known to be valid
    ///
    /// Nothing is checked here; a zero tick interval is still refused by
    /// `start`.
    pub fn new(config: SchedulerConfig) -> Self {
        info!(
            total_memory_mb = config.total_memory_mb,
            tick_interval_ms = config.tick_interval.as_millis() as u64,
            seeded = config.seed.is_some(),
            "Scheduler initialized"
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state: Arc::new(RwLock::new(SchedulerState::new(config.total_memory_mb))),
            control: Arc::new(LoopControl::new()),
            ids: PidGenerator::default(),
            rng: Arc::new(Mutex::new(rng)),
            config: Arc::new(config),
        }
    }

    /// Scheduler with default settings and a custom pool size
    pub fn with_capacity(total_memory_mb: MemoryMb) -> Self {
        Self::new(SchedulerConfig::default().with_total_memory(total_memory_mb))
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            control: Arc::clone(&self.control),
            ids: self.ids.clone(),
            rng: Arc::clone(&self.rng),
            config: Arc::clone(&self.config),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("loop_state", &self.loop_state())
            .field("memory", &self.memory_usage())
            .finish_non_exhaustive()
    }
}
