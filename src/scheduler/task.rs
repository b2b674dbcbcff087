/*!
 * Scheduler Task - Periodic Background Loop
 *
 * One tokio task wakes every `tick_interval` and, unless paused, runs a
 * tick. Pause and resume only flip a flag the loop reads once per
 * iteration; the loop itself keeps waking. Stop is terminal: the flag is
 * checked at the top of each iteration and a `Notify` cuts the current wait
 * short, but a tick already in progress always finishes.
 *
 * Ticks run synchronously under the scheduler lock, so a cancel racing with
 * the loop is simply serialized before or after it.
 */

use super::types::LoopState;
use super::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

const PHASE_IDLE: u8 = 0;
const PHASE_RUNNING: u8 = 1;
const PHASE_STOPPED: u8 = 2;

/// Loop lifecycle flags shared by every scheduler handle
pub(super) struct LoopControl {
    phase: AtomicU8,
    paused: AtomicBool,
    shutdown: Notify,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl LoopControl {
    pub(super) fn new() -> Self {
        Self {
            phase: AtomicU8::new(PHASE_IDLE),
            paused: AtomicBool::new(false),
            shutdown: Notify::new(),
            handle: Mutex::new(None),
        }
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.phase.load(Ordering::Acquire) == PHASE_STOPPED
    }

    #[inline]
    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }
}

impl Scheduler {
    /// Spawn the background loop on the ambient tokio runtime
    ///
    /// Only the first call spawns anything. Later calls, including any after
    /// `stop`, are logged no-ops.
    pub fn start(&self) -> SchedulerResult<()> {
        let runtime = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        if self.config.tick_interval.is_zero() {
            return Err(SchedulerError::InvalidInterval);
        }

        // Held across the phase change so a concurrent shutdown always finds
        // the handle of a loop it stopped
        let mut handle = self.control.handle.lock();

        if let Err(phase) = self.control.phase.compare_exchange(
            PHASE_IDLE,
            PHASE_RUNNING,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            if phase == PHASE_STOPPED {
                warn!("Scheduler already stopped; start ignored");
            } else {
                debug!("Scheduler loop already running; start ignored");
            }
            return Ok(());
        }

        *handle = Some(runtime.spawn(run_scheduler_loop(self.clone())));
        drop(handle);

        info!(
            interval_ms = self.config.tick_interval.as_millis() as u64,
            "Scheduler task spawned"
        );
        Ok(())
    }

    /// Ask the loop to exit after its current iteration
    pub fn stop(&self) {
        let previous = self.control.phase.swap(PHASE_STOPPED, Ordering::AcqRel);
        if previous != PHASE_STOPPED {
            self.control.shutdown.notify_one();
            info!("Scheduler stop requested");
        }
    }

    /// Stop and wait for the loop task to finish
    pub async fn shutdown(&self) -> SchedulerResult<()> {
        self.stop();

        let handle = self.control.handle.lock().take();
        if let Some(handle) = handle {
            handle
                .await
                .map_err(|e| SchedulerError::TaskFailed(e.to_string()))?;
            info!("Scheduler task shutdown complete");
        }
        Ok(())
    }

    /// Keep the loop alive but stop advancing time
    pub fn pause(&self) {
        if !self.control.paused.swap(true, Ordering::AcqRel) {
            info!("Scheduler paused");
        }
    }

    pub fn resume(&self) {
        if self.control.paused.swap(false, Ordering::AcqRel) {
            info!("Scheduler resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.control.is_paused()
    }

    pub fn loop_state(&self) -> LoopState {
        match self.control.phase.load(Ordering::Acquire) {
            PHASE_IDLE => LoopState::Idle,
            PHASE_RUNNING if self.control.is_paused() => LoopState::Paused,
            PHASE_RUNNING => LoopState::Running,
            _ => LoopState::Stopped,
        }
    }
}

async fn run_scheduler_loop(scheduler: Scheduler) {
    let period = scheduler.config.tick_interval;
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        interval_ms = period.as_millis() as u64,
        "Scheduler loop started"
    );

    loop {
        if scheduler.control.is_stopped() {
            break;
        }

        tokio::select! {
            _ = interval.tick() => {
                if scheduler.control.is_paused() {
                    trace!("Scheduler tick skipped while paused");
                    continue;
                }
                scheduler.tick();
            }

            _ = scheduler.control.shutdown.notified() => {}
        }
    }

    info!(tick = scheduler.current_tick(), "Scheduler loop stopped");
}
