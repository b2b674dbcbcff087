/*!
 * Process Simulator - Headless Driver
 *
 * Stands in for a dashboard:
 * - Submits an initial batch of random processes
 * - Keeps feeding new ones every few ticks
 * - Polls and logs a snapshot once per tick
 * - Shuts the loop down cleanly on Ctrl+C
 */

use anyhow::Context;
use std::time::Duration;
use tracing::info;

use process_sim::{
    init_tracing, log_snapshot, ProcessRequest, Scheduler, SchedulerConfig, SimulationControl,
    SimulationView,
};

/// Processes submitted before the loop starts
const INITIAL_BATCH: usize = 8;

/// A new random process arrives every this many ticks
const ARRIVAL_EVERY_TICKS: u32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Process simulator starting...");

    let config = SchedulerConfig::from_env().context("Failed to load scheduler configuration")?;
    let tick_interval = config.tick_interval;
    let scheduler = Scheduler::try_new(config).context("Invalid scheduler configuration")?;

    for _ in 0..INITIAL_BATCH {
        scheduler.submit(ProcessRequest::random());
    }

    scheduler
        .start()
        .context("Failed to start scheduler loop")?;

    info!("Press Ctrl+C to exit");

    let feeder = scheduler.clone();
    let observer = scheduler.clone();
    let driver = tokio::spawn(async move {
        drive(&feeder, &observer, tick_interval).await;
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    info!("Shutdown signal received");
    driver.abort();
    scheduler.shutdown().await?;

    let stats = scheduler.statistics();
    info!(
        completed = stats.completed,
        avg_memory_mb = format_args!("{:.0}", stats.avg_memory_mb),
        avg_runtime = ?stats.avg_runtime(),
        "Process simulator stopped"
    );

    Ok(())
}

/// Feed arrivals and poll state, through the presentation-facing traits only
async fn drive(control: &dyn SimulationControl, view: &dyn SimulationView, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut polls: u32 = 0;

    loop {
        interval.tick().await;
        polls = polls.wrapping_add(1);

        if polls % ARRIVAL_EVERY_TICKS == 0 {
            control.submit(ProcessRequest::random());
        }

        log_snapshot(&view.snapshot());
    }
}
