/*!
 * Structured Tracing
 * Subscriber setup and snapshot logging using the tracing crate
 */

use crate::scheduler::SchedulerSnapshot;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable switching output to JSON
pub const ENV_TRACE_JSON: &str = "SIM_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// One summary line per snapshot, the way a dashboard would poll it
pub fn log_snapshot(snapshot: &SchedulerSnapshot) {
    info!(
        tick = snapshot.tick,
        state = %snapshot.loop_state,
        waiting = snapshot.waiting.len(),
        running = snapshot.running.len(),
        terminated = snapshot.terminated.len(),
        used_mb = snapshot.memory.used_mb,
        total_mb = snapshot.memory.total_mb,
        usage_pct = format_args!("{:.1}", snapshot.memory.usage_percentage()),
        pressure = %snapshot.memory.pressure(),
        avg_memory_mb = format_args!("{:.0}", snapshot.statistics.avg_memory_mb),
        avg_runtime_s = format_args!("{:.1}", snapshot.statistics.avg_runtime_secs),
        "Simulation state"
    );
}
