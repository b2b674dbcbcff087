/*!
 * Simulator Limits and Constants
 *
 * Defaults for the memory pool, the generated workload and the loop cadence.
 */

use std::time::Duration;

// =============================================================================
// MEMORY
// =============================================================================

/// Total simulated memory pool (1GB expressed in MB)
pub const DEFAULT_MEMORY_POOL_MB: u64 = 1024;

/// Usage percentage at which pressure is reported as medium
pub const MEMORY_PRESSURE_MEDIUM: f64 = 60.0;

/// Usage percentage at which pressure is reported as high
pub const MEMORY_PRESSURE_HIGH: f64 = 80.0;

/// Usage percentage at which pressure is reported as critical
pub const MEMORY_PRESSURE_CRITICAL: f64 = 95.0;

// =============================================================================
// GENERATED WORKLOAD
// =============================================================================

/// Smallest memory requirement drawn for a process without one
pub const DEFAULT_MIN_PROCESS_MEMORY_MB: u64 = 50;

/// Largest memory requirement drawn for a process without one
pub const DEFAULT_MAX_PROCESS_MEMORY_MB: u64 = 250;

/// Shortest duration drawn for a process without one
pub const DEFAULT_MIN_PROCESS_DURATION: u32 = 5;

/// Longest duration drawn for a process without one
pub const DEFAULT_MAX_PROCESS_DURATION: u32 = 20;

// =============================================================================
// SCHEDULER LOOP
// =============================================================================

/// Wall-clock length of one simulated time unit
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Prefix used for names derived from the pid
pub const DEFAULT_PROCESS_NAME_PREFIX: &str = "Process";
