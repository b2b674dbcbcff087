/*!
 * Scheduler Configuration
 * Pool size, loop cadence and the ranges used for generated processes
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_MAX_PROCESS_DURATION, DEFAULT_MAX_PROCESS_MEMORY_MB, DEFAULT_MEMORY_POOL_MB,
    DEFAULT_MIN_PROCESS_DURATION, DEFAULT_MIN_PROCESS_MEMORY_MB, DEFAULT_TICK_INTERVAL,
};
use crate::core::types::{ConfigResult, MemoryMb, Ticks};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Environment variable holding the pool size in MB
pub const ENV_TOTAL_MEMORY: &str = "SIM_TOTAL_MEMORY_MB";
/// Environment variable holding the tick interval in milliseconds
pub const ENV_TICK_INTERVAL: &str = "SIM_TICK_INTERVAL_MS";
/// Environment variable holding the RNG seed
pub const ENV_SEED: &str = "SIM_SEED";

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    pub total_memory_mb: MemoryMb,
    /// Wall-clock length of one simulated tick
    pub tick_interval: Duration,
    pub memory_range_mb: RangeInclusive<MemoryMb>,
    pub duration_range: RangeInclusive<Ticks>,
    /// Fixed seed for reproducible generated workloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            total_memory_mb: DEFAULT_MEMORY_POOL_MB,
            tick_interval: DEFAULT_TICK_INTERVAL,
            memory_range_mb: DEFAULT_MIN_PROCESS_MEMORY_MB..=DEFAULT_MAX_PROCESS_MEMORY_MB,
            duration_range: DEFAULT_MIN_PROCESS_DURATION..=DEFAULT_MAX_PROCESS_DURATION,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    pub fn with_total_memory(mut self, total_memory_mb: MemoryMb) -> Self {
        self.total_memory_mb = total_memory_mb;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_memory_range(mut self, range: RangeInclusive<MemoryMb>) -> Self {
        self.memory_range_mb = range;
        self
    }

    pub fn with_duration_range(mut self, range: RangeInclusive<Ticks>) -> Self {
        self.duration_range = range;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Defaults overridden by `SIM_*` environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SIM_*` key
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(total) = parse_u64(&lookup, ENV_TOTAL_MEMORY)? {
            config.total_memory_mb = total;
        }
        if let Some(millis) = parse_u64(&lookup, ENV_TICK_INTERVAL)? {
            config.tick_interval = Duration::from_millis(millis);
        }
        config.seed = parse_u64(&lookup, ENV_SEED)?.or(config.seed);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.total_memory_mb == 0 {
            return Err(ConfigError::Invalid("memory pool must be non-empty".into()));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::Invalid("tick interval must be positive".into()));
        }
        if self.memory_range_mb.is_empty() || *self.memory_range_mb.start() == 0 {
            return Err(ConfigError::Invalid(format!(
                "memory range {:?} must be non-empty and start above zero",
                self.memory_range_mb
            )));
        }
        if *self.memory_range_mb.end() > self.total_memory_mb {
            return Err(ConfigError::Invalid(format!(
                "memory range {:?} reaches past the {} MB pool",
                self.memory_range_mb, self.total_memory_mb
            )));
        }
        if self.duration_range.is_empty() || *self.duration_range.start() == 0 {
            return Err(ConfigError::Invalid(format!(
                "duration range {:?} must be non-empty and start above zero",
                self.duration_range
            )));
        }
        Ok(())
    }
}

fn parse_u64<F>(lookup: &F, key: &str) -> ConfigResult<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        None => Ok(None),
    }
}
