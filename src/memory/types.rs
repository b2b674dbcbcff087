/*!
 * Memory Types
 * Usage reporting for the memory pool
 */

use crate::core::limits::{
    MEMORY_PRESSURE_CRITICAL, MEMORY_PRESSURE_HIGH, MEMORY_PRESSURE_MEDIUM,
};
use crate::core::types::MemoryMb;
use serde::{Deserialize, Serialize};

/// Point-in-time memory usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub used_mb: MemoryMb,
    pub available_mb: MemoryMb,
    pub total_mb: MemoryMb,
}

impl MemoryUsage {
    /// Share of the pool in use, 0.0 - 100.0
    pub fn usage_percentage(&self) -> f64 {
        if self.total_mb == 0 {
            return 0.0;
        }
        (self.used_mb as f64 / self.total_mb as f64) * 100.0
    }

    pub fn pressure(&self) -> MemoryPressure {
        let usage = self.usage_percentage();
        if usage >= MEMORY_PRESSURE_CRITICAL {
            MemoryPressure::Critical
        } else if usage >= MEMORY_PRESSURE_HIGH {
            MemoryPressure::High
        } else if usage >= MEMORY_PRESSURE_MEDIUM {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
