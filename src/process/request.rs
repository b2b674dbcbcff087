/*!
 * Process Requests
 * What a caller asks for when submitting; unset fields are filled in later
 */

use crate::core::types::{MemoryMb, Ticks};
use serde::{Deserialize, Serialize};

/// Submission request
///
/// Omitted memory and duration are drawn from the scheduler's configured
/// ranges; an omitted or blank name is derived from the assigned pid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<MemoryMb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Ticks>,
}

impl ProcessRequest {
    /// Request with every field left to the scheduler
    pub fn random() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Fully specified request
    pub fn new(name: impl Into<String>, memory_mb: MemoryMb, duration: Ticks) -> Self {
        Self {
            name: Some(name.into()),
            memory_mb: Some(memory_mb),
            duration: Some(duration),
        }
    }

    #[must_use]
    pub fn with_memory(mut self, memory_mb: MemoryMb) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Ticks) -> Self {
        self.duration = Some(duration);
        self
    }
}
