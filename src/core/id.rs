/*!
 * ID Generation
 * Type-safe process identifiers and a monotonic lock-free generator
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Process ID
///
/// Rendered as `P<n>`. Ids are handed out once and never recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl Pid {
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Atomic counter for process ids
///
/// Clones share the same counter, so every handle to a scheduler draws from
/// one sequence.
#[derive(Debug)]
pub struct PidGenerator {
    counter: Arc<AtomicU32>,
}

impl PidGenerator {
    /// Create new generator starting at given value
    #[inline]
    pub fn new(start: u32) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(start)),
        }
    }

    /// Next unused pid
    #[inline]
    pub fn next(&self) -> Pid {
        Pid(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for PidGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Clone for PidGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
        }
    }
}
