/*!
 * Memory Pool
 *
 * Fixed total capacity with lock-free reserve/release accounting.
 *
 * A reservation is a compare-and-swap on the available counter, so concurrent
 * reservers can never drive it below zero. Release is a plain add: callers
 * only hand back amounts they previously reserved.
 */

use super::types::MemoryUsage;
use crate::core::types::MemoryMb;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Memory pool
///
/// # Performance
/// - Cache-line aligned so the hot counter does not share a line with
///   neighbouring scheduler state
#[repr(C, align(64))]
#[derive(Debug)]
pub struct MemoryPool {
    total: MemoryMb,
    available: AtomicU64,
}

impl MemoryPool {
    /// Create a pool with every unit available
    pub fn new(total: MemoryMb) -> Self {
        debug!(total_mb = total, "Memory pool initialized");
        Self {
            total,
            available: AtomicU64::new(total),
        }
    }

    /// Try to take `amount` units from the pool
    ///
    /// Returns false, with no side effect, when fewer than `amount` units are
    /// available.
    #[must_use]
    pub fn reserve(&self, amount: MemoryMb) -> bool {
        let reserved = self
            .available
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |available| {
                available.checked_sub(amount)
            })
            .is_ok();

        trace!(amount, reserved, "Memory reservation attempt");
        reserved
    }

    /// Return `amount` previously reserved units to the pool
    pub fn release(&self, amount: MemoryMb) {
        let previous = self.available.fetch_add(amount, Ordering::AcqRel);
        debug_assert!(
            previous
                .checked_add(amount)
                .is_some_and(|restored| restored <= self.total),
            "released more memory than was reserved"
        );
        trace!(amount, "Memory released");
    }

    #[inline]
    pub fn total(&self) -> MemoryMb {
        self.total
    }

    #[inline]
    pub fn available(&self) -> MemoryMb {
        self.available.load(Ordering::Acquire)
    }

    pub fn usage(&self) -> MemoryUsage {
        let available = self.available();
        MemoryUsage {
            used_mb: self.total - available,
            available_mb: available,
            total_mb: self.total,
        }
    }
}
