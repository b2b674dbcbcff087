/*!
 * Memory Pool Tests
 * Reservation accounting under arbitrary operation sequences
 */

use pretty_assertions::assert_eq;
use process_sim::{MemoryPool, MemoryPressure};
use proptest::prelude::*;

#[test]
fn test_pool_initialization() {
    let pool = MemoryPool::new(1024);
    let usage = pool.usage();

    assert_eq!(usage.total_mb, 1024);
    assert_eq!(usage.used_mb, 0);
    assert_eq!(usage.available_mb, 1024);
    assert_eq!(usage.pressure(), MemoryPressure::Low);
}

#[test]
fn test_pressure_rises_with_usage() {
    let pool = MemoryPool::new(100);
    assert!(pool.reserve(85));
    assert_eq!(pool.usage().pressure(), MemoryPressure::High);
    assert!(pool.reserve(15));
    assert_eq!(pool.usage().pressure(), MemoryPressure::Critical);
    assert_eq!(pool.usage().usage_percentage(), 100.0);
}

proptest! {
    #[test]
    fn prop_available_tracks_outstanding_reservations(
        total in 1u64..2_000,
        ops in prop::collection::vec((any::<bool>(), 1u64..500), 0..100),
    ) {
        let pool = MemoryPool::new(total);
        let mut held: Vec<u64> = Vec::new();

        for (reserve, amount) in ops {
            if reserve || held.is_empty() {
                let fits = pool.available() >= amount;
                prop_assert_eq!(pool.reserve(amount), fits);
                if fits {
                    held.push(amount);
                }
            } else {
                pool.release(held.pop().unwrap());
            }

            let outstanding: u64 = held.iter().sum();
            prop_assert_eq!(pool.available(), total - outstanding);
            prop_assert!(pool.available() <= total);
        }
    }
}
