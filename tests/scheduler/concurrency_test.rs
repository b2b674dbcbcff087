/*!
 * Concurrency Tests
 * Producers, a ticker and observers hammering one scheduler from threads
 */

use process_sim::{Pid, ProcessRequest, Scheduler, SchedulerConfig};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_observers_never_see_torn_state() {
    let scheduler = Scheduler::new(
        SchedulerConfig::default()
            .with_total_memory(500)
            .with_memory_range(10..=120)
            .with_duration_range(1..=6)
            .with_seed(7),
    );
    let done = Arc::new(AtomicBool::new(false));
    let mut handles = vec![];

    // Producers submit and cancel
    for worker in 0..3u32 {
        let scheduler = scheduler.clone();
        handles.push(thread::spawn(move || {
            for i in 0..200u32 {
                let pid = scheduler.submit(ProcessRequest::random());
                if (i + worker) % 4 == 0 {
                    scheduler.cancel(pid);
                }
            }
        }));
    }

    // Ticker
    {
        let scheduler = scheduler.clone();
        let done = Arc::clone(&done);
        handles.push(thread::spawn(move || {
            while !done.load(Ordering::Acquire) {
                scheduler.tick();
                thread::yield_now();
            }
        }));
    }

    // Observer checks invariants on every snapshot
    let observer = {
        let scheduler = scheduler.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut checks = 0u32;
            while !done.load(Ordering::Acquire) || checks == 0 {
                let snapshot = scheduler.snapshot();

                let running_memory: u64 = snapshot.running.iter().map(|p| p.memory_mb).sum();
                assert_eq!(snapshot.memory.used_mb, running_memory);
                assert!(snapshot.memory.available_mb <= snapshot.memory.total_mb);

                let mut seen: HashSet<Pid> = HashSet::new();
                for p in snapshot
                    .waiting
                    .iter()
                    .chain(&snapshot.running)
                    .chain(&snapshot.terminated)
                {
                    assert!(seen.insert(p.pid), "{} observed twice", p.pid);
                }
                assert!(snapshot.waiting.iter().all(|p| p.is_waiting()));
                assert!(snapshot.running.iter().all(|p| p.is_running()));
                assert!(snapshot.terminated.iter().all(|p| p.is_terminated()));
                assert_eq!(snapshot.statistics.completed, snapshot.terminated.len());

                checks += 1;
            }
            checks
        })
    };

    for handle in handles.drain(..3) {
        handle.join().unwrap();
    }
    done.store(true, Ordering::Release);
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(observer.join().unwrap() > 0);

    // Drain whatever is left and check final accounting
    while scheduler.counts().0 + scheduler.counts().1 > 0 {
        scheduler.tick();
    }
    let memory = scheduler.memory_usage();
    assert_eq!(memory.available_mb, memory.total_mb);
}
