/*!
 * Admission Tests
 * First-fit-by-arrival admission into the memory pool
 */

use pretty_assertions::assert_eq;
use process_sim::{Pid, ProcessRequest, ProcessState, Scheduler};

fn pids(processes: &[process_sim::Process]) -> Vec<Pid> {
    processes.iter().map(|p| p.pid).collect()
}

#[test]
fn test_large_process_waits_until_memory_frees() {
    let scheduler = Scheduler::with_capacity(100);

    let a = scheduler.submit(ProcessRequest::new("A", 60, 5));
    let b = scheduler.submit(ProcessRequest::new("B", 50, 3));

    assert_eq!(pids(&scheduler.running()), vec![a]);
    assert_eq!(pids(&scheduler.waiting()), vec![b]);
    assert_eq!(scheduler.memory_usage().available_mb, 40);

    for _ in 0..4 {
        let report = scheduler.tick();
        assert!(report.completed.is_empty());
        assert_eq!(scheduler.memory_usage().available_mb, 40);
    }

    // A expires on the fifth tick and B is admitted in the same tick
    let report = scheduler.tick();
    assert_eq!(report.completed, vec![a]);
    assert_eq!(report.admitted, vec![b]);

    assert_eq!(pids(&scheduler.terminated()), vec![a]);
    assert_eq!(pids(&scheduler.running()), vec![b]);
    assert_eq!(scheduler.memory_usage().used_mb, 50);
}

#[test]
fn test_submitted_process_is_admitted_immediately_when_it_fits() {
    let scheduler = Scheduler::with_capacity(100);
    let pid = scheduler.submit(ProcessRequest::new("quick", 30, 2));

    let process = scheduler.find(pid).unwrap();
    assert_eq!(process.state, ProcessState::Running);
    assert!(process.started_at.is_some());
    assert_eq!(scheduler.memory_usage().used_mb, 30);
}

#[test]
fn test_smaller_later_process_bypasses_blocked_head() {
    let scheduler = Scheduler::with_capacity(100);

    let a = scheduler.submit(ProcessRequest::new("A", 70, 4));
    let big = scheduler.submit(ProcessRequest::new("big", 80, 4));
    let small = scheduler.submit(ProcessRequest::new("small", 20, 4));

    assert_eq!(pids(&scheduler.running()), vec![a, small]);
    assert_eq!(pids(&scheduler.waiting()), vec![big]);
}

#[test]
fn test_earlier_process_wins_when_both_fit() {
    let scheduler = Scheduler::with_capacity(100);

    let blocker = scheduler.submit(ProcessRequest::new("blocker", 100, 1));
    let first = scheduler.submit(ProcessRequest::new("first", 60, 3));
    let second = scheduler.submit(ProcessRequest::new("second", 60, 3));
    assert_eq!(pids(&scheduler.waiting()), vec![first, second]);

    let report = scheduler.tick();

    assert_eq!(report.completed, vec![blocker]);
    assert_eq!(report.admitted, vec![first]);
    assert_eq!(pids(&scheduler.waiting()), vec![second]);
}

#[test]
fn test_every_waiting_process_gets_an_attempt_per_pass() {
    let scheduler = Scheduler::with_capacity(100);

    let blocker = scheduler.submit(ProcessRequest::new("blocker", 100, 1));
    let queued: Vec<Pid> = (0..4)
        .map(|i| scheduler.submit(ProcessRequest::new(format!("p{i}"), 25, 2)))
        .collect();

    let report = scheduler.tick();

    assert_eq!(report.completed, vec![blocker]);
    assert_eq!(report.admitted, queued);
    assert!(scheduler.waiting().is_empty());
    assert_eq!(scheduler.memory_usage().available_mb, 0);
}

#[test]
fn test_pids_are_unique_and_increasing() {
    let scheduler = Scheduler::with_capacity(1024);
    let submitted: Vec<Pid> = (0..10)
        .map(|_| scheduler.submit(ProcessRequest::random()))
        .collect();

    assert!(submitted.windows(2).all(|w| w[0] < w[1]));
}
