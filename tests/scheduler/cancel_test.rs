/*!
 * Cancellation Tests
 * Removal from the waiting queue or running set without touching history
 */

use pretty_assertions::assert_eq;
use process_sim::{Pid, ProcessRequest, Scheduler};

#[test]
fn test_cancel_waiting_process() {
    let scheduler = Scheduler::with_capacity(100);
    let _blocker = scheduler.submit(ProcessRequest::new("blocker", 100, 5));
    let c = scheduler.submit(ProcessRequest::new("C", 30, 2));
    let available_before = scheduler.memory_usage().available_mb;

    assert!(scheduler.cancel(c));

    assert!(scheduler.waiting().is_empty());
    assert_eq!(scheduler.memory_usage().available_mb, available_before);
    assert_eq!(scheduler.statistics().completed, 0);
    assert!(scheduler.find(c).is_none());
}

#[test]
fn test_cancel_running_process_restores_memory() {
    let scheduler = Scheduler::with_capacity(100);
    let available_before = scheduler.memory_usage().available_mb;

    let d = scheduler.submit(ProcessRequest::new("D", 30, 2));
    assert!(scheduler.find(d).unwrap().is_running());

    assert!(scheduler.cancel(d));

    assert!(scheduler.running().is_empty());
    assert_eq!(scheduler.memory_usage().available_mb, available_before);
    assert!(scheduler.terminated().is_empty());
    assert_eq!(scheduler.statistics().completed, 0);
}

#[test]
fn test_cancel_unknown_or_finished_is_noop() {
    let scheduler = Scheduler::with_capacity(100);
    assert!(!scheduler.cancel(Pid(404)));

    let done = scheduler.submit(ProcessRequest::new("done", 10, 1));
    scheduler.tick();

    assert!(!scheduler.cancel(done));
    assert_eq!(scheduler.terminated().len(), 1);
    assert_eq!(scheduler.statistics().completed, 1);
}

#[test]
fn test_cancel_twice_is_noop() {
    let scheduler = Scheduler::with_capacity(100);
    let pid = scheduler.submit(ProcessRequest::new("once", 40, 3));

    assert!(scheduler.cancel(pid));
    assert!(!scheduler.cancel(pid));
    assert_eq!(scheduler.memory_usage().available_mb, 100);
}

#[test]
fn test_cancel_running_admits_waiting_on_next_pass() {
    let scheduler = Scheduler::with_capacity(100);
    let a = scheduler.submit(ProcessRequest::new("A", 80, 10));
    let b = scheduler.submit(ProcessRequest::new("B", 80, 2));

    scheduler.cancel(a);
    // Freed memory is picked up by the next admission pass
    let report = scheduler.tick();

    assert_eq!(report.admitted, vec![b]);
    assert_eq!(scheduler.memory_usage().used_mb, 80);
}
