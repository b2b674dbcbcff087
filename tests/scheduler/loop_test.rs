/*!
 * Background Loop Tests
 * Driven with tokio's paused clock so tick timing is deterministic
 */

use pretty_assertions::assert_eq;
use process_sim::{LoopState, ProcessRequest, Scheduler, SchedulerConfig};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_millis(100);

fn scheduler(total: u64) -> Scheduler {
    Scheduler::new(
        SchedulerConfig::default()
            .with_total_memory(total)
            .with_tick_interval(INTERVAL),
    )
}

async fn ticks(n: u32) {
    tokio::time::sleep(INTERVAL * n + INTERVAL / 2).await;
}

#[tokio::test(start_paused = true)]
async fn test_loop_runs_admission_scenario() {
    let scheduler = scheduler(100);
    let a = scheduler.submit(ProcessRequest::new("A", 60, 5));
    let b = scheduler.submit(ProcessRequest::new("B", 50, 3));

    scheduler.start().unwrap();
    ticks(5).await;

    assert_eq!(scheduler.terminated()[0].pid, a);
    assert!(scheduler.find(b).unwrap().is_running());
    assert_eq!(scheduler.memory_usage().used_mb, 50);

    ticks(3).await;
    assert_eq!(scheduler.counts(), (0, 0, 2));
    assert_eq!(scheduler.memory_usage().used_mb, 0);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_simulated_time() {
    let scheduler = scheduler(100);
    let pid = scheduler.submit(ProcessRequest::new("long", 10, 10));
    scheduler.start().unwrap();

    ticks(2).await;
    assert_eq!(scheduler.find(pid).unwrap().remaining, 8);

    scheduler.pause();
    scheduler.pause();
    assert_eq!(scheduler.loop_state(), LoopState::Paused);
    ticks(5).await;
    assert_eq!(scheduler.find(pid).unwrap().remaining, 8);

    // Submissions still admit while paused
    let other = scheduler.submit(ProcessRequest::new("other", 10, 1));
    assert!(scheduler.find(other).unwrap().is_running());

    scheduler.resume();
    assert_eq!(scheduler.loop_state(), LoopState::Running);
    ticks(1).await;
    assert_eq!(scheduler.find(pid).unwrap().remaining, 7);
    assert!(scheduler.find(other).unwrap().is_terminated());

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_reset_does_not_stop_the_loop() {
    let scheduler = scheduler(100);
    scheduler.submit(ProcessRequest::new("old", 50, 10));
    scheduler.start().unwrap();
    ticks(1).await;

    scheduler.reset();
    assert_eq!(scheduler.loop_state(), LoopState::Running);

    let fresh = scheduler.submit(ProcessRequest::new("fresh", 50, 2));
    ticks(2).await;

    assert_eq!(scheduler.terminated().len(), 1);
    assert_eq!(scheduler.terminated()[0].pid, fresh);
    assert_eq!(scheduler.memory_usage().used_mb, 0);

    scheduler.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_is_terminal() {
    let scheduler = scheduler(100);
    let pid = scheduler.submit(ProcessRequest::new("p", 10, 10));
    scheduler.start().unwrap();
    ticks(1).await;

    scheduler.stop();
    scheduler.shutdown().await.unwrap();
    assert_eq!(scheduler.loop_state(), LoopState::Stopped);

    let remaining = scheduler.find(pid).unwrap().remaining;
    ticks(3).await;
    assert_eq!(scheduler.find(pid).unwrap().remaining, remaining);

    scheduler.start().unwrap();
    assert_eq!(scheduler.loop_state(), LoopState::Stopped);
}
