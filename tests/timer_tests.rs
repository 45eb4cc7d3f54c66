#![cfg(feature = "async")]
//! Tests for the timer-driven decorators on a paused Tokio clock.
//!
//! Tests cover:
//! - delay: fires once, no earlier than the wait
//! - throttle: the three firing policies
//! - both operations outside of a runtime

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::rstest;
use underbar::UnderbarError;
use underbar::function::{
    Scheduler, ThrottlePolicy, TokioScheduler, delay, delay_on, throttle, throttle_with,
};

const WINDOW: Duration = Duration::from_millis(100);

fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Returns a recorder function and the log it appends to.
fn recorder() -> (impl Fn(i32) -> i32 + Send + Sync + 'static, Arc<Mutex<Vec<i32>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let function = move |value: i32| {
        sink.lock().unwrap().push(value);
        value
    };
    (function, log)
}

fn snapshot(log: &Arc<Mutex<Vec<i32>>>) -> Vec<i32> {
    log.lock().unwrap().clone()
}

// =============================================================================
// delay
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_fires_once_after_wait() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let handle = delay(
        move |amount: usize| {
            counter.fetch_add(amount, Ordering::SeqCst);
        },
        WINDOW,
        1,
    )
    .unwrap();

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    tokio::time::sleep(millis(99)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    tokio::time::sleep(millis(2)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    handle.await.unwrap();
    tokio::time::sleep(millis(500)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_returns_before_the_call() {
    let (function, log) = recorder();
    let handle = delay(
        move |value| {
            function(value);
        },
        Duration::ZERO,
        7,
    )
    .unwrap();

    assert!(snapshot(&log).is_empty());
    handle.await.unwrap();
    assert_eq!(snapshot(&log), vec![7]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_on_explicit_scheduler() {
    let scheduler = TokioScheduler::current().unwrap();
    let (function, log) = recorder();
    let handle = delay_on(
        &scheduler,
        move |(left, right): (i32, i32)| {
            function(left * right);
        },
        millis(30),
        (6, 7),
    );
    handle.await.unwrap();
    assert_eq!(snapshot(&log), vec![42]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn scheduler_runs_tasks_in_fire_order() {
    let scheduler = TokioScheduler::current().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));
    let handles: Vec<_> = [(30, 3), (10, 1), (20, 2)]
        .into_iter()
        .map(|(wait, value)| {
            let sink = Arc::clone(&log);
            scheduler.schedule(
                millis(wait),
                Box::new(move || sink.lock().unwrap().push(value)),
            )
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(snapshot(&log), vec![1, 2, 3]);
}

// =============================================================================
// throttle: FireBoth
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_fire_both_runs_leading_and_trailing() {
    let (function, log) = recorder();
    let throttled = throttle(function, WINDOW).unwrap();

    assert_eq!(throttled.call(1), Some(1));
    assert_eq!(throttled.call(2), Some(1));
    assert_eq!(throttled.call(3), Some(1));
    assert_eq!(snapshot(&log), vec![1]);
    assert!(throttled.has_pending());

    tokio::time::sleep(millis(150)).await;
    assert_eq!(snapshot(&log), vec![1, 3]);
    assert_eq!(throttled.last_result(), Some(3));
    assert!(!throttled.has_pending());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_fire_both_runs_no_more_than_once_per_window() {
    let (function, log) = recorder();
    let throttled = throttle(function, WINDOW).unwrap();

    throttled.call(1);
    throttled.call(2);
    tokio::time::sleep(millis(150)).await;
    assert_eq!(snapshot(&log), vec![1, 2]);

    // The trailing run at 100ms opened a new window that closes at 200ms.
    assert_eq!(throttled.call(3), Some(2));
    tokio::time::sleep(millis(49)).await;
    assert_eq!(snapshot(&log), vec![1, 2]);
    tokio::time::sleep(millis(2)).await;
    assert_eq!(snapshot(&log), vec![1, 2, 3]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_fire_both_single_call_has_no_trailing_run() {
    let (function, log) = recorder();
    let throttled = throttle(function, WINDOW).unwrap();

    assert_eq!(throttled.call(5), Some(5));
    tokio::time::sleep(millis(300)).await;
    assert_eq!(snapshot(&log), vec![5]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_after_quiet_period_runs_immediately() {
    let (function, log) = recorder();
    let throttled = throttle(function, WINDOW).unwrap();

    throttled.call(1);
    tokio::time::sleep(millis(250)).await;
    assert_eq!(throttled.call(2), Some(2));
    assert_eq!(snapshot(&log), vec![1, 2]);
}

// =============================================================================
// throttle: DropTrailing / FireTrailing
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_drop_trailing_discards_calls_in_window() {
    let (function, log) = recorder();
    let scheduler = TokioScheduler::current().unwrap();
    let throttled = throttle_with(function, WINDOW, ThrottlePolicy::DropTrailing, scheduler);

    assert_eq!(throttled.call(1), Some(1));
    assert_eq!(throttled.call(2), Some(1));
    tokio::time::sleep(millis(150)).await;
    assert_eq!(snapshot(&log), vec![1]);

    assert_eq!(throttled.call(3), Some(3));
    assert_eq!(snapshot(&log), vec![1, 3]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn throttle_fire_trailing_defers_every_call() {
    let (function, log) = recorder();
    let scheduler = TokioScheduler::current().unwrap();
    let throttled = throttle_with(function, WINDOW, ThrottlePolicy::FireTrailing, scheduler);

    assert_eq!(throttled.call(1), None);
    assert_eq!(throttled.call(2), None);
    assert!(snapshot(&log).is_empty());

    tokio::time::sleep(millis(99)).await;
    assert!(snapshot(&log).is_empty());
    tokio::time::sleep(millis(2)).await;
    assert_eq!(snapshot(&log), vec![2]);
    assert_eq!(throttled.call(3), Some(2));
}

#[rstest]
#[case(ThrottlePolicy::FireBoth)]
#[case(ThrottlePolicy::DropTrailing)]
#[case(ThrottlePolicy::FireTrailing)]
#[tokio::test(start_paused = true)]
async fn throttle_accessors(#[case] policy: ThrottlePolicy) {
    let scheduler = TokioScheduler::current().unwrap();
    let throttled = throttle_with(|value: i32| value, WINDOW, policy, scheduler);
    assert_eq!(throttled.policy(), policy);
    assert_eq!(throttled.wait(), WINDOW);
    assert_eq!(throttled.last_result(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn throttle_is_shared_across_threads() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let scheduler = TokioScheduler::current().unwrap();
    let throttled = Arc::new(throttle_with(
        move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_secs(3600),
        ThrottlePolicy::DropTrailing,
        scheduler,
    ));

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let throttled = Arc::clone(&throttled);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    throttled.call(());
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Outside of a runtime
// =============================================================================

#[rstest]
fn delay_without_runtime_fails() {
    let outcome = delay(|_: ()| {}, WINDOW, ());
    assert!(matches!(outcome, Err(UnderbarError::NoRuntime)));
}

#[rstest]
fn throttle_without_runtime_fails() {
    let outcome = throttle(|value: i32| value, WINDOW);
    assert!(matches!(outcome, Err(UnderbarError::NoRuntime)));
}

#[rstest]
fn no_runtime_error_message() {
    assert_eq!(
        UnderbarError::NoRuntime.to_string(),
        "no timer available: call from within a Tokio runtime"
    );
}
