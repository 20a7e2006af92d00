//! Integration tests combining the async helpers with the core combinators

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tapline_core::prelude::*;
use tapline_utils::{cancel_after, cancelled, wait, wait_task, with_cancellation, AsyncRuntime};
use tokio_util::sync::CancellationToken;

#[test]
fn test_wait_on_pipeline_running_in_task() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("runtime");

    let handle = runtime.spawn(async {
        tokio::time::sleep(Duration::from_millis(2)).await;
        vec!["3", "14", "15"]
            .into_iter()
            .fold_pipeline(|s| s.parse::<u32>(), |last| Ok(last + 1))
    });

    let result = wait_task(handle).expect("task completes");
    assert_eq!(result, Ok(16));
}

#[test]
fn test_wait_surfaces_stage_failure() {
    let result = wait(async {
        vec!["1", "two", "3"]
            .into_iter()
            .fold_stage(|s| s.parse::<u32>())
    });

    assert!(result.is_err());
}

#[test]
fn test_mutate_async_under_deadline() {
    let mut runtime = AsyncRuntime::new();
    let log = Arc::new(Mutex::new(Vec::<String>::new()));

    let outcome = runtime.block_on({
        let log = Arc::clone(&log);
        async move {
            let deadline = cancel_after(Duration::from_secs(60))?;
            let returned = with_cancellation(
                log.mutate_async(|handle| async move {
                    handle.lock().unwrap().push("written".to_string());
                    "ignored"
                }),
                &deadline,
            )
            .await?;
            Ok::<_, tapline_core::Error>(returned)
        }
    });

    let returned = outcome.expect("finishes before the deadline");
    assert!(Arc::ptr_eq(&returned, &log));
    assert_eq!(*log.lock().unwrap(), vec!["written".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_deadline_interrupts_slow_work() {
    let deadline = cancel_after(Duration::from_millis(50)).expect("inside runtime");
    let slow = tokio::time::sleep(Duration::from_secs(10));

    let error = with_cancellation(slow, &deadline).await.unwrap_err();
    assert!(error.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_future_is_static() {
    let token = CancellationToken::new();
    let watcher = tokio::spawn(cancelled(&token));

    token.cancel();
    watcher.await.expect("watcher joins");
}

#[test]
fn test_tap_each_over_values_then_wait() {
    let audit = Mutex::new(Vec::new());
    let kept: Result<Vec<i32>, String> = wait(async {
        (1..=4)
            .tap_each(
                |x| {
                    audit.lock().unwrap().push(*x);
                    if *x == 2 {
                        Err("audit sink full".to_string())
                    } else {
                        Ok(())
                    }
                },
                FailurePolicy::Suppress,
            )
            .collect()
    });

    assert_eq!(kept, Ok(vec![1, 2, 3, 4]));
    assert_eq!(*audit.lock().unwrap(), vec![1, 2, 3, 4]);
}
