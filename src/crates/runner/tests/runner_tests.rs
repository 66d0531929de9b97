//! Integration tests for the task runner combinators

use proptest::prelude::*;
use runner::{batch, parallel, retry, sequence, timeout, RunnerConfig, TaskError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_parallel_preserves_order_and_limit(
        latencies in prop::collection::vec(0u64..20, 0..24),
        limit in 1usize..8,
    ) {
        let rt = runtime();
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = latencies
            .iter()
            .copied()
            .enumerate()
            .map(|(index, latency)| {
                let in_flight = in_flight.clone();
                let peak = peak.clone();
                move || async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    sleep(Duration::from_millis(latency)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, String>(index)
                }
            })
            .collect();

        let results = rt.block_on(parallel(tasks, Some(limit))).unwrap();

        prop_assert_eq!(results, (0..latencies.len()).collect::<Vec<_>>());
        prop_assert!(peak.load(Ordering::SeqCst) <= limit);
    }

    #[test]
    fn prop_batch_concatenation_reproduces_input(
        items in prop::collection::vec(any::<i32>(), 0..100),
        size in 1usize..16,
    ) {
        let chunks = batch(items.clone(), size).unwrap();

        let last = chunks.len().saturating_sub(1);
        for (i, chunk) in chunks.iter().enumerate() {
            if i < last {
                prop_assert_eq!(chunk.len(), size);
            } else {
                prop_assert!(!chunk.is_empty() && chunk.len() <= size);
            }
        }

        let flattened: Vec<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flattened, items);
    }
}

#[tokio::test(start_paused = true)]
async fn test_batches_driven_through_parallel_and_sequence() {
    let ids: Vec<u32> = (1..=7).collect();
    let mut totals = Vec::new();

    for chunk in batch(ids, 3).unwrap() {
        let tasks = chunk.into_iter().map(|id| {
            move || async move {
                sleep(Duration::from_millis(u64::from(10 - id))).await;
                Ok::<_, String>(id * 2)
            }
        });
        let doubled = parallel(tasks, Some(2)).await.unwrap();
        totals.push(doubled.iter().sum::<u32>());
    }

    assert_eq!(totals, vec![12, 30, 14]);

    let tasks = totals
        .into_iter()
        .map(|total| move || async move { Ok::<_, String>(total + 1) });
    let bumped = sequence(tasks).await.unwrap();
    assert_eq!(bumped, vec![13, 31, 15]);
}

#[tokio::test(start_paused = true)]
async fn test_retry_around_timeout() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    // First attempt hangs past the timeout, second answers quickly
    let result = retry(
        move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            timeout(
                async move {
                    let latency = if attempt == 1 { 500 } else { 5 };
                    sleep(Duration::from_millis(latency)).await;
                    Ok::<_, String>(attempt)
                },
                Duration::from_millis(100),
                None,
            )
        },
        3,
        Duration::from_millis(10),
    )
    .await;

    assert_eq!(result, Ok(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_exhausted_by_timeouts_reports_last_timeout() {
    let result = retry(
        || {
            timeout(
                async {
                    sleep(Duration::from_secs(1)).await;
                    Ok::<_, String>(())
                },
                Duration::from_millis(20),
                Some("still waiting".to_string()),
            )
        },
        2,
        Duration::ZERO,
    )
    .await;

    match result {
        Err(TaskError::Failed(inner)) => assert!(inner.is_timeout()),
        other => panic!("Expected wrapped timeout, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_parallel_driven_from_config() {
    let config = RunnerConfig::new().with_concurrency(2).with_retry_attempts(2);
    config.validate().unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let policy = config.retry_policy();

    let tasks = (0..4u32).map(|i| {
        let calls = calls.clone();
        let policy = policy.clone();
        move || async move {
            runner::with_retry(&policy, || {
                let seen = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    // Only the first attempt across all tasks fails
                    if seen < 1 {
                        Err(format!("transient {}", i))
                    } else {
                        Ok(i)
                    }
                }
            })
            .await
        }
    });

    let results = parallel(tasks, config.concurrency).await.unwrap();
    assert_eq!(results, vec![0, 1, 2, 3]);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}
