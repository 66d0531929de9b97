//! Bounded-concurrency task execution.
//!
//! `parallel` keeps at most `limit` tasks in flight. Slots are refilled
//! strictly left to right: whenever a task completes, the lowest-index task
//! not yet started is started next. Results land in a slot vector indexed by
//! each task's original position, so the output is always in input order.
//!
//! Each started task runs on its own tokio task. When the run fails fast, the
//! handles of tasks still in flight are dropped, which detaches them: they run
//! to completion and their results are discarded.

use crate::error::TaskError;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tracing::{debug, warn};

/// Run `tasks` concurrently with at most `limit` in flight
///
/// `limit` of `None` starts every task at once. `Some(0)` fails with
/// [`TaskError::InvalidArgument`] before any task is invoked. An empty task
/// list resolves immediately to an empty vector.
///
/// # Example
///
/// ```rust,ignore
/// use runner::parallel;
///
/// let tasks = urls.into_iter().map(|url| move || fetch_page(url));
/// let pages = parallel(tasks, Some(4)).await?;
/// ```
pub async fn parallel<I, F, Fut, T, E>(
    tasks: I,
    limit: Option<usize>,
) -> std::result::Result<Vec<T>, TaskError<E>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    if limit == Some(0) {
        return Err(TaskError::InvalidArgument(
            "limit must be greater than 0".to_string(),
        ));
    }

    let tasks: Vec<F> = tasks.into_iter().collect();
    let total = tasks.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let limit = limit.unwrap_or(total);
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    let mut pending = tasks.into_iter().enumerate();
    let mut running = FuturesUnordered::new();

    debug!(tasks = total, limit = limit, "Starting parallel run");

    loop {
        while running.len() < limit {
            let Some((index, task)) = pending.next() else {
                break;
            };

            let handle = tokio::spawn(task());
            running.push(async move { (index, handle.await) });
        }

        let Some((index, joined)) = running.next().await else {
            break;
        };

        match joined {
            Ok(Ok(value)) => slots[index] = Some(value),
            Ok(Err(error)) => {
                warn!(
                    index = index,
                    in_flight = running.len(),
                    "Task failed, abandoning parallel run"
                );
                return Err(TaskError::Failed(error));
            }
            Err(join_error) => {
                warn!(index = index, error = %join_error, "Task panicked");
                return Err(TaskError::Panicked(join_error.to_string()));
            }
        }
    }

    let results: Vec<T> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), total);
    Ok(results)
}
