//! Strictly serial task execution.

use crate::error::TaskError;
use std::future::Future;
use tracing::debug;

/// Run `tasks` one after another, in order
///
/// Task `n + 1` is not started until task `n` has completed. The first
/// failure stops the run and is returned as [`TaskError::Failed`]; tasks after
/// it are never invoked and no partial results are returned.
///
/// # Example
///
/// ```rust,ignore
/// use runner::sequence;
///
/// let pages = sequence(urls.into_iter().map(|url| move || fetch_page(url))).await?;
/// ```
pub async fn sequence<I, F, Fut, T, E>(tasks: I) -> std::result::Result<Vec<T>, TaskError<E>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let tasks = tasks.into_iter();
    let mut results = Vec::with_capacity(tasks.size_hint().0);

    for (index, task) in tasks.enumerate() {
        match task().await {
            Ok(value) => results.push(value),
            Err(error) => {
                debug!(index = index, "Task failed, stopping sequence");
                return Err(TaskError::Failed(error));
            }
        }
    }

    Ok(results)
}
