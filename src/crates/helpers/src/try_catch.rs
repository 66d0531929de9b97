//! Tuple-style error capture.
//!
//! For call sites that prefer inspecting a `(value, error)` pair over
//! propagating with `?`.

use std::future::Future;

/// Await `operation` and split its outcome into a `(value, error)` pair
///
/// Exactly one side of the pair is `Some`.
///
/// ```rust,ignore
/// use helpers::try_catch;
///
/// let (user, error) = try_catch(client.get_json::<User>(url, &options)).await;
/// if let Some(error) = error {
///     tracing::warn!(%error, "lookup failed");
/// }
/// ```
pub async fn try_catch<F, T, E>(operation: F) -> (Option<T>, Option<E>)
where
    F: Future<Output = Result<T, E>>,
{
    split(operation.await)
}

/// Run `operation` and split its outcome into a `(value, error)` pair
pub fn try_catch_sync<F, T, E>(operation: F) -> (Option<T>, Option<E>)
where
    F: FnOnce() -> Result<T, E>,
{
    split(operation())
}

fn split<T, E>(outcome: Result<T, E>) -> (Option<T>, Option<E>) {
    match outcome {
        Ok(value) => (Some(value), None),
        Err(error) => (None, Some(error)),
    }
}
