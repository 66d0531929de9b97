//! Fixed-size chunking of an input sequence.

use crate::error::ArgumentError;

/// Partition `items` into chunks of `size`, preserving order
///
/// Every chunk except possibly the last holds exactly `size` items. A `size`
/// of zero is rejected.
///
/// ```rust
/// use runner::batch;
///
/// let chunks = batch(vec![1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn batch<I, T>(items: I, size: usize) -> Result<Vec<Vec<T>>, ArgumentError>
where
    I: IntoIterator<Item = T>,
{
    if size == 0 {
        return Err(ArgumentError("size must be greater than 0".to_string()));
    }

    let mut chunks = Vec::new();
    let mut current = Vec::new();

    for item in items {
        current.push(item);
        if current.len() == size {
            chunks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}
