//! Number helpers.

use crate::error::{HelperError, Result};
use rand::Rng;

/// Uniformly random integer in `[min, max]`, both ends inclusive
///
/// Fails with [`HelperError::InvalidInput`] when `min > max`.
pub fn random_number(min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(HelperError::InvalidInput(format!(
            "min ({}) must not exceed max ({})",
            min, max
        )));
    }

    Ok(rand::thread_rng().gen_range(min..=max))
}

/// Whether `n` is even
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Restrict `value` to `[min, max]`
///
/// Computed as `min(max(value, min), max)`, so inverted bounds yield `max`
/// instead of panicking like [`Ord::clamp`].
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let lower_bounded = if value < min { min } else { value };
    if lower_bounded > max {
        max
    } else {
        lower_bounded
    }
}
