//! Numeric helpers.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::errors::{UtilError, UtilResult};

/// Clamps `value` into the closed interval described by `range`.
///
/// Returns the lower bound when `value` falls below it, the upper bound
/// when `value` exceeds it, and `value` itself otherwise. Fails with
/// [`UtilError::InvalidRange`] when the range is inverted.
///
/// # Examples
///
/// ```rust
/// use weft_util::numeric::restrict;
///
/// assert_eq!(restrict(0.5, 0.0..=1.0).unwrap(), 0.5);
/// assert_eq!(restrict(2.0, 0.0..=1.3).unwrap(), 1.3);
/// ```
pub fn restrict<T>(value: T, range: RangeInclusive<T>) -> UtilResult<T>
where
    T: PartialOrd + Display,
{
    let (low, high) = range.into_inner();
    if low > high {
        return Err(UtilError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        });
    }
    if value < low {
        Ok(low)
    } else if value > high {
        Ok(high)
    } else {
        Ok(value)
    }
}
