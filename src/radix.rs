//! LSD radix sort driver.
//!
//! The driver finds the key extrema once, derives the number of decimal digits it has to cover and
//! then runs one stable partition per digit position, least significant first. After processing
//! positions `0..d` the slice is ordered by the number formed from the `d` lowest digits, because
//! ties at position `d - 1` keep the order established by the earlier passes.
//!
//! Negative keys are sorted by complemented magnitude digits, `9 - digit`, which orders them by
//! descending magnitude. A final stable pass on the sign then moves every negative key in front of
//! the non-negative ones. That extra pass only runs if the minimum key is negative.

use crate::digits::{digit_passes, get_digit};
use crate::error::SortError;
use crate::extrema::find_min_max;
use crate::partition::{CountingPartition, StablePartition};

const MIN_DIGIT: i64 = 0;
const MAX_DIGIT: i64 = 9;

/// Sorts `v` by `key` in non-decreasing order, using `P` for the per digit passes.
///
/// This sort is stable if `P` is stable. Slices with fewer than two elements are returned as is,
/// without calling `key`. Errors reported by `P` are returned unchanged.
///
/// Complexity: *O*(*d* \* (*n* + 10)) with *d* the number of decimal digits of the largest key
/// magnitude, plus one pass if any key is negative.
pub fn radix_sort<P, T, F>(v: &mut [T], mut key: F) -> Result<(), SortError>
where
    P: StablePartition,
    F: FnMut(&T) -> i64,
{
    if v.len() <= 1 {
        return Ok(());
    }

    let (min, max) = find_min_max(v, &mut key)?;

    for position in 0..digit_passes(min, max) {
        P::partition_by_key(v, MIN_DIGIT, MAX_DIGIT, |elem| {
            digit_key(key(elem), position)
        })?;
    }

    if min < 0 {
        P::partition_by_key(v, 0, 1, |elem| i64::from(key(elem) >= 0))?;
    }

    Ok(())
}

/// Sorts `v` by `key` with the counting partition.
#[inline]
pub fn sort_by_key<T, F>(v: &mut [T], key: F) -> Result<(), SortError>
where
    F: FnMut(&T) -> i64,
{
    radix_sort::<CountingPartition, T, F>(v, key)
}

/// Sorts a slice of integers.
#[inline]
pub fn sort<K>(v: &mut [K]) -> Result<(), SortError>
where
    K: Copy + Into<i64>,
{
    sort_by_key(v, |&k| k.into())
}

#[inline]
fn digit_key(key: i64, position: u32) -> i64 {
    let digit = i64::from(get_digit(key, position));
    if key < 0 {
        MAX_DIGIT - digit
    } else {
        digit
    }
}
