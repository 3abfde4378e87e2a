//! Stable partition by a small integer key, the per-digit building block of the radix sort.

use crate::error::SortError;

mod counting;
mod rust_std;

pub use counting::{CountingPartition, MAX_COUNTING_RANGE};
pub use rust_std::StdStablePartition;

/// Reorders a slice so that keys appear in non-decreasing order, preserving the relative order of
/// elements with equal keys.
///
/// Every key must lie in the closed range `[lo, hi]`. Otherwise the call fails with
/// [`SortError::KeyOutOfRange`] and the slice is left untouched. This holds for slices of any
/// length, a single out of range element is rejected as well.
pub trait StablePartition {
    fn name() -> String;

    fn partition_by_key<T, F>(v: &mut [T], lo: i64, hi: i64, key: F) -> Result<(), SortError>
    where
        F: FnMut(&T) -> i64;
}

/// Evaluates `key` once per element and checks the result against `[lo, hi]`.
fn checked_keys<T, F>(v: &[T], lo: i64, hi: i64, mut key: F) -> Result<Vec<i64>, SortError>
where
    F: FnMut(&T) -> i64,
{
    v.iter()
        .map(|elem| {
            let k = key(elem);
            if (lo..=hi).contains(&k) {
                Ok(k)
            } else {
                Err(SortError::KeyOutOfRange { key: k, lo, hi })
            }
        })
        .collect()
}

/// Moves `v[i]` to `v[dest[i]]` for every `i`, following permutation cycles.
///
/// `dest` must be a permutation of `0..v.len()`, it is left as the identity.
fn apply_permutation<T>(v: &mut [T], dest: &mut [usize]) {
    debug_assert_eq!(v.len(), dest.len());

    for i in 0..v.len() {
        while dest[i] != i {
            let j = dest[i];
            v.swap(i, j);
            dest.swap(i, j);
        }
    }
}
