//! Adapter over `radsort`, a byte-wise LSD radix sort. Used as a baseline.

use crate::error::SortError;

pub fn name() -> String {
    "rust_radsort_radix".into()
}

/// Sorts `v` by `key` with `radsort`, stable.
///
/// Never fails, the `Result` only mirrors [`crate::sort_by_key`].
#[inline]
pub fn sort_by_key<T, F>(v: &mut [T], key: F) -> Result<(), SortError>
where
    F: FnMut(&T) -> i64,
{
    if v.len() > 1 {
        radsort::sort_by_key(v, key);
    }

    Ok(())
}
