use crate::error::SortError;

use super::{apply_permutation, checked_keys, StablePartition};

/// Partition backed by the standard library stable sort.
///
/// Has no limit on the key range, at the cost of *O*(*n* \* log(*n*)) comparisons.
pub struct StdStablePartition;

impl StablePartition for StdStablePartition {
    fn name() -> String {
        "rust_std_stable_partition".into()
    }

    fn partition_by_key<T, F>(v: &mut [T], lo: i64, hi: i64, key: F) -> Result<(), SortError>
    where
        F: FnMut(&T) -> i64,
    {
        let keys = checked_keys(v, lo, hi, key)?;
        if v.len() < 2 {
            return Ok(());
        }

        // Sort (key, index) pairs instead of the elements, so the key closure is not called again.
        let mut order: Vec<(i64, usize)> = keys.into_iter().zip(0..).collect();
        order.sort_by_key(|&(k, _)| k);

        let mut dest = vec![0usize; v.len()];
        for (pos, &(_, src)) in order.iter().enumerate() {
            dest[src] = pos;
        }

        apply_permutation(v, &mut dest);

        Ok(())
    }
}
