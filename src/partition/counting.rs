use crate::error::SortError;

use super::{apply_permutation, checked_keys, StablePartition};

/// Largest number of buckets a single counting pass will allocate.
pub const MAX_COUNTING_RANGE: usize = 1 << 20;

/// Counting sort based partition.
///
/// Builds a histogram of the keys, turns it into exclusive prefix sums and scatters destination
/// indices in input order, which is what makes it stable. Elements are then moved into place with
/// swaps, so `T` needs neither `Clone` nor `Default`.
///
/// Complexity: *O*(*n* + (`hi` - `lo`)) time, *O*(*n* + (`hi` - `lo`)) scratch space. Each key is
/// evaluated exactly once.
pub struct CountingPartition;

impl StablePartition for CountingPartition {
    fn name() -> String {
        "counting_partition".into()
    }

    fn partition_by_key<T, F>(v: &mut [T], lo: i64, hi: i64, key: F) -> Result<(), SortError>
    where
        F: FnMut(&T) -> i64,
    {
        let keys = checked_keys(v, lo, hi, key)?;
        if keys.is_empty() {
            return Ok(());
        }

        // At least one key passed the range check, so lo <= hi.
        let width = hi.abs_diff(lo);
        if width >= MAX_COUNTING_RANGE as u64 {
            return Err(SortError::RangeTooWide { lo, hi });
        }

        if v.len() < 2 {
            return Ok(());
        }

        let mut offsets = vec![0usize; width as usize + 1];
        for &k in &keys {
            offsets[k.abs_diff(lo) as usize] += 1;
        }

        // Convert histogram to prefix sums (exclusive scan)
        let mut sum = 0usize;
        for count in offsets.iter_mut() {
            let c = *count;
            *count = sum;
            sum += c;
        }

        let mut dest: Vec<usize> = keys
            .iter()
            .map(|&k| {
                let bucket = k.abs_diff(lo) as usize;
                let pos = offsets[bucket];
                offsets[bucket] += 1;
                pos
            })
            .collect();

        apply_permutation(v, &mut dest);

        Ok(())
    }
}
