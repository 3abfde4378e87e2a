#![no_main]

use libfuzzer_sys::fuzz_target;

use decimal_radix::partition::{CountingPartition, StablePartition};

fuzz_target!(|data: &[u8]| {
    // First byte picks the upper bound, the rest are keys. Keys above it must be rejected.
    let Some((&hi, keys)) = data.split_first() else {
        return;
    };

    let orig: Vec<(i64, usize)> = keys.iter().map(|&k| k as i64).zip(0..).collect();
    let mut v = orig.clone();

    match CountingPartition::partition_by_key(&mut v, 0, hi as i64, |&(k, _)| k) {
        Ok(()) => {
            let mut expected = orig;
            expected.sort_by_key(|&(k, _)| k);
            assert_eq!(v, expected);
        }
        Err(_) => {
            assert!(keys.iter().any(|&k| k > hi));
            assert_eq!(v, orig);
        }
    }
});
