#![no_main]

use libfuzzer_sys::fuzz_target;

use decimal_radix::partition::CountingPartition;
use decimal_radix::radix::radix_sort;

fuzz_target!(|data: &[u8]| {
    let keys = decimal_radix_fuzz::u8_as_i64(data);

    let mut v: Vec<(i64, usize)> = keys.into_iter().zip(0..).collect();
    let mut expected = v.clone();
    expected.sort_by_key(|&(k, _)| k);

    radix_sort::<CountingPartition, _, _>(&mut v, |&(k, _)| k).unwrap();
    assert_eq!(v, expected);
});
