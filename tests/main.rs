use decimal_radix::partition::{CountingPartition, StablePartition, StdStablePartition};
use decimal_radix::{radix, SortError};

macro_rules! radix_sort_impl {
    ($mod_name:ident, $partition:ty) => {
        mod $mod_name {
            use super::*;

            struct SortImpl;

            impl sort_test_tools::KeySort for SortImpl {
                type Error = SortError;

                fn name() -> String {
                    format!("decimal_radix_{}", <$partition as StablePartition>::name())
                }

                fn sort_by_key<T, F>(arr: &mut [T], key: F) -> Result<(), SortError>
                where
                    F: FnMut(&T) -> i64,
                {
                    radix::radix_sort::<$partition, T, F>(arr, key)
                }
            }

            sort_test_tools::instantiate_sort_tests!(SortImpl);
        }
    };
}

macro_rules! partition_impl {
    ($mod_name:ident, $partition:ty) => {
        mod $mod_name {
            use super::*;

            struct PartitionImpl;

            impl sort_test_tools::Partition for PartitionImpl {
                type Error = SortError;

                fn name() -> String {
                    <$partition as StablePartition>::name()
                }

                fn partition_by_key<T, F>(
                    arr: &mut [T],
                    lo: i64,
                    hi: i64,
                    key: F,
                ) -> Result<(), SortError>
                where
                    F: FnMut(&T) -> i64,
                {
                    <$partition as StablePartition>::partition_by_key(arr, lo, hi, key)
                }
            }

            sort_test_tools::instantiate_partition_tests!(PartitionImpl);
        }
    };
}

radix_sort_impl!(radix_counting, CountingPartition);
radix_sort_impl!(radix_std_stable, StdStablePartition);

partition_impl!(counting_partition, CountingPartition);
partition_impl!(std_stable_partition, StdStablePartition);

#[cfg(feature = "rust_radsort")]
mod rust_radsort {
    use decimal_radix::other::rust_radsort;
    use decimal_radix::SortError;

    struct SortImpl;

    impl sort_test_tools::KeySort for SortImpl {
        type Error = SortError;

        fn name() -> String {
            rust_radsort::name()
        }

        fn sort_by_key<T, F>(arr: &mut [T], key: F) -> Result<(), SortError>
        where
            F: FnMut(&T) -> i64,
        {
            rust_radsort::sort_by_key(arr, key)
        }
    }

    sort_test_tools::instantiate_sort_tests!(SortImpl);
}

// --- Entry points ---

#[test]
fn sort_plain_ints() {
    let mut v = vec![170i64, 45, 75, 90, 802, 24, 2, 66];
    decimal_radix::sort(&mut v).unwrap();
    assert_eq!(v, [2, 24, 45, 66, 75, 90, 170, 802]);

    let mut w = vec![-3i32, 14, -159, 26, 5];
    decimal_radix::sort(&mut w).unwrap();
    assert_eq!(w, [-159, -3, 5, 14, 26]);
}

#[test]
fn sort_by_key_strings() {
    let mut words = vec!["radix", "a", "sort", "by", "key", "decimal"];
    decimal_radix::sort_by_key(&mut words, |w| w.len() as i64).unwrap();
    assert_eq!(words, ["a", "by", "key", "sort", "radix", "decimal"]);
}

#[test]
fn sort_by_key_reverse_order() {
    let mut v = vec![3i64, -8, 12, 0, 12, 7];
    decimal_radix::sort_by_key(&mut v, |&x| -x).unwrap();
    assert_eq!(v, [12, 12, 7, 3, 0, -8]);
}

#[test]
fn min_max_empty_is_error() {
    let empty: [u8; 0] = [];
    assert_eq!(
        decimal_radix::extrema::find_min_max(&empty, |&x| x.into()),
        Err(SortError::EmptyInput)
    );
}
