use std::fmt::Debug;

/// A sort by integer key under test.
pub trait KeySort {
    type Error: Debug;

    fn name() -> String;

    fn sort_by_key<T, F>(arr: &mut [T], key: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T) -> i64;
}

/// A stable partition over a closed key range under test.
pub trait Partition {
    type Error: Debug;

    fn name() -> String;

    fn partition_by_key<T, F>(arr: &mut [T], lo: i64, hi: i64, key: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T) -> i64;
}

pub mod patterns;
