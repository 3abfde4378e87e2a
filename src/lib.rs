//! LSD radix sort over base-10 integer keys.
//!
//! Elements of any type are sorted by a caller supplied `FnMut(&T) -> i64` projection. Each
//! decimal digit of the key is handled by one pass of a stable partition over the digits 0..=9,
//! least significant digit first. The partition step is pluggable, see [`StablePartition`].

pub mod digits;
pub mod error;
pub mod extrema;
pub mod partition;
pub mod radix;

// Other radix sort implementations, for comparison.
pub mod other;

pub use error::SortError;
pub use partition::{CountingPartition, StablePartition, StdStablePartition};
pub use radix::{radix_sort, sort, sort_by_key};
