use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

use zipf::ZipfDistribution;

/// Provides a set of patterns useful for testing and benchmarking radix sorts.
/// All patterns produce i64 keys.

// --- Public ---

pub fn random(len: usize) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i64>
where
    R: Into<rand::distributions::Uniform<i64>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i64> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_digits(len: usize, digits: u32) -> Vec<i64> {
    // Non-negative keys with at most `digits` decimal digits.
    random_uniform(len, 0..=max_with_digits(digits))
}

pub fn random_signed_digits(len: usize, digits: u32) -> Vec<i64> {
    // Keys whose magnitude has at most `digits` decimal digits, both signs.
    let max = max_with_digits(digits);
    random_uniform(len, -max..=max)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist = ZipfDistribution::new(len.max(1), exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i64> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i64> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i64).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..len as i64).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i64> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i64> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    if seed_type_and_value().0 == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    let (seed_type, seed_val) = seed_type_and_value();

    if seed_type == SeedType::RandomOncePerProcess
        && RANDOM_EACH_TIME.load(Ordering::Acquire)
    {
        thread_rng().gen()
    } else {
        seed_val
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomOncePerProcess,
    ExternalOverride,
}

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn seed_type_and_value() -> (SeedType, u64) {
    static SEED_TYPE_AND_VALUE: OnceCell<(SeedType, u64)> = OnceCell::new();

    *SEED_TYPE_AND_VALUE.get_or_init(|| {
        if let Some(override_seed) = env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
        {
            (SeedType::ExternalOverride, override_seed)
        } else {
            (SeedType::RandomOncePerProcess, thread_rng().gen())
        }
    })
}

fn max_with_digits(digits: u32) -> i64 {
    // 10^18 is the largest power of ten that fits, 19 digits means the full range.
    match 10i64.checked_pow(digits) {
        Some(scale) => scale - 1,
        None => i64::MAX,
    }
}

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i64> {
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i64>()).collect()
}
