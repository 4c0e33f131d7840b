use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset from the input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 16_384 {
        apply_small_runtime_config(group);
    } else if len <= 262_144 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `[0, distinct)`, with `distinct` clamped
/// to `[1, len]` so the result is always a valid bounded-range input.
pub fn random_bounded<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: usize) -> Vec<u64> {
    let distinct = distinct.clamp(1, len.max(1)) as u64;
    (0..len).map(|_| rng.random_range(0..distinct)).collect()
}

/// `0..len` in order with roughly 1% of positions swapped.
pub fn nearly_sorted_bounded<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    if len < 2 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bounded_stays_in_range() {
        let mut rng = default_rng();
        for &(len, distinct) in &[(0_usize, 0_usize), (1, 5), (100, 100), (100, 7), (64, 1_000)] {
            let data = random_bounded(&mut rng, len, distinct);
            assert_eq!(data.len(), len);
            assert!(data.iter().all(|&x| (x as usize) < len.max(1)));
            assert!(data.iter().all(|&x| (x as usize) < distinct.max(1)));
        }
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = nearly_sorted_bounded(&mut rng, 1_000);
        data.sort_unstable();
        assert_eq!(data, (0..1_000).collect::<Vec<u64>>());
    }
}
