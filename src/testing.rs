use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` random numbers spread evenly over `[lo, hi)`
pub fn uniform_between(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    randn::<f64>(rng, n)
        .into_iter()
        .map(|u| lo + u * (hi - lo))
        .collect()
}

/// Generate `n >= 2` randomly placed, strictly ascending samples
/// that start exactly at `lo` and end exactly at `hi`
pub fn random_ascending(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut x = uniform_between(rng, n - 2, lo, hi);
    x.sort_by(|a, b| a.total_cmp(b));
    x.insert(0, lo);
    x.push(hi);
    (1..n).for_each(|i| assert!(x[i] > x[i - 1]));
    x
}
