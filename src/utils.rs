//! Convenience methods for constructing sample arrays in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// # Panics
/// * If `n < 2`
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates values evenly spaced in log10 from `10^start` to `10^stop`,
/// including the endpoint.
pub fn logspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let ten = T::from(10.0).unwrap();
    linspace(start, stop, n)
        .into_iter()
        .map(|p| ten.powf(p))
        .collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn)
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Samples `f(x, y)` on the outer product of `x` and `y`,
/// in the x-major, y-minor order used by [`crate::Table2D`].
pub fn tabulate_2d<T, F>(x: &[T], y: &[T], f: F) -> Vec<T>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    x.iter()
        .cartesian_product(y.iter())
        .map(|(&xi, &yj)| f(xi, yj))
        .collect()
}
