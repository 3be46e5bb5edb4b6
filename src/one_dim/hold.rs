//! Piecewise-constant 1D rules.
//!
//! On entry it is only guaranteed that `x[i-1] <= a <= x[i]`; either bound may
//! be hit exactly. Floor and ceil make an extra check so that a query sitting
//! exactly on a sample returns that sample's own value.
//!
//! The `*_index` forms pick a sample along one axis and are shared with the
//! 2D tables, which apply them to each axis independently.

use num_traits::Float;

/// Sample index selected by the floor rule on bracket `i`.
#[inline]
pub(crate) fn floor_index<T: Float>(x: &[T], a: T, i: usize) -> usize {
    if a == x[i] {
        i
    } else {
        i - 1
    }
}

/// Sample index selected by the ceil rule on bracket `i`.
#[inline]
pub(crate) fn ceil_index<T: Float>(x: &[T], a: T, i: usize) -> usize {
    if a == x[i - 1] {
        i - 1
    } else {
        i
    }
}

/// Sample index selected by the nearest rule on bracket `i`.
/// In the event of a tie, the upper sample is taken.
#[inline]
pub(crate) fn nearest_index<T: Float>(x: &[T], a: T, i: usize) -> usize {
    match (a - x[i - 1]) < (x[i] - a) {
        true => i - 1,
        false => i,
    }
}

/// Value at the lower end of the bracket, or at `x[i]` itself when `a == x[i]`.
#[inline]
pub(crate) fn floor<T: Float>(x: &[T], y: &[T], a: T, i: usize) -> T {
    y[floor_index(x, a, i)]
}

/// Value at the upper end of the bracket, or at `x[i-1]` itself when `a == x[i-1]`.
#[inline]
pub(crate) fn ceil<T: Float>(x: &[T], y: &[T], a: T, i: usize) -> T {
    y[ceil_index(x, a, i)]
}

/// Value at whichever end of the bracket is closer.
#[inline]
pub(crate) fn nearest<T: Float>(x: &[T], y: &[T], a: T, i: usize) -> T {
    y[nearest_index(x, a, i)]
}
