//! Linear interpolation / extrapolation between the ends of a bracket.

use num_traits::Float;

/// Fractional distance of `a` from the upper end of the bracket,
/// i.e. the weight of the lower sample.
///
/// Outside the bracket this is negative or greater than one,
/// which extrapolates the edge cell.
#[inline]
pub(crate) fn lower_weight<T: Float>(x: &[T], a: T, i: usize) -> T {
    (x[i] - a) / (x[i] - x[i - 1])
}

/// Convex combination of the two bracket values, weighted by proximity.
///
/// Exact at both ends of the bracket.
#[inline]
pub(crate) fn linear<T: Float>(x: &[T], y: &[T], a: T, i: usize) -> T {
    let ax = lower_weight(x, a, i);
    let bx = T::one() - ax;
    y[i] * bx + y[i - 1] * ax
}

#[cfg(test)]
mod test {
    use super::{linear, lower_weight};

    #[test]
    fn test_linear_1d() {
        let x = [1.0_f64, 2.0, 4.0];
        let y = [0.0_f64, 10.0, -10.0];

        assert_eq!(linear(&x, &y, 1.0, 1), 0.0);
        assert_eq!(linear(&x, &y, 2.0, 1), 10.0);
        assert_eq!(linear(&x, &y, 2.0, 2), 10.0);
        assert_eq!(linear(&x, &y, 4.0, 2), -10.0);
        assert!((linear(&x, &y, 1.5, 1) - 5.0).abs() < 1e-14);
        assert!((linear(&x, &y, 3.0, 2) - 0.0).abs() < 1e-14);

        // Extrapolates the edge cells
        assert!((linear(&x, &y, 0.0, 1) + 10.0).abs() < 1e-14);
        assert!((linear(&x, &y, 5.0, 2) + 20.0).abs() < 1e-14);
    }

    #[test]
    fn test_lower_weight() {
        let x = [0.0_f64, 4.0];
        assert_eq!(lower_weight(&x, 0.0, 1), 1.0);
        assert_eq!(lower_weight(&x, 1.0, 1), 0.75);
        assert_eq!(lower_weight(&x, 4.0, 1), 0.0);
    }
}
