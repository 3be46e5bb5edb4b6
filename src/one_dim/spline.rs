//! Natural cubic spline.
//!
//! The interpolant is a cubic on each cell, with continuous first and second
//! derivatives at the samples and zero second derivative at both ends.
//! The second derivatives `y2` at the interior samples satisfy
//!
//! ```txt
//! h[i-1] y2[i-1] + 2 (h[i-1] + h[i]) y2[i] + h[i] y2[i+1]
//!     = 6 ((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])
//! ```
//!
//! with `h[i] = x[i+1] - x[i]`, a symmetric, diagonally dominant tridiagonal
//! system that is solved once at construction.
//!
//! References
//! * https://en.wikipedia.org/wiki/Spline_interpolation
use log::debug;
use num_traits::{Float, NumCast};

use super::tridiagonal::SymmetricTridiagonal;
use crate::TableError;

/// Second-derivative coefficients of a natural cubic spline.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NaturalSpline<T> {
    y2: Vec<T>,
    sixth: T,
}

impl<T: Float> NaturalSpline<T> {
    /// Solve for the coefficients through `(x[k], y[k])`.
    /// Assumes `x` is ascending and the same length as `y`.
    ///
    /// # Errors
    /// * If there are fewer than 3 samples
    /// * If repeated samples make the system singular
    pub fn new(x: &[T], y: &[T]) -> Result<Self, TableError> {
        let n = x.len();
        if n < 3 {
            return Err(TableError::TooFewPoints { need: 3, got: n });
        }
        let two = <T as NumCast>::from(2.0).ok_or(TableError::Unrepresentable)?;
        let three = <T as NumCast>::from(3.0).ok_or(TableError::Unrepresentable)?;
        let six = <T as NumCast>::from(6.0).ok_or(TableError::Unrepresentable)?;

        // Natural boundary: both ends stay at zero
        let mut y2 = vec![T::zero(); n];

        let slope = |k: usize| (y[k + 1] - y[k]) / (x[k + 1] - x[k]);

        if n == 3 {
            // Only one unknown
            y2[1] = three * (slope(1) - slope(0)) / (x[2] - x[0]);
        } else {
            let diag: Vec<T> = (1..n - 1).map(|i| two * (x[i + 1] - x[i - 1])).collect();
            let off: Vec<T> = (1..n - 2).map(|i| x[i + 1] - x[i]).collect();
            let system = SymmetricTridiagonal::new(diag, off)?;

            let interior = &mut y2[1..n - 1];
            (1..n - 1).for_each(|i| interior[i - 1] = six * (slope(i) - slope(i - 1)));
            system.solve_in_place(interior)?;
        }

        if y2.iter().any(|v| !v.is_finite()) {
            return Err(TableError::SingularSystem { row: 0 });
        }

        debug!("solved natural spline through {n} samples");

        Ok(Self {
            y2,
            sixth: T::one() / six,
        })
    }

    pub fn second_derivatives(&self) -> &[T] {
        &self.y2
    }

    /// Evaluate on the bracket `[x[i-1], x[i]]`.
    ///
    /// Equivalent to the textbook form
    /// `A y[i-1] + B y[i] + ((A^3 - A) y2[i-1] + (B^3 - B) y2[i]) h^2 / 6`
    /// with `A = (x[i] - a) / h` and `B = 1 - A`, rearranged so that there is
    /// only one division by `h`.
    #[inline]
    pub fn eval(&self, x: &[T], y: &[T], a: T, i: usize) -> T {
        let y2 = &self.y2;
        let h = x[i] - x[i - 1];
        let aa = x[i] - a;
        let bb = h - aa;
        (aa * y[i - 1] + bb * y[i]
            - self.sixth * aa * bb * ((aa + h) * y2[i - 1] + (bb + h) * y2[i]))
            / h
    }
}
