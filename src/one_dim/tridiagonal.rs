//! Symmetric tridiagonal linear systems, solved with the Thomas algorithm.
//!
//! The Thomas algorithm is Gaussian elimination specialized to a tridiagonal
//! matrix: one forward sweep eliminates the sub-diagonal, one backward sweep
//! substitutes. It does not pivot, so it is only stable for matrices that are
//! diagonally dominant, which is always the case for the spline systems
//! built in this crate.
//!
//! References
//! * https://en.wikipedia.org/wiki/Tridiagonal_matrix_algorithm
use num_traits::Float;

use crate::TableError;

/// A symmetric tridiagonal matrix stored as its diagonal and
/// its (shared) off-diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetricTridiagonal<T> {
    /// Main diagonal, size m
    diag: Vec<T>,

    /// Sub- and super-diagonal, size m - 1
    off: Vec<T>,
}

impl<T: Float> SymmetricTridiagonal<T> {
    /// # Errors
    /// * If `diag` is empty
    /// * If `off` is not exactly one shorter than `diag`
    pub fn new(diag: Vec<T>, off: Vec<T>) -> Result<Self, TableError> {
        if diag.is_empty() {
            return Err(TableError::TooFewPoints { need: 1, got: 0 });
        }
        if off.len() + 1 != diag.len() {
            return Err(TableError::LengthMismatch {
                expected: diag.len() - 1,
                got: off.len(),
            });
        }
        Ok(Self { diag, off })
    }

    /// Number of rows
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Solve `M x = rhs`, overwriting `rhs` with `x`.
    ///
    /// # Errors
    /// * If `rhs` does not have one entry per row
    /// * If elimination hits a zero pivot
    pub fn solve_in_place(&self, rhs: &mut [T]) -> Result<(), TableError> {
        let m = self.size();
        if rhs.len() != m {
            return Err(TableError::LengthMismatch {
                expected: m,
                got: rhs.len(),
            });
        }

        // Modified super-diagonal from the forward sweep
        let mut c = vec![T::zero(); m - 1];

        let mut pivot = self.diag[0];
        if pivot == T::zero() {
            return Err(TableError::SingularSystem { row: 0 });
        }
        rhs[0] = rhs[0] / pivot;

        for i in 1..m {
            let e = self.off[i - 1];
            c[i - 1] = e / pivot;
            pivot = self.diag[i] - e * c[i - 1];
            if pivot == T::zero() {
                return Err(TableError::SingularSystem { row: i });
            }
            rhs[i] = (rhs[i] - e * rhs[i - 1]) / pivot;
        }

        for i in (0..m - 1).rev() {
            rhs[i] = rhs[i] - c[i] * rhs[i + 1];
        }

        Ok(())
    }

    /// Solve `M x = rhs`, allocating for the solution.
    pub fn solve(&self, rhs: &[T]) -> Result<Vec<T>, TableError> {
        let mut x = rhs.to_vec();
        self.solve_in_place(&mut x)?;
        Ok(x)
    }

    /// Matrix-vector product `M x`.
    ///
    /// # Errors
    /// * If `x` does not have one entry per row
    pub fn apply(&self, x: &[T]) -> Result<Vec<T>, TableError> {
        let m = self.size();
        if x.len() != m {
            return Err(TableError::LengthMismatch {
                expected: m,
                got: x.len(),
            });
        }
        let out = (0..m)
            .map(|i| {
                let mut v = self.diag[i] * x[i];
                if i > 0 {
                    v = v + self.off[i - 1] * x[i - 1];
                }
                if i + 1 < m {
                    v = v + self.off[i] * x[i + 1];
                }
                v
            })
            .collect();
        Ok(out)
    }
}
