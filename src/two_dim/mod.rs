//! Two-dimensional lookup tables.
//!
//! A [`Table2D`] samples `f(x, y)` on the outer product of two ascending axes,
//! with values in x-major, y-minor order (`f(x0, y0), f(x0, y1), ..., f(x0, yn),
//! f(x1, y0), ...`), and evaluates it with one of four rules:
//!
//! | Rule      | Value                                   | Gradient  |
//! |-----------|-----------------------------------------|-----------|
//! | `linear`  | area-weighted mean of the cell corners  | yes       |
//! | `floor`   | lower corner on each axis               | error     |
//! | `ceil`    | upper corner on each axis               | error     |
//! | `nearest` | closer corner on each axis              | error     |
//!
//! Each rule is its own type implementing [`Interp2D`]; the table holds
//! whichever one was chosen behind a single box for its whole lifetime.
//!
//! Unlike [`crate::Table1D::eval`], there is no zero outside the sampled
//! range: queries are resolved through the clamped edge cells.
//!
//! ```rust
//! use interptable::{Interpolant2D, Table2D};
//!
//! let x = [0.0_f64, 1.0, 2.0];
//! let y = [0.0_f64, 10.0];
//! // f = x + y / 10
//! let f = [0.0_f64, 1.0, 1.0, 2.0, 2.0, 3.0];
//!
//! let table = Table2D::new(&x[..], &y[..], &f[..], Interpolant2D::Linear).unwrap();
//! assert!((table.lookup(0.5, 5.0) - 1.0).abs() < 1e-12);
//!
//! let (dfdx, dfdy) = table.gradient(0.5, 5.0).unwrap();
//! assert!((dfdx - 1.0).abs() < 1e-12);
//! assert!((dfdy - 0.1).abs() < 1e-12);
//!
//! // Piecewise-constant surfaces have no gradient
//! let floor = Table2D::new(&x[..], &y[..], &f[..], Interpolant2D::Floor).unwrap();
//! assert!(floor.gradient(0.5, 5.0).is_err());
//! ```

pub mod bilinear;
pub mod hold;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use log::debug;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::{AxisConfig, SampledAxis};
use crate::TableError;

pub use bilinear::Bilinear2D;
pub use hold::{Ceil2D, Floor2D, Nearest2D};

/// Interpolation rule for a [`Table2D`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interpolant2D {
    Floor,
    Ceil,
    Nearest,
    /// Bilinear
    #[cfg_attr(feature = "serde", serde(alias = "bilinear"))]
    Linear,
}

impl Interpolant2D {
    pub const ALL: [Interpolant2D; 4] = [
        Interpolant2D::Floor,
        Interpolant2D::Ceil,
        Interpolant2D::Nearest,
        Interpolant2D::Linear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolant2D::Floor => "floor",
            Interpolant2D::Ceil => "ceil",
            Interpolant2D::Nearest => "nearest",
            Interpolant2D::Linear => "linear",
        }
    }

    /// Whether tables using this rule can report a gradient
    pub fn has_gradient(&self) -> bool {
        matches!(self, Interpolant2D::Linear)
    }
}

impl fmt::Display for Interpolant2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolant2D {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bilinear" => Ok(Interpolant2D::Linear),
            _ => Interpolant2D::ALL
                .into_iter()
                .find(|i| i.as_str() == s)
                .ok_or_else(|| TableError::UnknownInterpolant(s.to_owned())),
        }
    }
}

/// Sample locations on both axes and the values at each grid point.
#[derive(Clone, Debug)]
pub struct Grid2D<'a, T: Float> {
    x: SampledAxis<'a, T>,
    y: SampledAxis<'a, T>,

    /// Values at each grid point, size nx * ny, x-major
    vals: Cow<'a, [T]>,
}

impl<'a, 'b, T: Float> PartialEq<Grid2D<'b, T>> for Grid2D<'a, T> {
    fn eq(&self, other: &Grid2D<'b, T>) -> bool {
        self.x == other.x && self.y == other.y && self.vals == other.vals
    }
}

impl<'a, T: Float> Grid2D<'a, T> {
    /// # Errors
    /// * If either axis is invalid (see [`SampledAxis::new`])
    /// * If `vals` does not have exactly `nx * ny` entries
    pub fn new(
        xargs: impl Into<Cow<'a, [T]>>,
        yargs: impl Into<Cow<'a, [T]>>,
        vals: impl Into<Cow<'a, [T]>>,
        config: AxisConfig,
    ) -> Result<Self, TableError> {
        let x = SampledAxis::with_config(xargs, config)?;
        let y = SampledAxis::with_config(yargs, config)?;
        let vals = vals.into();

        let nvals = x.size() * y.size();
        if vals.len() != nvals {
            return Err(TableError::LengthMismatch {
                expected: nvals,
                got: vals.len(),
            });
        }

        Ok(Self { x, y, vals })
    }

    /// Value at grid point `(i, j)`
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.vals[i * self.y.size() + j]
    }

    /// Upper bracket indices on each axis
    #[inline]
    pub fn brackets(&self, x: T, y: T) -> (usize, usize) {
        (self.x.upper_index(x), self.y.upper_index(y))
    }

    pub fn x_axis(&self) -> &SampledAxis<'a, T> {
        &self.x
    }

    pub fn y_axis(&self) -> &SampledAxis<'a, T> {
        &self.y
    }

    pub fn vals(&self) -> &[T] {
        &self.vals
    }

    /// `(nx, ny)`
    pub fn shape(&self) -> (usize, usize) {
        (self.x.size(), self.y.size())
    }

    pub fn reset_cursors(&self) {
        self.x.reset_cursor();
        self.y.reset_cursor();
    }
}

/// A two-dimensional interpolation rule over a [`Grid2D`].
pub trait Interp2D<'a, T: Float + 'a> {
    /// Evaluate the interpolant at `(x, y)`.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn interp(&self, x: T, y: T) -> T;

    /// Partial derivatives `(df/dx, df/dy)` at `(x, y)`.
    ///
    /// # Errors
    /// * If the rule has no gradient
    fn gradient(&self, x: T, y: T) -> Result<(T, T), TableError>;

    /// Evaluate the interpolant at each `(xs[k], ys[k])`.
    ///
    /// # Errors
    /// * If `xs`, `ys` and `out` do not all have the same length
    #[inline]
    fn interp_many(&self, xs: &[T], ys: &[T], out: &mut [T]) -> Result<(), TableError> {
        check_lengths(xs.len(), &[ys.len(), out.len()])?;

        for k in 0..xs.len() {
            out[k] = self.interp(xs[k], ys[k]);
        }

        Ok(())
    }

    /// Partial derivatives at each `(xs[k], ys[k])`.
    ///
    /// Nothing is written unless every point succeeds.
    ///
    /// # Errors
    /// * If `xs`, `ys`, `dfdx` and `dfdy` do not all have the same length
    /// * If the rule has no gradient
    #[inline]
    fn gradient_many(
        &self,
        xs: &[T],
        ys: &[T],
        dfdx: &mut [T],
        dfdy: &mut [T],
    ) -> Result<(), TableError> {
        check_lengths(xs.len(), &[ys.len(), dfdx.len(), dfdy.len()])?;
        if !self.interpolant().has_gradient() {
            return Err(TableError::GradientUnsupported(self.interpolant()));
        }

        for k in 0..xs.len() {
            (dfdx[k], dfdy[k]) = self.gradient(xs[k], ys[k])?;
        }

        Ok(())
    }

    fn interpolant(&self) -> Interpolant2D;

    fn grid(&self) -> &Grid2D<'a, T>;

    fn clone_box(&self) -> Box<dyn Interp2D<'a, T> + Send + 'a>;
}

fn check_lengths(expected: usize, others: &[usize]) -> Result<(), TableError> {
    match others.iter().find(|&&n| n != expected) {
        Some(&got) => Err(TableError::LengthMismatch { expected, got }),
        None => Ok(()),
    }
}

/// A sampled function of two variables.
///
/// Lookups update both axes' search cursors, so a table is `Send` but not
/// `Sync`; clone it to query from several threads.
pub struct Table2D<'a, T: Float + 'a> {
    inner: Box<dyn Interp2D<'a, T> + Send + 'a>,
}

impl<'a, T: Float + Send + Sync + 'a> Table2D<'a, T> {
    /// Build a table with the default [`AxisConfig`].
    ///
    /// # Errors
    /// * If either axis is invalid (see [`SampledAxis::new`])
    /// * If `vals` does not have exactly `xargs.len() * yargs.len()` entries
    pub fn new(
        xargs: impl Into<Cow<'a, [T]>>,
        yargs: impl Into<Cow<'a, [T]>>,
        vals: impl Into<Cow<'a, [T]>>,
        interpolant: Interpolant2D,
    ) -> Result<Self, TableError> {
        Self::with_config(xargs, yargs, vals, interpolant, AxisConfig::default())
    }

    pub fn with_config(
        xargs: impl Into<Cow<'a, [T]>>,
        yargs: impl Into<Cow<'a, [T]>>,
        vals: impl Into<Cow<'a, [T]>>,
        interpolant: Interpolant2D,
        config: AxisConfig,
    ) -> Result<Self, TableError> {
        let grid = Grid2D::new(xargs, yargs, vals, config)?;
        let (nx, ny) = grid.shape();

        let inner: Box<dyn Interp2D<'a, T> + Send + 'a> = match interpolant {
            Interpolant2D::Floor => Box::new(Floor2D::new(grid)),
            Interpolant2D::Ceil => Box::new(Ceil2D::new(grid)),
            Interpolant2D::Nearest => Box::new(Nearest2D::new(grid)),
            Interpolant2D::Linear => Box::new(Bilinear2D::new(grid)),
        };

        debug!("built {interpolant} table with {nx}x{ny} samples");

        Ok(Self { inner })
    }
}

impl<'a, T: Float + 'a> Table2D<'a, T> {
    /// Interpolated value at `(x, y)`, extrapolating through the edge cells
    /// outside the sampled range.
    #[inline]
    pub fn lookup(&self, x: T, y: T) -> T {
        self.inner.interp(x, y)
    }

    /// See [`Interp2D::interp_many`].
    pub fn interp_many(&self, xs: &[T], ys: &[T], out: &mut [T]) -> Result<(), TableError> {
        self.inner.interp_many(xs, ys, out)
    }

    /// [`interp_many`](Self::interp_many), allocating for the output for convenience.
    pub fn interp_many_alloc(&self, xs: &[T], ys: &[T]) -> Result<Vec<T>, TableError> {
        let mut out = vec![T::zero(); xs.len()];
        self.inner.interp_many(xs, ys, &mut out)?;
        Ok(out)
    }

    /// `(df/dx, df/dy)` at `(x, y)`.
    ///
    /// # Errors
    /// * If the table is not bilinear
    #[inline]
    pub fn gradient(&self, x: T, y: T) -> Result<(T, T), TableError> {
        self.inner.gradient(x, y)
    }

    /// See [`Interp2D::gradient_many`].
    pub fn gradient_many(
        &self,
        xs: &[T],
        ys: &[T],
        dfdx: &mut [T],
        dfdy: &mut [T],
    ) -> Result<(), TableError> {
        self.inner.gradient_many(xs, ys, dfdx, dfdy)
    }

    pub fn interpolant(&self) -> Interpolant2D {
        self.inner.interpolant()
    }

    pub fn grid(&self) -> &Grid2D<'a, T> {
        self.inner.grid()
    }

    pub fn x_min(&self) -> T {
        self.grid().x_axis().front()
    }

    pub fn x_max(&self) -> T {
        self.grid().x_axis().back()
    }

    pub fn y_min(&self) -> T {
        self.grid().y_axis().front()
    }

    pub fn y_max(&self) -> T {
        self.grid().y_axis().back()
    }

    /// `(nx, ny)`
    pub fn shape(&self) -> (usize, usize) {
        self.grid().shape()
    }

    /// See [`SampledAxis::reset_cursor`].
    pub fn reset_cursors(&self) {
        self.grid().reset_cursors()
    }
}

impl<'a, T: Float + 'a> Clone for Table2D<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<'a, 'b, T: Float + 'a + 'b> PartialEq<Table2D<'b, T>> for Table2D<'a, T> {
    fn eq(&self, other: &Table2D<'b, T>) -> bool {
        self.interpolant() == other.interpolant() && self.grid() == other.grid()
    }
}

impl<'a, T: Float + 'a> fmt::Debug for Table2D<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table2D")
            .field("interpolant", &self.interpolant())
            .field("shape", &self.shape())
            .finish()
    }
}
