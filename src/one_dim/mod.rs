//! One-dimensional lookup tables.
//!
//! A [`Table1D`] pairs a [`SampledAxis`] with a parallel array of values and
//! one of five interpolation rules:
//!
//! | Rule      | Between samples                 | Exactly on a sample |
//! |-----------|---------------------------------|---------------------|
//! | `linear`  | straight line between neighbors | sample value        |
//! | `floor`   | value of the lower neighbor     | sample value        |
//! | `ceil`    | value of the upper neighbor     | sample value        |
//! | `nearest` | value of the closer neighbor    | sample value        |
//! | `spline`  | natural cubic spline            | sample value        |
//!
//! The spline rule needs at least 3 samples and solves for its coefficients
//! once, at construction; the other rules construct in O(1).
//!
//! ```rust
//! use interptable::{Interpolant, Table1D};
//!
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let f = [0.0_f64, 1.0, 4.0, 9.0, 16.0];
//!
//! let table = Table1D::new(&x[..], &f[..], Interpolant::Linear).unwrap();
//! assert_eq!(table.eval(2.5), 6.5);
//!
//! // Outside the sampled range, `eval` is zero while `lookup` extrapolates
//! assert_eq!(table.eval(-1.0), 0.0);
//! assert_eq!(table.lookup(-1.0), -1.0);
//!
//! // Rules can also be chosen by name
//! let spline = Table1D::new(&x[..], &f[..], "spline".parse().unwrap()).unwrap();
//! assert!((spline.eval(2.5) - 6.25).abs() < 0.1);
//! ```

pub mod builder;
pub(crate) mod hold;
pub(crate) mod linear;
mod spline;
pub mod tridiagonal;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use log::debug;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::{AxisConfig, SampledAxis};
use crate::TableError;
use spline::NaturalSpline;

/// Interpolation rule for a [`Table1D`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interpolant {
    Linear,
    Floor,
    Ceil,
    Nearest,
    Spline,
}

impl Interpolant {
    pub const ALL: [Interpolant; 5] = [
        Interpolant::Linear,
        Interpolant::Floor,
        Interpolant::Ceil,
        Interpolant::Nearest,
        Interpolant::Spline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolant::Linear => "linear",
            Interpolant::Floor => "floor",
            Interpolant::Ceil => "ceil",
            Interpolant::Nearest => "nearest",
            Interpolant::Spline => "spline",
        }
    }

    /// Fewest samples a table using this rule can be built from
    pub fn min_points(&self) -> usize {
        match self {
            Interpolant::Spline => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for Interpolant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolant {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interpolant::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| TableError::UnknownInterpolant(s.to_owned()))
    }
}

/// Rule-specific evaluation state
#[derive(Clone, Debug, PartialEq)]
enum Rule<T> {
    Linear,
    Floor,
    Ceil,
    Nearest,
    Spline(NaturalSpline<T>),
}

/// A sampled function of one variable.
///
/// Argument and value arrays are borrowed from the caller for `'a` when
/// passed as slices, or owned when passed as `Vec`s.
///
/// Lookups update the axis's search cursor through a `Cell`, so a table is
/// `Send` but not `Sync`; clone it to query from several threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Table1D<'a, T: Float> {
    axis: SampledAxis<'a, T>,

    /// Values at each sample, same size as the axis
    vals: Cow<'a, [T]>,

    rule: Rule<T>,
}

impl<'a, T: Float> Table1D<'a, T> {
    /// Build a table with the default [`AxisConfig`].
    ///
    /// # Errors
    /// * If there are fewer samples than the rule needs (2, or 3 for `spline`)
    /// * If `args` and `vals` have different lengths
    /// * If `args` is not a valid axis (see [`SampledAxis::new`])
    /// * If the spline system is singular
    pub fn new(
        args: impl Into<Cow<'a, [T]>>,
        vals: impl Into<Cow<'a, [T]>>,
        interpolant: Interpolant,
    ) -> Result<Self, TableError> {
        Self::with_config(args, vals, interpolant, AxisConfig::default())
    }

    pub fn with_config(
        args: impl Into<Cow<'a, [T]>>,
        vals: impl Into<Cow<'a, [T]>>,
        interpolant: Interpolant,
        config: AxisConfig,
    ) -> Result<Self, TableError> {
        let args = args.into();
        let vals = vals.into();

        let n = args.len();
        let need = interpolant.min_points();
        if n < need {
            return Err(TableError::TooFewPoints { need, got: n });
        }
        if vals.len() != n {
            return Err(TableError::LengthMismatch {
                expected: n,
                got: vals.len(),
            });
        }

        let axis = SampledAxis::with_config(args, config)?;

        let rule = match interpolant {
            Interpolant::Linear => Rule::Linear,
            Interpolant::Floor => Rule::Floor,
            Interpolant::Ceil => Rule::Ceil,
            Interpolant::Nearest => Rule::Nearest,
            Interpolant::Spline => Rule::Spline(NaturalSpline::new(axis.args(), &vals)?),
        };

        debug!("built {interpolant} table with {n} samples");

        Ok(Self { axis, vals, rule })
    }

    /// Interpolated value at `a`, or exactly zero outside `[arg_min, arg_max]`.
    #[inline]
    pub fn eval(&self, a: T) -> T {
        if a < self.arg_min() || a > self.arg_max() {
            T::zero()
        } else {
            self.lookup(a)
        }
    }

    /// Interpolated value at `a`, regardless of range.
    ///
    /// Outside the sampled range the edge bracket is used, so `linear` and
    /// `spline` extrapolate the edge cell and the piecewise-constant rules
    /// return a value from it.
    #[inline]
    pub fn lookup(&self, a: T) -> T {
        let i = self.axis.upper_index(a);
        let x = self.axis.args();
        let y = &self.vals[..];
        match &self.rule {
            Rule::Linear => linear::linear(x, y, a, i),
            Rule::Floor => hold::floor(x, y, a, i),
            Rule::Ceil => hold::ceil(x, y, a, i),
            Rule::Nearest => hold::nearest(x, y, a, i),
            Rule::Spline(spline) => spline.eval(x, y, a, i),
        }
    }

    /// [`lookup`](Self::lookup) at each of `args`, in order.
    ///
    /// Sorted queries are fastest on non-uniform axes,
    /// but the result does not depend on the order.
    ///
    /// # Errors
    /// * If `args` and `out` have different lengths
    pub fn interp_many(&self, args: &[T], out: &mut [T]) -> Result<(), TableError> {
        if args.len() != out.len() {
            return Err(TableError::LengthMismatch {
                expected: args.len(),
                got: out.len(),
            });
        }

        for i in 0..args.len() {
            out[i] = self.lookup(args[i]);
        }

        Ok(())
    }

    /// [`interp_many`](Self::interp_many), allocating for the output for convenience.
    pub fn interp_many_alloc(&self, args: &[T]) -> Vec<T> {
        args.iter().map(|&a| self.lookup(a)).collect()
    }

    pub fn arg_min(&self) -> T {
        self.axis.front()
    }

    pub fn arg_max(&self) -> T {
        self.axis.back()
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.axis.size()
    }

    pub fn interpolant(&self) -> Interpolant {
        match self.rule {
            Rule::Linear => Interpolant::Linear,
            Rule::Floor => Interpolant::Floor,
            Rule::Ceil => Interpolant::Ceil,
            Rule::Nearest => Interpolant::Nearest,
            Rule::Spline(_) => Interpolant::Spline,
        }
    }

    pub fn axis(&self) -> &SampledAxis<'a, T> {
        &self.axis
    }

    pub fn args(&self) -> &[T] {
        self.axis.args()
    }

    pub fn vals(&self) -> &[T] {
        &self.vals
    }

    /// Spline second derivatives at each sample, for `spline` tables only.
    pub fn second_derivatives(&self) -> Option<&[T]> {
        match &self.rule {
            Rule::Spline(spline) => Some(spline.second_derivatives()),
            _ => None,
        }
    }

    /// See [`SampledAxis::reset_cursor`].
    pub fn reset_cursor(&self) {
        self.axis.reset_cursor()
    }

    /// Detach from any borrowed arrays.
    pub fn into_owned(self) -> Table1D<'static, T> {
        Table1D {
            axis: self.axis.into_owned(),
            vals: Cow::Owned(self.vals.into_owned()),
            rule: self.rule,
        }
    }
}
