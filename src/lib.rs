//! Interpolation of tabulated functions of one and two variables.
//!
//! Tables are built once from sampled arguments and values, then queried
//! many times. Lookups are tuned for that pattern:
//!
//! * Evenly spaced axes are detected at construction and resolve a query's
//!   bracket with O(1) arithmetic.
//! * Other axes remember the last bracket they returned, so sequential
//!   queries (scanning a grid, sweeping a profile) cost O(1) per step and
//!   only jumps fall back to bisection.
//! * Spline coefficients are solved once, at construction.
//!
//! | Table       | Rules                                         | Outside the samples      |
//! |-------------|-----------------------------------------------|--------------------------|
//! | [`Table1D`] | linear, floor, ceil, nearest, natural spline  | `eval` is zero, `lookup` extrapolates |
//! | [`Table2D`] | bilinear (with gradient), floor, ceil, nearest | extrapolates from edge cells |
//!
//! Arrays can be borrowed from the caller (pass slices) or owned by the
//! table (pass `Vec`s). Since the bracket cursor is updated during lookups,
//! tables are `Send` but not `Sync`: clone one per thread.
//!
//! ```rust
//! use interptable::{Interpolant, Interpolant2D, Table1D, Table2D};
//!
//! // 1D, with a natural cubic spline
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let f = [0.0_f64, 1.0, 4.0, 9.0, 16.0];
//! let table = Table1D::new(&x[..], &f[..], Interpolant::Spline).unwrap();
//! assert!((table.eval(2.5) - 6.25).abs() < 0.1);
//!
//! // 2D, bilinear
//! let y = [0.0_f64, 1.0];
//! let g = [0.0_f64, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]; // g(x, y) = x
//! let table = Table2D::new(&x[..], &y[..], &g[..], Interpolant2D::Linear).unwrap();
//! assert_eq!(table.lookup(2.5, 0.5), 2.5);
//! assert_eq!(table.gradient(2.5, 0.5).unwrap(), (1.0, 0.0));
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod axis;
pub mod error;
pub mod one_dim;
pub mod two_dim;
pub mod utils;

#[cfg(feature = "serde")]
mod record;

#[cfg(test)]
pub(crate) mod testing;

pub use axis::{AxisConfig, SampledAxis};
pub use error::TableError;
pub use one_dim::builder::TableBuilder;
pub use one_dim::tridiagonal::SymmetricTridiagonal;
pub use one_dim::{Interpolant, Table1D};
pub use two_dim::{
    Bilinear2D, Ceil2D, Floor2D, Grid2D, Interp2D, Interpolant2D, Nearest2D, Table2D,
};
