//! Bilinear interpolation on a rectilinear grid.
//!
//! The value in each cell is the area-weighted mean of its four corners,
//! each corner weighted by the area of the sub-rectangle opposite it:
//!
//! ```text
//! f(x, y) = f00 ax ay + f10 bx ay + f01 ax by + f11 bx by
//! ```
//!
//! where `ax = (x1 - x) / (x1 - x0)` is the weight of the lower x sample,
//! `bx = 1 - ax`, and likewise on y. Outside the grid the same expression
//! extrapolates from the nearest edge cell.
use num_traits::Float;

use super::{Grid2D, Interp2D, Interpolant2D};
use crate::one_dim::linear::lower_weight;
use crate::TableError;

/// Bilinear interpolant with an analytic gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Bilinear2D<'a, T: Float> {
    grid: Grid2D<'a, T>,
}

/// Corner values and weights of the cell containing a point
struct Corners<T> {
    f00: T,
    f10: T,
    f01: T,
    f11: T,
    ax: T,
    ay: T,
    dx: T,
    dy: T,
}

impl<'a, T: Float> Bilinear2D<'a, T> {
    pub fn new(grid: Grid2D<'a, T>) -> Self {
        Self { grid }
    }

    #[inline]
    fn cell(&self, x: T, y: T) -> Corners<T> {
        let (i, j) = self.grid.brackets(x, y);
        let xs = self.grid.x_axis().args();
        let ys = self.grid.y_axis().args();

        Corners {
            f00: self.grid.at(i - 1, j - 1),
            f10: self.grid.at(i, j - 1),
            f01: self.grid.at(i - 1, j),
            f11: self.grid.at(i, j),
            ax: lower_weight(xs, x, i),
            ay: lower_weight(ys, y, j),
            dx: xs[i] - xs[i - 1],
            dy: ys[j] - ys[j - 1],
        }
    }
}

impl<'a, T: Float + Send + Sync + 'a> Interp2D<'a, T> for Bilinear2D<'a, T> {
    #[inline]
    fn interp(&self, x: T, y: T) -> T {
        let c = self.cell(x, y);
        let bx = T::one() - c.ax;
        let by = T::one() - c.ay;
        c.f00 * c.ax * c.ay + c.f10 * bx * c.ay + c.f01 * c.ax * by + c.f11 * bx * by
    }

    #[inline]
    fn gradient(&self, x: T, y: T) -> Result<(T, T), TableError> {
        let c = self.cell(x, y);
        let bx = T::one() - c.ax;
        let by = T::one() - c.ay;
        let dfdx = ((c.f10 - c.f00) * c.ay + (c.f11 - c.f01) * by) / c.dx;
        let dfdy = ((c.f01 - c.f00) * c.ax + (c.f11 - c.f10) * bx) / c.dy;
        Ok((dfdx, dfdy))
    }

    fn interpolant(&self) -> Interpolant2D {
        Interpolant2D::Linear
    }

    fn grid(&self) -> &Grid2D<'a, T> {
        &self.grid
    }

    fn clone_box(&self) -> Box<dyn Interp2D<'a, T> + Send + 'a> {
        Box::new(self.clone())
    }
}
