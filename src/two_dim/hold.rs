//! Piecewise-constant 2D rules.
//!
//! Each axis picks a sample independently, using the same rule as the 1D
//! tables, and the value at that grid point is returned. These surfaces have
//! no useful gradient, so [`Interp2D::gradient`] always fails.
use num_traits::Float;

use super::{Grid2D, Interp2D, Interpolant2D};
use crate::one_dim::hold::{ceil_index, floor_index, nearest_index};
use crate::TableError;

macro_rules! hold_2d {
    ($name:ident, $variant:ident, $pick:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name<'a, T: Float> {
            grid: Grid2D<'a, T>,
        }

        impl<'a, T: Float> $name<'a, T> {
            pub fn new(grid: Grid2D<'a, T>) -> Self {
                Self { grid }
            }
        }

        impl<'a, T: Float + Send + Sync + 'a> Interp2D<'a, T> for $name<'a, T> {
            #[inline]
            fn interp(&self, x: T, y: T) -> T {
                let (i, j) = self.grid.brackets(x, y);
                let i = $pick(self.grid.x_axis().args(), x, i);
                let j = $pick(self.grid.y_axis().args(), y, j);
                self.grid.at(i, j)
            }

            fn gradient(&self, _x: T, _y: T) -> Result<(T, T), TableError> {
                Err(TableError::GradientUnsupported(Interpolant2D::$variant))
            }

            fn interpolant(&self) -> Interpolant2D {
                Interpolant2D::$variant
            }

            fn grid(&self) -> &Grid2D<'a, T> {
                &self.grid
            }

            fn clone_box(&self) -> Box<dyn Interp2D<'a, T> + Send + 'a> {
                Box::new(self.clone())
            }
        }
    };
}

hold_2d!(
    Floor2D,
    Floor,
    floor_index,
    "Value at the lower grid point on each axis."
);
hold_2d!(
    Ceil2D,
    Ceil,
    ceil_index,
    "Value at the upper grid point on each axis."
);
hold_2d!(
    Nearest2D,
    Nearest,
    nearest_index,
    "Value at the closer grid point on each axis, taking the upper one on a tie."
);

#[cfg(test)]
mod test {
    use super::{Ceil2D, Floor2D, Nearest2D};
    use crate::testing::*;
    use crate::two_dim::{Grid2D, Interp2D};
    use crate::AxisConfig;

    fn grid() -> Grid2D<'static, f64> {
        // f(i, j) = 10 i + j
        let x = vec![0.0_f64, 1.0, 3.0];
        let y = vec![0.0_f64, 2.0, 4.0, 5.0];
        let vals = (0..3)
            .flat_map(|i| (0..4).map(move |j| (10 * i + j) as f64))
            .collect::<Vec<_>>();
        Grid2D::new(x, y, vals, AxisConfig::default()).unwrap()
    }

    #[test]
    fn test_hold_2d() {
        let floor = Floor2D::new(grid());
        let ceil = Ceil2D::new(grid());
        let nearest = Nearest2D::new(grid());

        assert_eq!(floor.interp(0.5, 2.9), 1.0);
        assert_eq!(ceil.interp(0.5, 2.9), 12.0);
        assert_eq!(nearest.interp(0.5, 2.9), 11.0);

        // Exactly on interior grid lines every rule returns the grid value
        assert_eq!(floor.interp(1.0, 4.0), 12.0);
        assert_eq!(ceil.interp(1.0, 4.0), 12.0);
        assert_eq!(nearest.interp(1.0, 4.0), 12.0);

        // Ties go up
        assert_eq!(nearest.interp(2.0, 3.0), 22.0);

        // Outside the grid, each axis clamps to its edge cell
        assert_eq!(floor.interp(-5.0, 9.0), 2.0);
        assert_eq!(ceil.interp(-5.0, 9.0), 13.0);
        assert_eq!(nearest.interp(10.0, -1.0), 20.0);
    }

    /// Every returned value is one of the four corners of the bracketing cell
    #[test]
    fn test_hold_2d_random() {
        let mut rng = rng_fixed_seed();
        let g = grid();
        let rules: [Box<dyn Interp2D<'static, f64> + Send>; 3] = [
            Box::new(Floor2D::new(g.clone())),
            Box::new(Ceil2D::new(g.clone())),
            Box::new(Nearest2D::new(g.clone())),
        ];

        let xs = uniform_between(&mut rng, 100, 0.0, 3.0);
        let ys = uniform_between(&mut rng, 100, 0.0, 5.0);
        for (&a, &b) in xs.iter().zip(ys.iter()) {
            let (i, j) = g.brackets(a, b);
            let corners = [
                g.at(i - 1, j - 1),
                g.at(i, j - 1),
                g.at(i - 1, j),
                g.at(i, j),
            ];
            for rule in rules.iter() {
                assert!(corners.contains(&rule.interp(a, b)));
                assert!(rule.gradient(a, b).is_err());
            }
        }
    }
}
