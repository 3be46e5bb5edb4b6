//! Textual form of tables, for storing them alongside other parameters.
//!
//! Only what the table was built from is written: the rule name and the raw
//! arrays. Everything derived from them (uniform spacing, spline
//! coefficients, the search cursor) is rebuilt when the text is read back.
//! Tables read from text always use the default [`AxisConfig`](crate::AxisConfig).
//!
//! ```rust
//! use interptable::{Interpolant, Table1D};
//!
//! let x = [0.0_f64, 1.0, 2.0];
//! let f = [1.0_f64, 3.0, 2.0];
//! let table = Table1D::new(&x[..], &f[..], Interpolant::Nearest).unwrap();
//!
//! let text = table.to_text().unwrap();
//! assert_eq!(text, r#"{"interpolant":"nearest","args":[0.0,1.0,2.0],"vals":[1.0,3.0,2.0]}"#);
//!
//! let copy = Table1D::<f64>::from_text(&text).unwrap();
//! assert_eq!(copy, table);
//! ```
use std::borrow::Cow;

use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Interpolant, Interpolant2D, Table1D, Table2D, TableError};

#[derive(Serialize, Deserialize)]
struct Record1D<'a, T: Clone> {
    interpolant: Interpolant,
    args: Cow<'a, [T]>,
    vals: Cow<'a, [T]>,
}

#[derive(Serialize, Deserialize)]
struct Record2D<'a, T: Clone> {
    interpolant: Interpolant2D,
    xargs: Cow<'a, [T]>,
    yargs: Cow<'a, [T]>,
    vals: Cow<'a, [T]>,
}

impl<'a, T: Float + Serialize> Table1D<'a, T> {
    /// Write the rule and sample arrays as JSON.
    ///
    /// Non-finite values are written as `null` and will not read back.
    ///
    /// # Errors
    /// * If the record cannot be written
    pub fn to_text(&self) -> Result<String, TableError> {
        let record = Record1D {
            interpolant: self.interpolant(),
            args: Cow::Borrowed(self.args()),
            vals: Cow::Borrowed(self.vals()),
        };
        serde_json::to_string(&record).map_err(|e| TableError::Serialization(e.to_string()))
    }
}

impl<T: Float + DeserializeOwned> Table1D<'static, T> {
    /// Rebuild a table from the output of [`to_text`](Self::to_text).
    ///
    /// # Errors
    /// * If the text is not a valid record
    /// * If the arrays do not make a valid table (see [`Table1D::new`])
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let record: Record1D<'static, T> = serde_json::from_str(text)
            .map_err(|e| TableError::Serialization(e.to_string()))?;
        Table1D::new(
            record.args.into_owned(),
            record.vals.into_owned(),
            record.interpolant,
        )
    }
}

impl<'a, T: Float + Serialize + 'a> Table2D<'a, T> {
    /// Write the rule, both axes and the grid values as JSON.
    ///
    /// Non-finite values are written as `null` and will not read back.
    ///
    /// # Errors
    /// * If the record cannot be written
    pub fn to_text(&self) -> Result<String, TableError> {
        let grid = self.grid();
        let record = Record2D {
            interpolant: self.interpolant(),
            xargs: Cow::Borrowed(grid.x_axis().args()),
            yargs: Cow::Borrowed(grid.y_axis().args()),
            vals: Cow::Borrowed(grid.vals()),
        };
        serde_json::to_string(&record).map_err(|e| TableError::Serialization(e.to_string()))
    }
}

impl<T: Float + Send + Sync + DeserializeOwned + 'static> Table2D<'static, T> {
    /// Rebuild a table from the output of [`to_text`](Self::to_text).
    ///
    /// # Errors
    /// * If the text is not a valid record
    /// * If the arrays do not make a valid table (see [`Table2D::new`])
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let record: Record2D<'static, T> = serde_json::from_str(text)
            .map_err(|e| TableError::Serialization(e.to_string()))?;
        Table2D::new(
            record.xargs.into_owned(),
            record.yargs.into_owned(),
            record.vals.into_owned(),
            record.interpolant,
        )
    }
}

#[cfg(test)]
mod test {
    use crate::testing::*;
    use crate::utils::{linspace, tabulate_2d};
    use crate::{Interpolant, Interpolant2D, Table1D, Table2D, TableError};

    #[test]
    fn test_round_trip_1d() {
        let mut rng = rng_fixed_seed();
        let x = random_ascending(&mut rng, 12, 0.0, 1.0);
        let f = uniform_between(&mut rng, 12, -1.0, 1.0);

        for interpolant in Interpolant::ALL {
            let table = Table1D::new(&x[..], &f[..], interpolant).unwrap();
            let copy = Table1D::<f64>::from_text(&table.to_text().unwrap()).unwrap();
            assert_eq!(copy, table);
            assert_eq!(copy.second_derivatives(), table.second_derivatives());

            let locs = uniform_between(&mut rng, 50, -0.1, 1.1);
            for &a in locs.iter() {
                assert_eq!(copy.eval(a), table.eval(a));
            }
        }
    }

    /// Values whose shortest decimal form parses back to a neighbouring
    /// float without correctly rounded parsing
    #[test]
    fn test_round_trip_bits() {
        let x = [0.1_f64, 0.4148905205530729, 0.92853132655946, 1.7976931348623157e3];
        let f = [1.0e-300_f64, -0.3, 2.0_f64.sqrt(), std::f64::consts::PI];
        let table = Table1D::new(&x[..], &f[..], Interpolant::Linear).unwrap();
        let copy = Table1D::<f64>::from_text(&table.to_text().unwrap()).unwrap();
        for (a, b) in copy.args().iter().zip(x.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        for (a, b) in copy.vals().iter().zip(f.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }

        let mut rng = rng_fixed_seed();
        let x = random_ascending(&mut rng, 500, -1.0, 1.0);
        let f = randn::<f64>(&mut rng, 500);
        let table = Table1D::new(&x[..], &f[..], Interpolant::Spline).unwrap();
        let copy = Table1D::<f64>::from_text(&table.to_text().unwrap()).unwrap();
        assert_eq!(copy, table);
        assert_eq!(copy.second_derivatives(), table.second_derivatives());
    }

    #[test]
    fn test_round_trip_2d() {
        let x = linspace(0.0_f64, 2.0, 5);
        let y = linspace(-1.0_f64, 1.0, 4);
        let f = tabulate_2d(&x, &y, |a: f64, b: f64| a.exp() * b);

        for interpolant in Interpolant2D::ALL {
            let table = Table2D::new(&x[..], &y[..], &f[..], interpolant).unwrap();
            let text = table.to_text().unwrap();
            assert!(text.contains(&format!("\"{interpolant}\"")));

            let copy = Table2D::<f64>::from_text(&text).unwrap();
            assert_eq!(copy, table);
            assert_eq!(copy.lookup(1.3, 0.2), table.lookup(1.3, 0.2));
        }
    }

    #[test]
    fn test_bad_text() {
        assert!(matches!(
            Table1D::<f64>::from_text("not json"),
            Err(TableError::Serialization(_))
        ));
        assert!(matches!(
            Table1D::<f64>::from_text(r#"{"interpolant":"cubic","args":[0.0,1.0],"vals":[0.0,1.0]}"#),
            Err(TableError::Serialization(_))
        ));
        // Well-formed record, invalid table
        assert!(matches!(
            Table1D::<f64>::from_text(r#"{"interpolant":"spline","args":[0.0,1.0],"vals":[0.0,1.0]}"#),
            Err(TableError::TooFewPoints { need: 3, got: 2 })
        ));
        assert!(matches!(
            Table2D::<f64>::from_text(r#"{"interpolant":"bilinear","xargs":[0.0,1.0],"yargs":[0.0,1.0],"vals":[0.0]}"#),
            Err(TableError::LengthMismatch { expected: 4, got: 1 })
        ));
        assert!(matches!(
            Table2D::<f64>::from_text(r#"{"interpolant":"spline","xargs":[0.0,1.0],"yargs":[0.0,1.0],"vals":[0.0,0.0,0.0,0.0]}"#),
            Err(TableError::Serialization(_))
        ));
    }
}
