//! Incremental construction of a [`Table1D`] from `(x, f(x))` pairs.
//!
//! A [`TableBuilder`] is in one of two states. While building, entries can
//! be appended but the table cannot be queried. [`TableBuilder::finalize`]
//! validates the entries and builds the table; after that, the table can be
//! queried and no more entries are accepted.
//!
//! ```rust
//! use interptable::{Interpolant, TableBuilder};
//!
//! let mut builder = TableBuilder::new(Interpolant::Linear);
//! for i in 0..5 {
//!     let x = i as f64;
//!     builder.add_entry(x, 2.0 * x).unwrap();
//! }
//! assert!(builder.eval(1.5).is_err());
//!
//! builder.finalize().unwrap();
//! assert_eq!(builder.eval(1.5).unwrap(), 3.0);
//! assert!(builder.add_entry(5.0, 10.0).is_err());
//! ```
use num_traits::Float;

use super::{Interpolant, Table1D};
use crate::axis::AxisConfig;
use crate::TableError;

enum BuilderState<T: Float + 'static> {
    Building { args: Vec<T>, vals: Vec<T> },
    Finalized(Table1D<'static, T>),
}

/// Accumulates samples for a [`Table1D`] that owns its arrays.
pub struct TableBuilder<T: Float + 'static> {
    interpolant: Interpolant,
    config: AxisConfig,
    state: BuilderState<T>,
}

impl<T: Float + 'static> TableBuilder<T> {
    pub fn new(interpolant: Interpolant) -> Self {
        Self::with_config(interpolant, AxisConfig::default())
    }

    pub fn with_config(interpolant: Interpolant, config: AxisConfig) -> Self {
        Self {
            interpolant,
            config,
            state: BuilderState::Building {
                args: Vec::new(),
                vals: Vec::new(),
            },
        }
    }

    /// Append the sample `f(x) = f`. Entries must arrive in ascending `x`;
    /// this is checked by [`finalize`](Self::finalize).
    ///
    /// # Errors
    /// * If the builder is already finalized
    pub fn add_entry(&mut self, x: T, f: T) -> Result<(), TableError> {
        match &mut self.state {
            BuilderState::Building { args, vals } => {
                args.push(x);
                vals.push(f);
                Ok(())
            }
            BuilderState::Finalized(_) => Err(TableError::AlreadyFinalized),
        }
    }

    /// Build the table from the entries collected so far.
    ///
    /// On failure the builder keeps its entries and stays open.
    ///
    /// # Errors
    /// * If the builder is already finalized
    /// * If the entries do not make a valid table (see [`Table1D::new`])
    pub fn finalize(&mut self) -> Result<(), TableError> {
        let table = match &self.state {
            BuilderState::Building { args, vals } => Table1D::with_config(
                args.clone(),
                vals.clone(),
                self.interpolant,
                self.config,
            )?,
            BuilderState::Finalized(_) => return Err(TableError::AlreadyFinalized),
        };
        self.state = BuilderState::Finalized(table);
        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, BuilderState::Finalized(_))
    }

    /// Number of entries collected
    pub fn size(&self) -> usize {
        match &self.state {
            BuilderState::Building { args, .. } => args.len(),
            BuilderState::Finalized(table) => table.size(),
        }
    }

    pub fn interpolant(&self) -> Interpolant {
        self.interpolant
    }

    /// The finished table.
    ///
    /// # Errors
    /// * If the builder is not finalized
    pub fn table(&self) -> Result<&Table1D<'static, T>, TableError> {
        match &self.state {
            BuilderState::Finalized(table) => Ok(table),
            BuilderState::Building { .. } => Err(TableError::NotFinalized),
        }
    }

    /// Consume the builder, returning the finished table.
    pub fn into_table(self) -> Result<Table1D<'static, T>, TableError> {
        match self.state {
            BuilderState::Finalized(table) => Ok(table),
            BuilderState::Building { .. } => Err(TableError::NotFinalized),
        }
    }

    /// See [`Table1D::eval`].
    pub fn eval(&self, a: T) -> Result<T, TableError> {
        Ok(self.table()?.eval(a))
    }

    /// See [`Table1D::lookup`].
    pub fn lookup(&self, a: T) -> Result<T, TableError> {
        Ok(self.table()?.lookup(a))
    }

    /// See [`Table1D::interp_many`].
    pub fn interp_many(&self, args: &[T], out: &mut [T]) -> Result<(), TableError> {
        self.table()?.interp_many(args, out)
    }
}
