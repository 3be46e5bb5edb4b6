//! Bracket search over a fixed, ascending array of sample locations.
//!
//! Every table in this crate resolves a query through a [`SampledAxis`],
//! which returns the upper index `i` of the bracket `[args[i-1], args[i]]`
//! containing the query.
//!
//! Two search strategies are used:
//! * If the samples are (within tolerance) evenly spaced, the bracket is
//!   computed directly in O(1), with a short nudge loop to absorb rounding
//!   at the cell edges.
//! * Otherwise, the axis remembers the last bracket it returned. Queries that
//!   land in the same cell or one of its neighbors are answered in O(1);
//!   anything further away falls back to a bisection search over the part of
//!   the array on the relevant side of the remembered bracket.
//!
//! Queries outside the sampled range are clamped to the first or last
//! bracket; no error is raised.
//!
//! The remembered bracket lives in a [`Cell`], so a `SampledAxis` (and every
//! table that owns one) is `Send` but not `Sync`. Each thread should hold its
//! own clone.
//!
//! ```rust
//! use interptable::SampledAxis;
//!
//! let x = [0.0_f64, 0.5, 2.0, 5.0];
//! let axis = SampledAxis::new(&x[..]).unwrap();
//!
//! assert_eq!(axis.upper_index(1.0), 2);
//! assert_eq!(axis.upper_index(-3.0), 1);
//! assert_eq!(axis.upper_index(9.0), 3);
//! ```
use std::borrow::Cow;
use std::cell::Cell;
use std::ops::Index;

use log::{debug, trace};
use num_traits::{Float, NumCast};

use crate::TableError;

/// Tuning knobs for bracket search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Largest deviation, as a fraction of the mean spacing, that any sample may
    /// have from its evenly-spaced position for the axis to count as uniform.
    pub uniform_tolerance: f64,

    /// Whether to look for uniform spacing at all.
    pub detect_uniform: bool,

    /// Whether non-uniform lookups start from the previously returned bracket.
    /// When disabled, every lookup is a full bisection and the axis carries
    /// no mutable state in practice.
    pub track_cursor: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            uniform_tolerance: 0.01,
            detect_uniform: true,
            track_cursor: true,
        }
    }
}

impl AxisConfig {
    pub fn uniform_tolerance(mut self, tol: f64) -> Self {
        self.uniform_tolerance = tol;
        self
    }

    pub fn detect_uniform(mut self, detect: bool) -> Self {
        self.detect_uniform = detect;
        self
    }

    pub fn track_cursor(mut self, track: bool) -> Self {
        self.track_cursor = track;
        self
    }
}

/// An ascending set of sample locations with a bracket locator.
#[derive(Clone, Debug)]
pub struct SampledAxis<'a, T: Float> {
    /// Sample locations, size >= 2
    args: Cow<'a, [T]>,

    /// Mean spacing (last - first) / (n - 1)
    spacing: T,

    /// Whether the O(1) index calculation is valid
    uniform: bool,

    /// Small margins at either end, 1e-6 of the edge cell width
    lower_slop: T,
    upper_slop: T,

    track_cursor: bool,

    /// Upper index of the last bracket returned, in 1..n
    cursor: Cell<usize>,
}

impl<'a, T: Float> SampledAxis<'a, T> {
    /// Build an axis with the default [`AxisConfig`].
    ///
    /// # Errors
    /// * If there are fewer than 2 samples
    /// * If any sample is not finite
    /// * If the samples are not non-decreasing
    /// * If the first and last sample are equal
    pub fn new(args: impl Into<Cow<'a, [T]>>) -> Result<Self, TableError> {
        Self::with_config(args, AxisConfig::default())
    }

    pub fn with_config(
        args: impl Into<Cow<'a, [T]>>,
        config: AxisConfig,
    ) -> Result<Self, TableError> {
        let args = args.into();
        let n = args.len();
        if n < 2 {
            return Err(TableError::TooFewPoints { need: 2, got: n });
        }
        if let Some(index) = args.iter().position(|a| !a.is_finite()) {
            return Err(TableError::NotFinite { index });
        }
        if let Some(index) = (1..n).find(|&i| args[i] < args[i - 1]) {
            return Err(TableError::NotAscending { index });
        }
        if args[n - 1] <= args[0] {
            return Err(TableError::DegenerateAxis);
        }

        let spacing =
            (args[n - 1] - args[0]) / <T as NumCast>::from(n - 1).ok_or(TableError::Unrepresentable)?;

        let uniform = if config.detect_uniform {
            let tol = <T as NumCast>::from(config.uniform_tolerance)
                .ok_or(TableError::Unrepresentable)?;
            (1..n).all(|i| match <T as NumCast>::from(i) {
                Some(fi) => ((args[i] - args[0]) / spacing - fi).abs() <= tol,
                None => false,
            })
        } else {
            false
        };

        let micro = <T as NumCast>::from(1e-6).ok_or(TableError::Unrepresentable)?;
        let lower_slop = (args[1] - args[0]) * micro;
        let upper_slop = (args[n - 1] - args[n - 2]) * micro;

        debug!("built axis with {n} samples, uniform spacing: {uniform}");

        Ok(Self {
            args,
            spacing,
            uniform,
            lower_slop,
            upper_slop,
            track_cursor: config.track_cursor,
            cursor: Cell::new(1),
        })
    }

    /// Upper index `i` of the bracket `[args[i-1], args[i]]` containing `a`,
    /// with `1 <= i <= n - 1`.
    ///
    /// Below the first sample this is 1, and above the last sample it is `n - 1`.
    /// A query sitting exactly on an interior sample may get either of the two
    /// brackets that share it, depending on the search path taken.
    #[inline]
    pub fn upper_index(&self, a: T) -> usize {
        let n = self.args.len();
        if a < self.args[0] {
            return 1;
        }
        if a > self.args[n - 1] {
            return n - 1;
        }

        if self.uniform {
            self.uniform_index(a)
        } else if self.track_cursor {
            self.cursor_index(a)
        } else {
            self.bisect_index(a)
        }
    }

    /// Direct index arithmetic for evenly spaced samples.
    /// Assumes `a` is already known to be inside the sampled range.
    #[inline]
    fn uniform_index(&self, a: T) -> usize {
        let args = &self.args[..];
        let n = args.len();

        let mut i = ((a - args[0]) / self.spacing)
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .clamp(1, n - 1);

        // Rounding can leave us one cell off at the edges
        while a > args[i] {
            i += 1;
        }
        while a < args[i - 1] {
            i -= 1;
        }
        i
    }

    /// Search starting from the last returned bracket.
    /// Assumes `a` is already known to be inside the sampled range.
    #[inline]
    fn cursor_index(&self, a: T) -> usize {
        let args = &self.args[..];
        let last = self.cursor.get();

        let i = if a < args[last - 1] {
            // `a >= args[0]` so `last >= 2` here
            if a >= args[last - 2] {
                last - 1
            } else {
                // Upper bound over [0, last - 1)
                let i = args[..last - 1].partition_point(|&x| x <= a);
                trace!("bracket moved down from {last} to {i} by bisection");
                i
            }
        } else if a > args[last] {
            // `a <= args[n - 1]` so `last <= n - 2` here
            if a <= args[last + 1] {
                last + 1
            } else {
                // Lower bound over [last + 1, n)
                let i = last + 1 + args[last + 1..].partition_point(|&x| x < a);
                trace!("bracket moved up from {last} to {i} by bisection");
                i
            }
        } else {
            return last;
        };

        self.cursor.set(i);
        i
    }

    /// Whole-array bisection that leaves the cursor alone.
    #[inline]
    fn bisect_index(&self, a: T) -> usize {
        let n = self.args.len();
        self.args.partition_point(|&x| x < a).clamp(1, n - 1)
    }

    /// Forget the remembered bracket. Lookups stay correct either way;
    /// this only affects how quickly the next non-uniform lookup resolves.
    pub fn reset_cursor(&self) {
        self.cursor.set(1);
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.args.len()
    }

    pub fn front(&self) -> T {
        self.args[0]
    }

    pub fn back(&self) -> T {
        self.args[self.args.len() - 1]
    }

    pub fn args(&self) -> &[T] {
        &self.args
    }

    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Sample spacing, if the axis was detected as uniform.
    pub fn spacing(&self) -> Option<T> {
        self.uniform.then_some(self.spacing)
    }

    /// Margins below the first and above the last sample, each 1e-6 of the
    /// width of the adjacent cell, for callers that want to treat queries
    /// within rounding distance of an edge as being on it.
    pub fn slop(&self) -> (T, T) {
        (self.lower_slop, self.upper_slop)
    }

    /// Whether `a` lies in the closed sampled range.
    #[inline]
    pub fn contains(&self, a: T) -> bool {
        a >= self.front() && a <= self.back()
    }

    /// Detach from borrowed sample locations, keeping the cursor.
    pub fn into_owned(self) -> SampledAxis<'static, T> {
        SampledAxis {
            args: Cow::Owned(self.args.into_owned()),
            spacing: self.spacing,
            uniform: self.uniform,
            lower_slop: self.lower_slop,
            upper_slop: self.upper_slop,
            track_cursor: self.track_cursor,
            cursor: self.cursor,
        }
    }
}

impl<T: Float> Index<usize> for SampledAxis<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.args[i]
    }
}

/// The cursor is a search hint, not part of the axis's value.
impl<'a, 'b, T: Float> PartialEq<SampledAxis<'b, T>> for SampledAxis<'a, T> {
    fn eq(&self, other: &SampledAxis<'b, T>) -> bool {
        self.args == other.args
            && self.uniform == other.uniform
            && self.track_cursor == other.track_cursor
    }
}
