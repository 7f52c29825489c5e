//! Linear interpolation of an integer-valued profile, holding the end
//! samples outside the grid.
//!
//! ```rust
//! use gsw_util::one_dim::linear::interp1q_int_alloc;
//!
//! // Grid coordinates need not be sorted
//! let x = [2.0_f64, 0.0, 1.0];
//! let iy = [20_i32, 0, 10];
//!
//! let y = interp1q_int_alloc(&x, &iy, &[0.5, 1.5, -3.0, 9.0]).unwrap();
//! assert_eq!(y, vec![5.0, 15.0, 0.0, 20.0]);
//! ```
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{Float, NumCast, PrimInt};
use tracing::{trace, warn};

use super::bracket::locate_brackets;
use super::sort::{argsort_stable, ReverseTieSort, TieBreakSort};
use super::{Extrap, GridExtent};
use crate::Error;

/// What to do when a query's bracket has zero width.
///
/// With a sorter that honors the [`TieBreakSort`] contract, the lower corner of
/// every bracket lies strictly below the query, so this only comes into play
/// for custom sorters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OnDegenerate<T> {
    /// Fail the whole call with [`Error::DegenerateInterval`].
    Fail,
    /// Write this value for the affected point and carry on.
    Sentinel(T),
}

impl<T> Default for OnDegenerate<T> {
    fn default() -> Self {
        Self::Fail
    }
}

/// Evaluate the interpolant at `x_i`, writing results to `y_i`.
///
/// This is a convenience function; to evaluate the same profile repeatedly,
/// or to configure degenerate-bracket handling, use [`Interp1QInt`] directly.
pub fn interp1q_int<T, I>(x: &[T], iy: &[I], x_i: &[T], y_i: &mut [T]) -> Result<(), Error>
where
    T: Float,
    I: PrimInt,
{
    if x.is_empty() || x_i.is_empty() {
        return Err(Error::InvalidInputSize);
    }
    Interp1QInt::new(x, iy)?.eval(x_i, y_i)
}

/// Evaluate the interpolant, allocating a new Vec for the output.
pub fn interp1q_int_alloc<T, I>(x: &[T], iy: &[I], x_i: &[T]) -> Result<Vec<T>, Error>
where
    T: Float,
    I: PrimInt,
{
    if x.is_empty() || x_i.is_empty() {
        return Err(Error::InvalidInputSize);
    }
    Interp1QInt::new(x, iy)?.eval_alloc(x_i)
}

/// Linear interpolation of integer samples `iy` defined at coordinates `x`.
///
/// The grid may be in any order and may repeat coordinates. Samples are read
/// with the grid in ascending order, repeats kept in the order they appear in
/// `x`, so an ascending grid is used exactly as given. A query exactly on a
/// repeated coordinate lands on the upper end of the bracket below it and
/// returns the sample that appears *first* in `x`.
///
/// Queries at or below the minimum coordinate return the sample at the first
/// occurrence of the minimum, and likewise for the maximum.
///
/// The grid ordering is computed once on construction and reused by every
/// evaluation.
#[derive(Clone, Debug)]
pub struct Interp1QInt<'a, T, I, S = ReverseTieSort> {
    x: &'a [T],
    iy: &'a [I],
    extent: GridExtent<T>,
    /// Permutation putting `x` in ascending order, stable on ties
    order: Vec<usize>,
    on_degenerate: OnDegenerate<T>,
    sorter: S,
}

impl<'a, T, I> Interp1QInt<'a, T, I>
where
    T: Float,
    I: PrimInt,
{
    /// Validate the grid and samples.
    ///
    /// The grid must be non-empty, free of NaN, and the same length as the samples.
    pub fn new(x: &'a [T], iy: &'a [I]) -> Result<Self, Error> {
        if x.len() != iy.len() {
            return Err(Error::LengthMismatch {
                expected: x.len(),
                found: iy.len(),
            });
        }
        let extent = GridExtent::new(x)?;
        let order = argsort_stable(x);

        Ok(Self {
            x,
            iy,
            extent,
            order,
            on_degenerate: OnDegenerate::default(),
            sorter: ReverseTieSort,
        })
    }
}

impl<'a, T, I, S> Interp1QInt<'a, T, I, S>
where
    T: Float,
    I: PrimInt,
    S: TieBreakSort,
{
    pub fn with_degenerate(mut self, on_degenerate: OnDegenerate<T>) -> Self {
        self.on_degenerate = on_degenerate;
        self
    }

    /// Replace the sort used to rank the queries against the grid.
    ///
    /// # Panics
    ///   * During evaluation, if the sorter does not satisfy the [`TieBreakSort`] contract
    pub fn with_sorter<S2: TieBreakSort>(self, sorter: S2) -> Interp1QInt<'a, T, I, S2> {
        Interp1QInt {
            x: self.x,
            iy: self.iy,
            extent: self.extent,
            order: self.order,
            on_degenerate: self.on_degenerate,
            sorter,
        }
    }

    /// Evaluate the interpolant at each of `x_i`, writing to the matching entry of `y_i`.
    ///
    /// On error, `y_i` may be partially written and should be discarded.
    pub fn eval(&self, x_i: &[T], y_i: &mut [T]) -> Result<(), Error> {
        if x_i.is_empty() {
            return Err(Error::InvalidInputSize);
        }
        if x_i.len() != y_i.len() {
            return Err(Error::LengthMismatch {
                expected: x_i.len(),
                found: y_i.len(),
            });
        }
        if let Some(index) = x_i.iter().position(|v| v.is_nan()) {
            return Err(Error::NanQuery { index });
        }

        // Hold the end samples outside the grid, and gather the rest
        let low = self.sample(self.extent.imin)?;
        let high = self.sample(self.extent.imax)?;
        let mut xi = Vec::new();
        let mut ki = Vec::new();
        for (k, &loc) in x_i.iter().enumerate() {
            match self.extent.classify(loc) {
                Extrap::OutsideLow => y_i[k] = low,
                Extrap::OutsideHigh => y_i[k] = high,
                Extrap::Inside => {
                    xi.push(loc);
                    ki.push(k);
                }
            }
        }
        trace!(
            grid = self.x.len(),
            queries = x_i.len(),
            inside = xi.len(),
            "classified query points"
        );

        if xi.is_empty() {
            return Ok(());
        }

        let r = locate_brackets(self.x, &xi, &self.sorter);
        self.fill(&xi, &ki, &r, y_i)
    }

    /// Evaluate the interpolant, allocating a new Vec for the output.
    pub fn eval_alloc(&self, x_i: &[T]) -> Result<Vec<T>, Error> {
        let mut out = vec![T::zero(); x_i.len()];
        self.eval(x_i, &mut out)?;
        Ok(out)
    }

    /// Interpolate each in-range query `xi[i]` on the bracket starting at
    /// sorted position `r[i]`, writing to `y_i[ki[i]]`.
    fn fill(
        &self,
        xi: &[T],
        ki: &[usize],
        r: &[usize],
        y_i: &mut [T],
    ) -> Result<(), Error> {
        for i in 0..xi.len() {
            let (i0, i1) = (self.order[r[i]], self.order[r[i] + 1]);
            let (x0, x1) = (self.x[i0], self.x[i1]);
            let (y0, y1) = (self.sample(i0)?, self.sample(i1)?);

            y_i[ki[i]] = match interpolate(xi[i], x0, x1, y0, y1) {
                Some(v) => v,
                None => match self.on_degenerate {
                    OnDegenerate::Fail => return Err(Error::DegenerateInterval { index: r[i] }),
                    OnDegenerate::Sentinel(v) => {
                        warn!(
                            query = ki[i],
                            bracket = r[i],
                            "zero-width bracket, writing sentinel"
                        );
                        v
                    }
                },
            };
        }

        Ok(())
    }

    #[inline]
    fn sample(&self, i: usize) -> Result<T, Error> {
        <T as NumCast>::from(self.iy[i]).ok_or(Error::Unrepresentable)
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)`,
/// or `None` if the interval does not have positive width.
#[inline]
fn interpolate<T: Float>(loc: T, x0: T, x1: T, y0: T, y1: T) -> Option<T> {
    let dx = x1 - x0;
    if !(dx > T::zero()) {
        return None;
    }

    let u = (loc - x0) / dx;
    Some(y0 + (y1 - y0) * u)
}
