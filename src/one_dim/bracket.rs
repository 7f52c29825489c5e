//! Batch bracket search by rank merging.
//!
//! For `c` query points on an `n`-point grid, a per-point scan costs O(n c).
//! Here the (deduplicated, sorted) query values are appended after the grid
//! and the combined sequence is index-sorted once. The sorted rank of the
//! `u`-th distinct query is then the number of grid points strictly below it
//! plus the `u` smaller distinct queries, so subtracting `u` leaves a direct
//! count of grid points below the query.
//!
//! This relies on the [`TieBreakSort`] contract: a query is appended after
//! every grid point, so reversed tie-breaking places it ahead of any grid
//! point with an equal coordinate. Equal queries would also be reordered among
//! themselves, so they are collapsed to one entry before merging.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use super::sort::TieBreakSort;

/// Find the bracketing interval for each query point.
///
/// Returns `r` with `r[i]` indexing the grid *as ordered by `sorter`*,
/// such that `xs[r[i]] < xi[i] <= xs[r[i] + 1]` where `xs` is that ordering.
/// Neither `x` nor `xi` needs to be sorted.
///
/// Every query must lie strictly between the minimum and maximum of `x`,
/// and no value may be NaN; this is what range classification guarantees.
/// Under that precondition every `r[i]` is in `0..n - 1`.
///
/// # Panics
///   * If a query is at or below the grid minimum
pub fn locate_brackets<T, S>(x: &[T], xi: &[T], sorter: &S) -> Vec<usize>
where
    T: Float,
    S: TieBreakSort,
{
    let n = x.len();
    let c = xi.len();

    // Sort the queries, and give each one the slot of its distinct value
    let k = sorter.argsort(xi);
    let mut distinct: Vec<T> = Vec::with_capacity(c);
    let mut slot = Vec::with_capacity(c);
    for &q in &k {
        let v = xi[q];
        if distinct.last() != Some(&v) {
            distinct.push(v);
        }
        slot.push(distinct.len() - 1);
    }

    // Grid in its original order, then the distinct queries ascending
    let xxi: Vec<T> = x.iter().chain(distinct.iter()).copied().collect();
    let j = sorter.argsort(&xxi);

    // Sorted rank of each entry of the combined sequence
    let mut jrev = vec![0_usize; xxi.len()];
    for (rank, &q) in j.iter().enumerate() {
        jrev[q] = rank;
    }

    // Rank minus the smaller distinct queries is the count of grid points below;
    // the last of those is the lower corner of the bracket.
    let lower: Vec<usize> = (0..distinct.len())
        .map(|u| jrev[n + u] - u - 1)
        .collect();

    let mut r = vec![0_usize; c];
    for (i, &q) in k.iter().enumerate() {
        r[q] = lower[slot[i]];
    }

    r
}
