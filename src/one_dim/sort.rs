//! Index sorting: a stable order for reading the grid, and a reversed
//! tie-break for ranking queries against it.
//!
//! The bracket search in [`super::bracket`] ranks query points by merging them
//! behind the grid and sorting the combined sequence. A query equal to some grid
//! coordinates must rank *ahead* of them, which holds only if equal values come
//! out in descending order of their original index. An ordinary stable sort
//! (ascending index on ties) silently shifts every such bracket by one.
//! Do not replace this with `sort_by` on the values alone.

use alloc::vec::Vec;
use core::cmp::Ordering;

use itertools::Itertools;
use num_traits::Float;

/// Produces the permutation that sorts a slice of values ascending.
///
/// Contract for implementors: for `p = argsort(values)`,
/// `values[p[0]] <= values[p[1]] <= ...`, and whenever
/// `values[p[a]] == values[p[b]]` with `a < b`, then `p[a] > p[b]`.
/// That is, equal values appear in *descending* original-index order.
pub trait TieBreakSort {
    fn argsort<T: Float>(&self, values: &[T]) -> Vec<usize>;
}

/// Comparison sort by value, breaking ties by descending index.
///
/// Values are compared with `<`, `>` and `==`, so signed zeros tie;
/// NaN sorts after every number.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseTieSort;

impl TieBreakSort for ReverseTieSort {
    #[inline]
    fn argsort<T: Float>(&self, values: &[T]) -> Vec<usize> {
        (0..values.len())
            .sorted_unstable_by(|&a, &b| reverse_tie_cmp(values, a, b))
            .collect()
    }
}

/// Permutation that sorts `values` ascending, keeping equal values in their
/// original order.
///
/// This is the order in which the grid's samples are read: a grid that is
/// already ascending maps to the identity, repeats included. Ranking queries
/// against the grid needs [`TieBreakSort`] instead.
pub fn argsort_stable<T: Float>(values: &[T]) -> Vec<usize> {
    (0..values.len())
        .sorted_by(|&a, &b| value_cmp(values[a], values[b]))
        .collect()
}

/// Order two indices by value, then by descending index.
#[inline]
fn reverse_tie_cmp<T: Float>(values: &[T], a: usize, b: usize) -> Ordering {
    value_cmp(values[a], values[b]).then_with(|| b.cmp(&a))
}

/// Signed zeros compare equal here, so `-0.0` and `0.0` tie.
#[inline]
fn value_cmp<T: Float>(va: T, vb: T) -> Ordering {
    if va < vb {
        Ordering::Less
    } else if va > vb {
        Ordering::Greater
    } else if va == vb {
        Ordering::Equal
    } else {
        // At least one NaN; push NaNs to the end
        va.is_nan().cmp(&vb.is_nan())
    }
}

#[cfg(test)]
mod test {
    use super::{argsort_stable, ReverseTieSort, TieBreakSort};
    use crate::testing::{rng_fixed_seed, sample_from};

    #[test]
    fn test_argsort_distinct() {
        let v = [3.0_f64, -1.0, 2.5, 0.0];
        assert_eq!(ReverseTieSort.argsort(&v), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_argsort_ties_descend() {
        let v = [1.0_f64, 0.0, 1.0, 1.0, 0.0];
        assert_eq!(ReverseTieSort.argsort(&v), vec![4, 1, 3, 2, 0]);
    }

    #[test]
    fn test_argsort_stable_ties_ascend() {
        let v = [1.0_f64, 0.0, 1.0, 1.0, 0.0];
        assert_eq!(argsort_stable(&v), vec![1, 4, 0, 2, 3]);

        // An ascending grid with repeats is left as-is
        let v = [0.0_f64, 1.0, 1.0, 2.0];
        assert_eq!(argsort_stable(&v), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_argsort_signed_zero_ties() {
        let v = [0.0_f64, -0.0];
        assert_eq!(ReverseTieSort.argsort(&v), vec![1, 0]);
    }

    #[test]
    fn test_argsort_empty() {
        let v: [f32; 0] = [];
        assert!(ReverseTieSort.argsort(&v).is_empty());
    }

    /// Check the full contract on random inputs with many repeated values
    #[test]
    fn test_argsort_contract() {
        let rng = &mut rng_fixed_seed();
        let choices = [-2.0_f64, -0.5, 0.0, 0.5, 1.0, 3.0];

        for n in 1..60 {
            let v = sample_from(rng, &choices, n);
            let p = ReverseTieSort.argsort(&v);

            // Is a permutation
            let mut seen = vec![false; n];
            p.iter().for_each(|&i| seen[i] = true);
            assert!(seen.iter().all(|&s| s));

            for w in p.windows(2) {
                let (a, b) = (w[0], w[1]);
                assert!(v[a] <= v[b]);
                if v[a] == v[b] {
                    assert!(a > b, "ties must come out in descending index order");
                }
            }
        }
    }
}
