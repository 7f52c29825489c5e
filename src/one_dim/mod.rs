//! One-dimensional interpolation of integer-valued profiles onto arbitrary
//! query coordinates.
//!
//! Neither the source grid nor the query points need to be sorted, and both
//! may contain repeated values. Rather than searching the grid once per query
//! point, the in-range queries are ranked against the grid with two index sorts
//! (see [`bracket`]), for a total cost of O((n + m) log(n + m)).
//!
//! Queries at or beyond the ends of the grid hold the sample at the
//! extreme coordinate; there is no linear extrapolation.

pub mod bracket;
pub mod linear;
pub mod sort;

use num_traits::Float;

use crate::Error;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Extreme coordinates of a source grid and where they first occur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridExtent<T> {
    pub min: T,
    pub imin: usize,
    pub max: T,
    pub imax: usize,
}

impl<T: Float> GridExtent<T> {
    /// Scan the grid once for its extremes.
    ///
    /// Ties resolve to the first occurrence in index order.
    pub fn new(x: &[T]) -> Result<Self, Error> {
        if x.is_empty() {
            return Err(Error::InvalidInputSize);
        }

        if let Some(index) = x.iter().position(|v| v.is_nan()) {
            return Err(Error::NanCoordinate { index });
        }

        let mut extent = Self {
            min: x[0],
            imin: 0,
            max: x[0],
            imax: 0,
        };
        for (i, &v) in x.iter().enumerate().skip(1) {
            if v < extent.min {
                extent.min = v;
                extent.imin = i;
            } else if v > extent.max {
                extent.max = v;
                extent.imax = i;
            }
        }

        Ok(extent)
    }

    /// Whether a query coordinate lies strictly inside the grid's range.
    ///
    /// Points exactly on an extreme are treated as outside, which holds the
    /// sample there without needing a bracket.
    #[inline]
    pub fn classify(&self, loc: T) -> Extrap {
        match loc {
            x if x <= self.min => Extrap::OutsideLow,
            x if x >= self.max => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Extrap, GridExtent};
    use crate::Error;

    #[test]
    fn test_extent_first_occurrence() {
        let x = [1.0_f64, 0.0, 3.0, 0.0, 3.0, 2.0];
        let e = GridExtent::new(&x).unwrap();
        assert_eq!((e.min, e.imin), (0.0, 1));
        assert_eq!((e.max, e.imax), (3.0, 2));
    }

    #[test]
    fn test_extent_single_point() {
        let e = GridExtent::new(&[4.5_f32]).unwrap();
        assert_eq!((e.imin, e.imax), (0, 0));
        assert_eq!(e.classify(4.5), Extrap::OutsideLow);
        assert_eq!(e.classify(10.0), Extrap::OutsideHigh);
    }

    /// A decreasing grid must still find its maximum at index 0
    #[test]
    fn test_extent_decreasing() {
        let e = GridExtent::new(&[3.0_f64, 2.0, 1.0]).unwrap();
        assert_eq!((e.min, e.imin), (1.0, 2));
        assert_eq!((e.max, e.imax), (3.0, 0));
    }

    #[test]
    fn test_classify() {
        let e = GridExtent::new(&[2.0_f64, 0.0, 1.0]).unwrap();
        assert_eq!(e.classify(-1.0), Extrap::OutsideLow);
        assert_eq!(e.classify(0.0), Extrap::OutsideLow);
        assert_eq!(e.classify(0.5), Extrap::Inside);
        assert_eq!(e.classify(1.0), Extrap::Inside);
        assert_eq!(e.classify(2.0), Extrap::OutsideHigh);
        assert_eq!(e.classify(f64::INFINITY), Extrap::OutsideHigh);
        assert_eq!(e.classify(f64::NEG_INFINITY), Extrap::OutsideLow);
    }

    #[test]
    fn test_extent_errors() {
        let empty: [f64; 0] = [];
        assert_eq!(GridExtent::new(&empty), Err(Error::InvalidInputSize));
        assert_eq!(
            GridExtent::new(&[0.0, f64::NAN]),
            Err(Error::NanCoordinate { index: 1 })
        );
    }
}
