//! Utility routines from the TEOS-10 Gibbs SeaWater (GSW) toolbox, no-std compatible.
//!
//! The centerpiece is [`interp1q_int`]: linear interpolation of an integer-valued
//! profile onto a set of query coordinates, where neither the profile's grid nor
//! the queries need to be sorted and either may contain repeated coordinates.
//! Queries outside the grid hold the end sample instead of extrapolating.
//!
//! Alongside it, [`seaice`] computes the state of seawater after melting sea ice
//! into it, given a caller-supplied implementation of the thermodynamic primitives.
//!
//! # Performance Scalings
//! Bracketing intervals are found for all in-range query points at once by
//! merging them into the grid and ranking the result with two index sorts,
//! rather than by searching the grid once per point.
//!
//! | Method                  | RAM        | Cost                     |
//! |-------------------------|------------|--------------------------|
//! | one_dim::linear         | O(n + m)   | O((n + m) log2(n + m))   |
//!
//! # Example
//! ```rust
//! use gsw_util::{interp1q_int, Interp1QInt};
//!
//! // Sampled profile; grid order does not matter
//! let x = [0.0_f64, 10.0, 5.0, 20.0];
//! let iy = [1_i32, 3, 2, 5];
//!
//! // Points to interpolate, including some outside the grid
//! let x_i = [-1.0, 2.5, 7.5, 15.0, 25.0];
//!
//! // Storage for output
//! let mut y_i = [0.0; 5];
//!
//! // Do interpolation
//! interp1q_int(&x, &iy, &x_i, &mut y_i).unwrap();
//! assert_eq!(y_i, [1.0, 1.5, 2.5, 4.0, 5.0]);
//!
//! // Or build the interpolator once and evaluate as needed
//! let interpolator = Interp1QInt::new(&x, &iy).unwrap();
//! assert_eq!(interpolator.eval_alloc(&[10.0]).unwrap(), vec![3.0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

mod error;
pub use error::Error;

pub mod one_dim;
pub use one_dim::{
    linear::interp1q_int, linear::interp1q_int_alloc, linear::Interp1QInt,
    linear::OnDegenerate, sort::ReverseTieSort, sort::TieBreakSort, Extrap, GridExtent,
};

pub mod seaice;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
