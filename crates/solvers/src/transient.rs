//! Time-marching solvers.
//!
//! - [`dde`] — fixed-step integration of [`DdeProblem`]s with linear
//!   interpolation of the delayed state
//!
//! [`DdeProblem`]: predprey_core::DdeProblem

pub mod dde;
