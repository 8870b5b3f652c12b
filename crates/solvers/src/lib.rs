//! Numerical solvers for delay differential equation problems.
//!
//! # Modules
//!
//! - [`transient`] — time-marching solvers over a fixed grid

pub mod transient;
