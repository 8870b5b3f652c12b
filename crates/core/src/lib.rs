//! Core traits and types for the predprey workspace.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`DdeProblem`] — adapts solver state (current and delayed) to model inputs
//!   and extracts derivatives from outputs
//! - [`StepIntegrable`], [`Interpolate`] — what a state type must support to be
//!   stepped forward and looked up between grid points
//! - [`linspace`] — uniformly spaced time grids

mod grid;
mod model;
mod observer;
mod problems;
mod step;

pub use grid::linspace;
pub use model::{Model, Snapshot, evaluate};
pub use observer::Observer;
pub use problems::DdeProblem;
pub use step::{DerivativeOf, Interpolate, StepIntegrable};
