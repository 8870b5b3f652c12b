//! Delayed Lotka-Volterra experiments.
//!
//! Two experiments share one single-delay solver ([`solve_delay`]):
//!
//! - [`accuracy`] — solves each configured delay in turn and overlays the
//!   phase-plane trajectories in one image
//! - [`performance`] — re-runs the same delays on worker pools of growing size
//!   and plots wall-clock time against pool size
//!
//! [`run`] performs both and writes the two images named in
//! [`OutputConfig`](config::OutputConfig).

pub mod accuracy;
pub mod config;
pub mod model;
pub mod performance;
pub mod problem;

mod error;
mod solve;

pub use config::{Config, ConfigError, OutputConfig, WorkerCeiling};
pub use error::Error;
pub use model::{LotkaVolterra, LotkaVolterraInput, PopulationRates, Populations, Rates};
pub use performance::Timing;
pub use problem::DelayedLotkaVolterra;
pub use solve::{Trajectory, solve_delay};

use tracing::info;

/// What a full [`run`] produced, besides the two images.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of phase-plane curves drawn.
    pub curves: usize,

    /// One timing per pool size, in increasing pool size.
    pub timings: Vec<Timing>,
}

/// Runs the accuracy sweep and then the performance sweep, writing both plots.
///
/// # Errors
///
/// Returns the first error from either sweep or from writing an image. A
/// failure in the accuracy sweep skips the performance sweep.
pub fn run(config: &Config) -> Result<Report, Error> {
    let trajectories = accuracy::accuracy_sweep(config)?;
    accuracy::plot_phase_plane(config, &trajectories, &config.output.phase_plane)?;
    let curves = trajectories.len();
    drop(trajectories);

    let timings = performance::performance_sweep(config)?;
    performance::plot_timings(config, &timings, &config.output.performance)?;

    info!(curves, batches = timings.len(), "experiments complete");
    Ok(Report { curves, timings })
}
