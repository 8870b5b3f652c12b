use predprey_plot::PlotError;
use predprey_solvers::transient::dde;
use rayon::ThreadPoolBuildError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can end an experiment.
///
/// Every variant is fatal for the run that raised it; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("integration failed for delay {delay}: {source}")]
    Solve {
        delay: f64,
        #[source]
        source: dde::Error,
    },

    #[error("failed to start worker pool: {0}")]
    Pool(#[from] ThreadPoolBuildError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
