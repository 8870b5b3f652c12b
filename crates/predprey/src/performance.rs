//! Parallel sweep timing: the same delays run on worker pools of growing size.
//!
//! Each pool size gets a fresh pool that is built, used for one batch, and
//! joined before the next size starts. The recorded time spans all three, so
//! it includes pool start-up and teardown as well as the solves themselves.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use predprey_plot::Figure;
use rayon::{ThreadPoolBuilder, prelude::*};
use tracing::{debug, info, trace};

use crate::{
    Error,
    config::Config,
    solve::{Trajectory, solve_on_grid},
};

/// Wall-clock time for one batch on a pool of `workers` threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub workers: usize,
    pub elapsed: Duration,

    /// Number of trajectories the batch produced before they were discarded.
    pub results: usize,
}

/// Times the delay sweep on pools of 1 through the configured ceiling.
///
/// # Errors
///
/// Returns an error if the config is invalid, a pool cannot be started, or
/// any delay fails to solve. A failure ends the whole sweep.
pub fn performance_sweep(config: &Config) -> Result<Vec<Timing>, Error> {
    config.validate()?;

    let times = config.time_grid();
    let ceiling = config.workers.resolve();
    info!(
        ceiling,
        delays = config.delays.len(),
        "starting performance sweep"
    );

    (1..=ceiling)
        .map(|workers| -> Result<Timing, Error> {
            let timing = run_batch(config, &times, workers)?;
            debug!(workers, elapsed = ?timing.elapsed, "batch finished");
            Ok(timing)
        })
        .collect()
}

/// Runs every delay once on a fresh pool of `workers` threads.
///
/// Trajectories are collected in delay order and then dropped; only the
/// timing survives. The pool's threads are joined before this returns.
///
/// # Errors
///
/// Returns [`Error::Pool`] if the pool cannot be built, or the first solve
/// error of the batch.
pub fn run_batch(config: &Config, times: &[f64], workers: usize) -> Result<Timing, Error> {
    let started = Instant::now();

    let trajectories: Vec<Trajectory> = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("predprey-worker-{index}"))
        .build_scoped(
            |thread| thread.run(),
            |pool| {
                trace!(workers, setup = ?started.elapsed(), "pool ready");
                pool.install(|| {
                    config
                        .delays
                        .par_iter()
                        .map(|&delay| solve_on_grid(config, times, delay))
                        .collect::<Result<Vec<_>, Error>>()
                })
            },
        )??;

    let elapsed = started.elapsed();

    Ok(Timing {
        workers,
        elapsed,
        results: trajectories.len(),
    })
}

/// Builds the scaling figure: pool size against elapsed seconds.
#[must_use]
pub fn timings_figure(config: &Config, timings: &[Timing]) -> Figure {
    #[allow(clippy::cast_precision_loss)]
    let points: Vec<[f64; 2]> = timings
        .iter()
        .map(|t| [t.workers as f64, t.elapsed.as_secs_f64()])
        .collect();

    Figure::new()
        .title("Teste de Performance (Alg. 1)")
        .x_label("Quantidade de núcleos")
        .y_label("Tempo (s)")
        .size(config.output.width, config.output.height)
        .add_series("tempo", &points)
}

/// Renders [`timings_figure`] to `path`.
///
/// # Errors
///
/// Returns [`Error::Plot`] if the image cannot be rendered or written.
pub fn plot_timings(config: &Config, timings: &[Timing], path: &Path) -> Result<(), Error> {
    timings_figure(config, timings).save(path)?;
    info!(path = %path.display(), "saved performance plot");
    Ok(())
}
