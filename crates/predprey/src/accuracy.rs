//! Sequential sweep over delays, plotted as overlaid phase-plane curves.

use std::path::Path;

use predprey_plot::Figure;
use tracing::{debug, info};

use crate::{
    Error,
    config::Config,
    solve::{Trajectory, solve_on_grid},
};

/// Solves every configured delay in order on the calling thread.
///
/// # Errors
///
/// Returns an error if the config is invalid or any delay fails to solve; the
/// remaining delays are not attempted.
pub fn accuracy_sweep(config: &Config) -> Result<Vec<Trajectory>, Error> {
    config.validate()?;

    let times = config.time_grid();
    info!(
        delays = config.delays.len(),
        points = times.len(),
        "starting accuracy sweep"
    );

    config
        .delays
        .iter()
        .map(|&delay| -> Result<Trajectory, Error> {
            let trajectory = solve_on_grid(config, &times, delay)?;
            debug!(delay, "delay solved");
            Ok(trajectory)
        })
        .collect()
}

/// Builds the phase-plane figure: prey against predator, one curve per delay.
#[must_use]
pub fn phase_plane_figure(config: &Config, trajectories: &[Trajectory]) -> Figure {
    trajectories.iter().fold(
        Figure::new()
            .title("Lotka-Volterra com Delays (Alg. 1)")
            .x_label("População X")
            .y_label("População Y")
            .size(config.output.width, config.output.height)
            .legend(),
        |figure, trajectory| {
            figure.add_series(&delay_label(trajectory.delay), &trajectory.phase_points())
        },
    )
}

/// Renders [`phase_plane_figure`] to `path`.
///
/// # Errors
///
/// Returns [`Error::Plot`] if the image cannot be rendered or written.
pub fn plot_phase_plane(
    config: &Config,
    trajectories: &[Trajectory],
    path: &Path,
) -> Result<(), Error> {
    phase_plane_figure(config, trajectories).save(path)?;
    info!(path = %path.display(), "saved phase-plane plot");
    Ok(())
}

fn delay_label(delay: f64) -> String {
    format!("delay = {delay:.1}")
}
