use predprey_solvers::transient::dde;
use tracing::trace;

use crate::{
    Error,
    config::Config,
    model::{LotkaVolterra, Populations},
    problem::DelayedLotkaVolterra,
};

/// Populations over the time grid for one delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub delay: f64,
    pub times: Vec<f64>,
    pub states: Vec<Populations>,
}

impl Trajectory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state at the first grid point.
    #[must_use]
    pub fn first(&self) -> Option<&Populations> {
        self.states.first()
    }

    /// Returns the trajectory as `[prey, predator]` phase-plane points.
    #[must_use]
    pub fn phase_points(&self) -> Vec<[f64; 2]> {
        self.states.iter().map(Populations::as_point).collect()
    }
}

/// Grid steps between progress events.
const PROGRESS_INTERVAL: usize = 1000;

/// Solves the delayed system for a single delay on the configured grid.
///
/// # Errors
///
/// Returns [`Error::Config`] if `config` is invalid, or [`Error::Solve`] if
/// integration fails.
pub fn solve_delay(config: &Config, delay: f64) -> Result<Trajectory, Error> {
    config.validate()?;
    solve_on_grid(config, &config.time_grid(), delay)
}

/// Solves one delay on a prebuilt grid, skipping config validation.
pub(crate) fn solve_on_grid(
    config: &Config,
    times: &[f64],
    delay: f64,
) -> Result<Trajectory, Error> {
    let model = LotkaVolterra::new(config.rates);
    let problem = DelayedLotkaVolterra {
        delay,
        initial: config.initial,
    };

    let progress = |event: &dde::Event<Populations>| -> Option<dde::Action> {
        if event.step % PROGRESS_INTERVAL == 0 {
            trace!(delay, step = event.step, time = event.time, "integrating");
        }
        None
    };

    let solution = dde::solve(&model, &problem, times, config.method, progress)
        .map_err(|source| Error::Solve { delay, source })?;

    Ok(Trajectory {
        delay,
        times: solution.times,
        states: solution.states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::config::ConfigError;

    fn short_config() -> Config {
        Config {
            end: 3.0,
            points: 301,
            ..Config::default()
        }
    }

    #[test]
    fn trajectory_covers_grid_from_initial_state() {
        let config = short_config();
        let trajectory = solve_delay(&config, 0.2).expect("should solve");

        assert_eq!(trajectory.len(), 301);
        assert_eq!(trajectory.times, config.time_grid());
        assert_eq!(trajectory.first(), Some(&Populations::new(1.0, 2.0)));
        assert_eq!(trajectory.phase_points()[0], [1.0, 2.0]);
        assert_relative_eq!(trajectory.delay, 0.2);
    }

    #[test]
    fn invalid_config_is_rejected_before_solving() {
        let config = Config {
            points: 0,
            ..short_config()
        };
        assert!(matches!(
            solve_delay(&config, 0.2),
            Err(Error::Config(ConfigError::TooFewPoints(0)))
        ));
    }

    #[test]
    fn invalid_delay_fails_the_run() {
        let config = short_config();
        let result = solve_on_grid(&config, &config.time_grid(), -1.0);

        let Err(Error::Solve { delay, source }) = result else {
            panic!("expected a solve error");
        };
        assert_relative_eq!(delay, -1.0);
        assert!(matches!(source, dde::Error::InvalidDelay(_)));
    }

    #[test]
    fn progress_events_leave_the_solution_unchanged() {
        let config = Config {
            points: 2501,
            ..short_config()
        };
        let times = config.time_grid();
        let problem = DelayedLotkaVolterra {
            delay: 0.3,
            initial: config.initial,
        };

        let observed = solve_on_grid(&config, &times, 0.3).unwrap();
        let unobserved = dde::solve_unobserved(
            &LotkaVolterra::new(config.rates),
            &problem,
            &times,
            config.method,
        )
        .unwrap();

        assert_eq!(observed.states, unobserved.states);
        assert_eq!(observed.times, unobserved.times);
    }

    #[test]
    fn larger_delay_changes_the_trajectory() {
        let config = short_config();
        let short = solve_delay(&config, 0.1).unwrap();
        let long = solve_delay(&config, 0.5).unwrap();

        let last_short = short.states.last().unwrap();
        let last_long = long.states.last().unwrap();
        assert!((last_short.prey - last_long.prey).abs() > 1e-6);
    }
}
