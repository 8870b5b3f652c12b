use std::{num::NonZeroUsize, path::PathBuf, thread};

use predprey_core::linspace;
use predprey_solvers::transient::dde::Method;
use thiserror::Error;

use crate::model::{Populations, Rates};

/// Settings shared by both experiments.
///
/// [`Config::default`] reproduces the reference run: rates of 0.5, initial
/// populations (1, 2), delays 0.1 through 0.5, 20 000 points over `[0, 30]`,
/// and worker pools of 1 through 10 threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    pub rates: Rates,
    pub initial: Populations,
    pub delays: Vec<f64>,
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub method: Method,
    pub workers: WorkerCeiling,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: Rates::default(),
            initial: Populations::new(1.0, 2.0),
            delays: vec![0.1, 0.2, 0.3, 0.4, 0.5],
            start: 0.0,
            end: 30.0,
            points: 20_000,
            method: Method::Rk4,
            workers: WorkerCeiling::Fixed(10),
            output: OutputConfig::default(),
        }
    }
}

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("at least one delay is required")]
    NoDelays,

    #[error("delay must be finite and non-negative, got {0}")]
    Delay(f64),

    #[error("the time grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("time horizon must be finite and increasing, got [{start}, {end}]")]
    Horizon { start: f64, end: f64 },

    #[error("the worker ceiling must be at least 1")]
    NoWorkers,
}

impl Config {
    /// Checks that the config describes a runnable pair of experiments.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delays.is_empty() {
            return Err(ConfigError::NoDelays);
        }
        if let Some(&delay) = self.delays.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(ConfigError::Delay(delay));
        }
        if self.points < 2 {
            return Err(ConfigError::TooFewPoints(self.points));
        }
        if !self.start.is_finite() || !self.end.is_finite() || self.end <= self.start {
            return Err(ConfigError::Horizon {
                start: self.start,
                end: self.end,
            });
        }
        if self.workers == WorkerCeiling::Fixed(0) {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// Returns the uniformly spaced integration grid.
    #[must_use]
    pub fn time_grid(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }
}

/// Largest worker pool tried by the performance sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum WorkerCeiling {
    /// A fixed number of workers.
    Fixed(usize),

    /// As many workers as the host reports available parallelism.
    Available,
}

impl WorkerCeiling {
    /// Returns the ceiling as a worker count.
    ///
    /// `Available` falls back to 1 if the host cannot report its parallelism.
    #[must_use]
    pub fn resolve(self) -> usize {
        match self {
            Self::Fixed(n) => n,
            Self::Available => thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

/// Where and how large the two images are written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct OutputConfig {
    pub phase_plane: PathBuf,
    pub performance: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            phase_plane: PathBuf::from("results1.png"),
            performance: PathBuf::from("results2.png"),
            width: 600,
            height: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_run() {
        let config = Config::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rates, Rates::default());
        assert_eq!(config.initial, Populations::new(1.0, 2.0));
        assert_eq!(config.delays, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(config.workers.resolve(), 10);
        assert_eq!(config.output.phase_plane, PathBuf::from("results1.png"));
        assert_eq!(config.output.performance, PathBuf::from("results2.png"));

        let grid = config.time_grid();
        assert_eq!(grid.len(), 20_000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[19_999], 30.0);
    }

    #[test]
    fn rejects_invalid_settings() {
        let check = |edit: fn(&mut Config)| {
            let mut config = Config::default();
            edit(&mut config);
            config.validate()
        };

        assert_eq!(check(|c| c.delays.clear()), Err(ConfigError::NoDelays));
        assert_eq!(check(|c| c.delays.push(-0.5)), Err(ConfigError::Delay(-0.5)));
        assert_eq!(check(|c| c.points = 1), Err(ConfigError::TooFewPoints(1)));
        assert_eq!(
            check(|c| c.end = c.start),
            Err(ConfigError::Horizon {
                start: 0.0,
                end: 0.0
            })
        );
        assert_eq!(
            check(|c| c.workers = WorkerCeiling::Fixed(0)),
            Err(ConfigError::NoWorkers)
        );
    }

    #[test]
    fn rejects_nan_delay() {
        let config = Config {
            delays: vec![0.1, f64::NAN],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Delay(d)) if d.is_nan()));
    }

    #[test]
    fn zero_delay_is_valid() {
        let config = Config {
            delays: vec![0.0],
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn available_workers_is_at_least_one() {
        assert!(WorkerCeiling::Available.resolve() >= 1);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            delays = [0.0, 1.0]
            points = 500
            method = "euler"
            workers = "available"

            [rates]
            a = 1.0
            b = 0.1
            c = 1.5
            d = 0.075

            [output]
            phase_plane = "phase.png"
            "#,
        )
        .expect("should parse");

        assert_eq!(config.delays, vec![0.0, 1.0]);
        assert_eq!(config.points, 500);
        assert_eq!(config.method, Method::Euler);
        assert_eq!(config.workers, WorkerCeiling::Available);
        assert_eq!(config.rates.d, 0.075);
        assert_eq!(config.initial, Populations::new(1.0, 2.0));
        assert_eq!(config.end, 30.0);
        assert_eq!(config.output.phase_plane, PathBuf::from("phase.png"));
        assert_eq!(config.output.performance, PathBuf::from("results2.png"));
        assert_eq!(config.validate(), Ok(()));
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn fixed_workers_from_toml() {
        let config: Config = toml::from_str("workers = { fixed = 4 }").expect("should parse");
        assert_eq!(config.workers.resolve(), 4);
    }
}
