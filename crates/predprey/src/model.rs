//! Lotka-Volterra predator-prey model with delayed interaction terms.
//!
//! ```text
//! dx/dt =  x(t) * (a - b * y(t - τ))
//! dy/dt = -y(t) * (c - d * x(t - τ))
//! ```
//!
//! Only the cross-interaction terms see the delayed state. The model itself
//! is time-free: the delay is resolved by the solver, which hands the model
//! both the current and the delayed populations.

use std::convert::Infallible;

use predprey_core::{Interpolate, Model, StepIntegrable};

/// Prey (`x`) and predator (`y`) populations at one instant.
///
/// Populations are plain reals. They are not clamped, so a trajectory may go
/// negative or diverge if the equations drive it there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
pub struct Populations {
    pub prey: f64,
    pub predator: f64,
}

impl Populations {
    #[must_use]
    pub const fn new(prey: f64, predator: f64) -> Self {
        Self { prey, predator }
    }

    /// Returns the populations as an `[x, y]` phase-plane point.
    #[must_use]
    pub fn as_point(&self) -> [f64; 2] {
        [self.prey, self.predator]
    }
}

/// Instantaneous rates of change of [`Populations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationRates {
    pub prey: f64,
    pub predator: f64,
}

impl StepIntegrable<f64> for Populations {
    type Derivative = PopulationRates;

    fn step(&self, derivative: PopulationRates, delta: f64) -> Self {
        Self {
            prey: self.prey + derivative.prey * delta,
            predator: self.predator + derivative.predator * delta,
        }
    }
}

impl Interpolate for Populations {
    fn lerp(&self, other: &Self, fraction: f64) -> Self {
        Self {
            prey: self.prey.lerp(&other.prey, fraction),
            predator: self.predator.lerp(&other.predator, fraction),
        }
    }
}

/// Rate constants of the Lotka-Volterra system.
///
/// - `a` — prey growth rate
/// - `b` — predation rate
/// - `c` — predator death rate
/// - `d` — predator growth per prey consumed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
pub struct Rates {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            a: 0.5,
            b: 0.5,
            c: 0.5,
            d: 0.5,
        }
    }
}

/// Input to [`LotkaVolterra`]: the populations now and one delay ago.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotkaVolterraInput {
    pub current: Populations,
    pub delayed: Populations,
}

/// The delayed Lotka-Volterra derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LotkaVolterra {
    pub rates: Rates,
}

impl LotkaVolterra {
    #[must_use]
    pub fn new(rates: Rates) -> Self {
        Self { rates }
    }
}

impl Model for LotkaVolterra {
    type Input = LotkaVolterraInput;
    type Output = PopulationRates;
    type Error = Infallible;

    fn call(&self, input: &LotkaVolterraInput) -> Result<PopulationRates, Infallible> {
        let Rates { a, b, c, d } = self.rates;
        let LotkaVolterraInput { current, delayed } = *input;

        Ok(PopulationRates {
            prey: current.prey * (a - b * delayed.predator),
            predator: -current.predator * (c - d * delayed.prey),
        })
    }
}
