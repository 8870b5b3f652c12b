use std::convert::Infallible;

use predprey_core::DdeProblem;

use crate::model::{LotkaVolterraInput, PopulationRates, Populations};

/// The delayed Lotka-Volterra system with a constant history.
///
/// Before the start of integration the populations are held at `initial`,
/// which is also the state at the first grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayedLotkaVolterra {
    pub delay: f64,
    pub initial: Populations,
}

impl DdeProblem for DelayedLotkaVolterra {
    type Input = LotkaVolterraInput;
    type Output = PopulationRates;
    type State = Populations;
    type Error = Infallible;

    fn delay(&self) -> f64 {
        self.delay
    }

    fn history(&self, _t: f64) -> Result<Populations, Infallible> {
        Ok(self.initial)
    }

    fn build_input(
        &self,
        _t: f64,
        current: &Populations,
        delayed: &Populations,
    ) -> Result<LotkaVolterraInput, Infallible> {
        Ok(LotkaVolterraInput {
            current: *current,
            delayed: *delayed,
        })
    }

    fn derivative(
        &self,
        _input: &LotkaVolterraInput,
        output: &PopulationRates,
    ) -> Result<PopulationRates, Infallible> {
        Ok(*output)
    }
}
