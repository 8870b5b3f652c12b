use predprey_core::{DdeProblem, DerivativeOf, Model, StepIntegrable, evaluate};

use super::{Error, history::Past};

/// Fixed-step integration scheme used to advance between grid points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Explicit (forward) Euler.
    ///
    /// First order, one derivative evaluation per step. Mostly useful as a
    /// cross-check or for very fine grids.
    Euler,

    /// Classic fourth-order Runge–Kutta.
    ///
    /// Four derivative evaluations per step. Each stage looks up its own
    /// delayed state, so the delayed term is resolved at the stage time
    /// rather than frozen at the start of the step.
    #[default]
    Rk4,
}

/// Evaluates derivatives for one solve, resolving delayed states against the
/// trajectory accepted so far.
pub(crate) struct Stepper<'a, M, P> {
    pub(crate) model: &'a M,
    pub(crate) problem: &'a P,
    pub(crate) delay: f64,
}

impl<M, P> Stepper<'_, M, P>
where
    M: Model,
    P: DdeProblem<Input = M::Input, Output = M::Output>,
    DerivativeOf<P::State, f64>: Clone,
{
    /// Advances `state` from `t` by `dt` using `method`.
    pub(crate) fn advance(
        &self,
        method: Method,
        past: &Past<'_, P::State>,
        t: f64,
        state: &P::State,
        dt: f64,
    ) -> Result<P::State, Error> {
        match method {
            Method::Euler => {
                let k1 = self.derivative(past, t, state)?;
                Ok(state.step(k1, dt))
            }
            Method::Rk4 => {
                let half = 0.5 * dt;

                let k1 = self.derivative(past, t, state)?;
                let s2 = state.step(k1.clone(), half);
                let k2 = self.derivative(past, t + half, &s2)?;
                let s3 = state.step(k2.clone(), half);
                let k3 = self.derivative(past, t + half, &s3)?;
                let s4 = state.step(k3.clone(), dt);
                let k4 = self.derivative(past, t + dt, &s4)?;

                let sixth = dt / 6.0;
                let third = dt / 3.0;
                Ok(state
                    .step(k1, sixth)
                    .step(k2, third)
                    .step(k3, third)
                    .step(k4, sixth))
            }
        }
    }

    /// Evaluates the derivative at a stage `(t, state)`.
    fn derivative(
        &self,
        past: &Past<'_, P::State>,
        t: f64,
        state: &P::State,
    ) -> Result<DerivativeOf<P::State, f64>, Error> {
        let delayed = past
            .lookup(self.problem, t - self.delay, t, state)
            .map_err(Error::problem)?;

        let input = self
            .problem
            .build_input(t, state, &delayed)
            .map_err(Error::problem)?;

        let snapshot = evaluate(self.model, input).map_err(Error::model)?;

        self.problem
            .derivative(&snapshot.input, &snapshot.output)
            .map_err(Error::problem)
    }
}
