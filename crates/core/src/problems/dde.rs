use crate::{DerivativeOf, Interpolate, StepIntegrable};

/// Defines a delay differential equation (DDE) problem with a single fixed lag.
///
/// The derivative at time `t` depends on the state at `t` and on the state at
/// `t - delay`. Before the first grid point the delayed state comes from
/// [`history`](DdeProblem::history); afterwards the solver interpolates it
/// from the trajectory computed so far.
///
/// A problem does not compute derivatives itself. It assembles a model input
/// from the two states and extracts the derivative from the model output, so
/// the same [`Model`](crate::Model) can be reused with different delays,
/// histories, or solvers.
pub trait DdeProblem {
    type Input;
    type Output;
    type State: StepIntegrable<f64> + Interpolate + Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the lag between the current and the delayed state.
    ///
    /// Must be finite and non-negative. A delay of zero reduces the problem to
    /// an ordinary differential equation.
    fn delay(&self) -> f64;

    /// Returns the state at a time at or before the start of integration.
    ///
    /// The solver also uses the history at the first grid point as the
    /// initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no state is defined for `t`.
    fn history(&self, t: f64) -> Result<Self::State, Self::Error>;

    /// Builds a model input from the current and delayed states.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed.
    fn build_input(
        &self,
        t: f64,
        current: &Self::State,
        delayed: &Self::State,
    ) -> Result<Self::Input, Self::Error>;

    /// Extracts the state derivative from a model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, f64>, Self::Error>;
}
