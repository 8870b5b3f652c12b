/// A state that can be advanced using its derivative.
///
/// Solvers step a state via `derivative * delta`, where the derivative is
/// taken with respect to `Delta` (usually time). Multi-stage methods such as
/// RK4 chain several `step` calls with fractional deltas, so an implementation
/// must be linear in `delta`: stepping by `a` then by `b` with the same
/// derivative must equal a single step by `a + b`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the [`StepIntegrable::Derivative`] of `T`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// Linear interpolation between two values of a state.
///
/// Delay solvers use this to recover the state at a time that falls between
/// two stored grid points.
pub trait Interpolate {
    /// Returns the value a `fraction` of the way from `self` to `other`.
    ///
    /// A fraction of `0.0` yields `self` and `1.0` yields `other`. Fractions
    /// outside `[0, 1]` extrapolate along the same line.
    #[must_use]
    fn lerp(&self, other: &Self, fraction: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, fraction: f64) -> Self {
        self + (other - self) * fraction
    }
}

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> Interpolate for [f64; N] {
    fn lerp(&self, other: &Self, fraction: f64) -> Self {
        std::array::from_fn(|i| self[i].lerp(&other[i], fraction))
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: [f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}
