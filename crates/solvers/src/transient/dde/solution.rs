/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the last point of the time grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The trajectory produced by a delay integration.
///
/// `times` and `states` always have the same length. When the status is
/// [`Status::Complete`] that length equals the length of the input grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Grid points that were reached, starting with the first grid point.
    pub times: Vec<f64>,

    /// State at each entry of `times`.
    pub states: Vec<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}
