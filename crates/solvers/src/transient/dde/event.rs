/// Event emitted by the delay solver for each accepted grid point.
///
/// Step 0 is the initial state taken from the history. Steps 1..N follow each
/// integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<S> {
    /// Index of the grid point.
    pub step: usize,

    /// Time of the grid point.
    pub time: f64,

    /// State at `time`.
    pub state: S,
}
