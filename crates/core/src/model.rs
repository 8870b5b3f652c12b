/// A callable model that maps a typed input to a typed output.
///
/// Models are expected to be pure: the same input always yields the same
/// output. Solvers rely on this when they re-evaluate a model at intermediate
/// stages of a step.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model for the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A model input paired with the output it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Captures an input/output pair.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// Calls `model` and captures the result as a [`Snapshot`].
///
/// # Errors
///
/// Returns the model's error unchanged.
pub fn evaluate<M>(model: &M, input: M::Input) -> Result<Snapshot<M::Input, M::Output>, M::Error>
where
    M: Model,
{
    let output = model.call(&input)?;
    Ok(Snapshot::new(input, output))
}
