use std::error::Error as StdError;

/// Errors that can occur during delay integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("delay must be finite and non-negative, got {0}")]
    InvalidDelay(f64),

    #[error("invalid time grid: {0}")]
    Grid(#[from] GridError),

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}

/// Reasons a time grid is rejected.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no points")]
    Empty,

    #[error("grid point {index} is not finite")]
    NonFinite { index: usize },

    #[error("grid point {index} does not increase on the previous point")]
    NotIncreasing { index: usize },
}

/// Checks that `times` is non-empty, finite, and strictly increasing.
pub(crate) fn validate_grid(times: &[f64]) -> Result<(), GridError> {
    if times.is_empty() {
        return Err(GridError::Empty);
    }

    if let Some(index) = times.iter().position(|t| !t.is_finite()) {
        return Err(GridError::NonFinite { index });
    }

    if let Some(offset) = times.windows(2).position(|w| w[1] <= w[0]) {
        return Err(GridError::NotIncreasing { index: offset + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_grid() {
        assert_eq!(validate_grid(&[0.0]), Ok(()));
        assert_eq!(validate_grid(&[0.0, 0.5, 2.0]), Ok(()));
    }

    #[test]
    fn rejects_bad_grids() {
        assert_eq!(validate_grid(&[]), Err(GridError::Empty));
        assert_eq!(
            validate_grid(&[0.0, f64::NAN, 1.0]),
            Err(GridError::NonFinite { index: 1 })
        );
        assert_eq!(
            validate_grid(&[0.0, 1.0, 1.0]),
            Err(GridError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            validate_grid(&[0.0, 2.0, 1.0]),
            Err(GridError::NotIncreasing { index: 2 })
        );
    }
}
