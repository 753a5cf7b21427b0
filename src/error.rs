//! Error type shared by every fallible perceptron operation.

/// Errors reported synchronously by the perceptron engine.
///
/// All of these are caller-input errors: nothing is retried internally and
/// none of them leave the model in a partially updated state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerceptronError {
    #[error("invalid input length: expected {expected} features, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error("requested {requested} weights, but only {available} are available")]
    OutOfRange { requested: usize, available: usize },

    #[error("label must be 0 or 1, got {0}")]
    InvalidLabel(u8),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_values() {
        let err = PerceptronError::InvalidInputLength { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "invalid input length: expected 3 features, got 2");

        let err = PerceptronError::OutOfRange { requested: 5, available: 3 };
        assert_eq!(err.to_string(), "requested 5 weights, but only 3 are available");

        assert_eq!(PerceptronError::InvalidLabel(7).to_string(), "label must be 0 or 1, got 7");
    }
}
