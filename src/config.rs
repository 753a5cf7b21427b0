//! Construction parameters for a [`Perceptron`](crate::Perceptron).

use crate::error::{PerceptronError, Result};

/// Parameters fixed at construction time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptronConfig {
    /// Number of features per example, excluding the implicit bias input.
    pub input_length: usize,
    /// Step size of the perceptron learning rule.
    pub learning_rate: f64,
    /// Seed for weight initialization. `None` draws from system entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl PerceptronConfig {
    pub fn new(input_length: usize, learning_rate: f64) -> Self {
        PerceptronConfig {
            input_length,
            learning_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_length == 0 {
            return Err(PerceptronError::InvalidConfig(
                "input_length must be greater than 0".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning_rate must be finite and strictly positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
