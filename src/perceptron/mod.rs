//! Single-layer perceptron binary classifier.
//!
//! A [`Perceptron`] owns a [`WeightVector`] of N feature weights plus one
//! bias weight, and an [`ExampleStore`] holding the training set. Training is
//! online: each example is evaluated with the current weights and the weights
//! are corrected immediately, before the next example is visited.

pub mod example_store;
pub mod weights;

pub use example_store::ExampleStore;
pub use weights::WeightVector;

use crate::common_types::{Scalar, label_as_scalar};
use crate::config::PerceptronConfig;
use crate::error::{PerceptronError, Result};
use num_traits::NumCast;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};
use tracing::{debug, trace, warn};

/// Outcome of [`Perceptron::train_until_converged`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReport<F> {
    /// Number of epochs actually run.
    pub epochs: usize,
    /// Accuracy reported by the last epoch.
    pub accuracy: F,
    /// True if the last epoch classified every example correctly.
    pub converged: bool,
}

#[derive(Debug, Clone)]
pub struct Perceptron<F = f32> {
    input_length: usize,
    learning_rate: F,
    weights: WeightVector<F>,
    examples: ExampleStore<F>,
}

impl<F: Scalar> Perceptron<F> {
    /// Creates a perceptron whose weights are drawn from system entropy.
    pub fn new(input_length: usize, learning_rate: F) -> Result<Self> {
        Self::with_rng(input_length, learning_rate, &mut thread_rng())
    }

    /// Creates a perceptron whose weights are drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        input_length: usize,
        learning_rate: F,
        rng: &mut R,
    ) -> Result<Self> {
        validate_params(input_length, learning_rate)?;
        let weights = WeightVector::init(input_length + 1, rng);
        debug!(input_length, learning_rate = ?learning_rate, "perceptron initialized");
        Ok(Self::assemble(input_length, learning_rate, weights))
    }

    pub fn from_config(config: &PerceptronConfig) -> Result<Self> {
        config.validate()?;
        let learning_rate = <F as NumCast>::from(config.learning_rate).ok_or_else(|| {
            PerceptronError::InvalidConfig(format!(
                "learning_rate {} is not representable in the feature type",
                config.learning_rate
            ))
        })?;
        match config.seed {
            Some(seed) => Self::with_rng(
                config.input_length,
                learning_rate,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Self::new(config.input_length, learning_rate),
        }
    }

    /// Creates a perceptron around a known weight vector.
    ///
    /// `weights` holds the N feature weights followed by the bias weight, so
    /// it must have at least two entries.
    pub fn from_weights(weights: Vec<F>, learning_rate: F) -> Result<Self> {
        if weights.len() < 2 {
            return Err(PerceptronError::InvalidConfig(format!(
                "a weight vector needs at least one feature weight and a bias, got {} entries",
                weights.len()
            )));
        }
        let input_length = weights.len() - 1;
        validate_params(input_length, learning_rate)?;
        Ok(Self::assemble(
            input_length,
            learning_rate,
            WeightVector::from_vec(weights),
        ))
    }

    fn assemble(input_length: usize, learning_rate: F, weights: WeightVector<F>) -> Self {
        Perceptron {
            input_length,
            learning_rate,
            weights,
            examples: ExampleStore::new(input_length),
        }
    }

    pub fn input_length(&self) -> usize {
        self.input_length
    }

    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// Current weights: N feature weights followed by the bias weight.
    pub fn weights(&self) -> &[F] {
        self.weights.as_slice()
    }

    /// Stores a labeled example at the end of the training set.
    pub fn add_example(&mut self, features: &[F], label: u8) -> Result<()> {
        self.examples.add(features, label)
    }

    /// Discards every stored example. Weights are left as they are.
    pub fn clear_all_classes(&mut self) {
        debug!(discarded = self.examples.len(), "clearing all examples");
        self.examples.clear();
    }

    /// Returns 1 if the weighted sum (bias included) is strictly positive, else 0.
    pub fn classify(&self, features: &[F]) -> Result<u8> {
        if features.len() != self.input_length {
            return Err(PerceptronError::InvalidInputLength {
                expected: self.input_length,
                actual: features.len(),
            });
        }
        Ok(self.activate(features))
    }

    /// Classifies every row in order, stopping at the first malformed row.
    pub fn predict(&self, rows: &[Vec<F>]) -> Result<Vec<u8>> {
        rows.iter().map(|row| self.classify(row)).collect()
    }

    // Step activation over the first N inputs plus the bias weight.
    fn activate(&self, features: &[F]) -> u8 {
        if self.weights.dot(features) > F::zero() { 1 } else { 0 }
    }

    /// Borrows the first `count` weights, checking `count` against N+1 first.
    pub fn weight_prefix(&self, count: usize) -> Result<&[F]> {
        let available = self.weights.len();
        if count > available {
            return Err(PerceptronError::OutOfRange { requested: count, available });
        }
        Ok(&self.weights.as_slice()[..count])
    }

    /// Copies the first `count` weights into `out`.
    ///
    /// Fails with [`PerceptronError::OutOfRange`] if `count` exceeds N+1 or
    /// the length of `out`.
    pub fn get_weights(&self, out: &mut [F], count: usize) -> Result<()> {
        let prefix = self.weight_prefix(count)?;
        if count > out.len() {
            return Err(PerceptronError::OutOfRange {
                requested: count,
                available: out.len(),
            });
        }
        out[..count].copy_from_slice(prefix);
        Ok(())
    }

    /// Runs one online training epoch over the stored examples, in insertion order.
    ///
    /// Each example is classified with the current weights, the weights are
    /// immediately moved by `learning_rate * (label - guess) * input`, and
    /// only then is the next example visited.
    ///
    /// The returned accuracy is the fraction of examples whose prediction was
    /// correct *before* that example's own update. It is not an evaluation of
    /// the weights left behind by the epoch.
    pub fn train(&mut self) -> Result<F> {
        if self.examples.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        let mut correct = 0_usize;
        let mut augmented = Vec::with_capacity(self.input_length + 1);

        for example in self.examples.iter() {
            augmented.clear();
            augmented.extend_from_slice(&example.features);
            augmented.push(F::one()); // bias input

            let guess = self.activate(&augmented);
            if guess == example.label {
                correct += 1;
                continue;
            }

            let error = label_as_scalar::<F>(example.label) - label_as_scalar::<F>(guess);
            trace!(label = example.label, guess, error = ?error, "updating weights");
            self.weights.update(self.learning_rate, error, &augmented);
        }

        let accuracy = accuracy_ratio::<F>(correct, self.examples.len());
        debug!(examples = self.examples.len(), accuracy = ?accuracy, "epoch complete");
        Ok(accuracy)
    }

    /// Calls [`train`](Self::train) until an epoch reaches accuracy 1.0 or
    /// `max_epochs` epochs have run.
    pub fn train_until_converged(&mut self, max_epochs: usize) -> Result<TrainingReport<F>> {
        if max_epochs == 0 {
            return Err(PerceptronError::InvalidConfig(
                "max_epochs must be greater than 0".to_string(),
            ));
        }

        let mut accuracy = F::zero();
        for epoch in 1..=max_epochs {
            accuracy = self.train()?;
            if accuracy == F::one() {
                debug!(epochs = epoch, "training converged");
                return Ok(TrainingReport { epochs: epoch, accuracy, converged: true });
            }
        }

        warn!(max_epochs, accuracy = ?accuracy, "training stopped before convergence");
        Ok(TrainingReport { epochs: max_epochs, accuracy, converged: false })
    }
}

/// `correct / total`, with any imperfect epoch kept strictly below 1.
///
/// Counting stays in `usize`; only the final ratio is converted, and it is
/// clamped so rounding in a narrow float type cannot report a perfect epoch.
fn accuracy_ratio<F: Scalar>(correct: usize, total: usize) -> F {
    if correct == total {
        return F::one();
    }
    let ratio = <F as NumCast>::from(correct as f64 / total as f64).unwrap_or_else(F::zero);
    let below_one = F::one() - F::epsilon() / (F::one() + F::one());
    ratio.min(below_one)
}

fn validate_params<F: Scalar>(input_length: usize, learning_rate: F) -> Result<()> {
    let rate = learning_rate.to_f64().unwrap_or(f64::NAN);
    PerceptronConfig::new(input_length, rate).validate()
}
