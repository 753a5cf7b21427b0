//! The learnable parameter vector: N feature weights followed by one bias weight.

use crate::common_types::Scalar;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector<F> {
    // Length is fixed at construction; the last slot is the bias weight.
    weights: Vec<F>,
}

impl<F: Scalar> WeightVector<F> {
    /// Draws `length` weights uniformly from [-1, 1).
    pub fn init<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let weights = (0..length)
            .map(|_| rng.gen_range(-F::one()..F::one()))
            .collect();
        WeightVector { weights }
    }

    pub(crate) fn from_vec(weights: Vec<F>) -> Self {
        WeightVector { weights }
    }

    /// Total length, bias slot included.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.weights
    }

    // None only for a zero-length vector, which has no bias slot to use.
    fn bias_index(&self) -> Option<usize> {
        self.weights.len().checked_sub(1)
    }

    fn debug_check_len(&self, feature_weights: usize, features: &[F]) {
        debug_assert!(
            features.len() == feature_weights || features.len() == feature_weights + 1,
            "expected {} or {} features, got {}",
            feature_weights,
            feature_weights + 1,
            features.len()
        );
    }

    /// Weighted sum of the first N `features` plus the bias weight times 1.
    ///
    /// `features` must be either the raw N-length input or the N+1-length
    /// augmented input; any trailing bias entry is ignored in favour of the
    /// implicit constant 1. Other lengths are a caller bug and trip a debug
    /// assertion. [`Perceptron::classify`](crate::Perceptron::classify) is the
    /// checked entry point.
    pub fn dot(&self, features: &[F]) -> F {
        let Some(bias) = self.bias_index() else {
            return F::zero();
        };
        self.debug_check_len(bias, features);
        let sum: F = features
            .iter()
            .zip(self.weights[..bias].iter())
            .map(|(&x, &w)| x * w)
            .sum();
        sum + self.weights[bias]
    }

    /// Applies `w[i] += learning_rate * error * features[i]` to every slot.
    ///
    /// The bias slot always uses an input of 1, whether or not `features`
    /// carries it explicitly. Accepted lengths are the same as for [`dot`](Self::dot).
    pub fn update(&mut self, learning_rate: F, error: F, features: &[F]) {
        let Some(bias) = self.bias_index() else {
            return;
        };
        self.debug_check_len(bias, features);
        let step = learning_rate * error;
        for (w, &x) in self.weights[..bias].iter_mut().zip(features.iter()) {
            *w = *w + step * x;
        }
        self.weights[bias] = self.weights[bias] + step;
    }
}
