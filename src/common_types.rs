//! This module contains the data structures shared by the perceptron components.

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;
use std::iter::Sum;

/// Scalar type usable as a feature value and weight.
///
/// Blanket-implemented, so `f32` and `f64` both qualify.
pub trait Scalar: Float + SampleUniform + Debug + Sum {}

impl<T> Scalar for T where T: Float + SampleUniform + Debug + Sum {}

/// A single labeled training example.
///
/// - `F`: The type of the features (e.g., `f32`, `f64`).
/// - `label`: The binary class, always 0 or 1 once stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example<F> {
    pub features: Vec<F>,
    pub label: u8,
}

impl<F> Example<F> {
    pub fn new(features: Vec<F>, label: u8) -> Self {
        Example { features, label }
    }
}

/// Converts a validated binary label into the scalar domain used by the error term.
pub(crate) fn label_as_scalar<F: Float>(label: u8) -> F {
    if label == 0 { F::zero() } else { F::one() }
}
