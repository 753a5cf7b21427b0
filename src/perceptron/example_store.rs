//! Ordered, append-only training set.
//!
//! Insertion order is significant: it is the order in which online training
//! visits examples, and therefore the order in which weights are updated.

use crate::common_types::Example;
use crate::error::{PerceptronError, Result};

#[derive(Debug, Clone)]
pub struct ExampleStore<F> {
    input_length: usize,
    examples: Vec<Example<F>>,
}

impl<F: Copy> ExampleStore<F> {
    pub fn new(input_length: usize) -> Self {
        ExampleStore {
            input_length,
            examples: Vec::new(),
        }
    }

    /// Appends a copy of `features` with its label.
    ///
    /// Fails without touching the store if the feature vector does not have
    /// exactly `input_length` entries or the label is not 0 or 1.
    pub fn add(&mut self, features: &[F], label: u8) -> Result<()> {
        if features.len() != self.input_length {
            return Err(PerceptronError::InvalidInputLength {
                expected: self.input_length,
                actual: features.len(),
            });
        }
        if label > 1 {
            return Err(PerceptronError::InvalidLabel(label));
        }
        self.examples.push(Example::new(features.to_vec(), label));
        Ok(())
    }

    /// Iterates the stored examples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Example<F>> {
        self.examples.iter()
    }

    /// Drops every example and releases the backing storage.
    pub fn clear(&mut self) {
        self.examples = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn input_length(&self) -> usize {
        self.input_length
    }
}

impl<'a, F> IntoIterator for &'a ExampleStore<F> {
    type Item = &'a Example<F>;
    type IntoIter = std::slice::Iter<'a, Example<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
