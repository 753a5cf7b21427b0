//! Minimal binary classifier: a single-layer perceptron that learns a linear
//! decision boundary over fixed-length feature vectors.

pub mod common_types;
pub mod config;
pub mod error;
pub mod perceptron;

pub use common_types::{Example, Scalar};
pub use config::PerceptronConfig;
pub use error::{PerceptronError, Result};
pub use perceptron::{ExampleStore, Perceptron, TrainingReport, WeightVector};

#[cfg(feature = "python")]
mod python {
    use super::{Perceptron, PerceptronConfig, PerceptronError};
    use pyo3::exceptions::{PyIndexError, PyValueError};
    use pyo3::prelude::*;

    fn to_py_err(err: PerceptronError) -> PyErr {
        match err {
            PerceptronError::OutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }

    /// Python-facing perceptron over `f32` features.
    #[pyclass(name = "Perceptron")]
    struct PyPerceptron {
        inner: Perceptron<f32>,
    }

    #[pymethods]
    impl PyPerceptron {
        #[new]
        #[pyo3(signature = (input_length, learning_rate, seed = None))]
        fn new(input_length: usize, learning_rate: f64, seed: Option<u64>) -> PyResult<Self> {
            let mut config = PerceptronConfig::new(input_length, learning_rate);
            config.seed = seed;
            let inner = Perceptron::from_config(&config).map_err(to_py_err)?;
            Ok(PyPerceptron { inner })
        }

        fn add_example(&mut self, features: Vec<f32>, label: u8) -> PyResult<()> {
            self.inner.add_example(&features, label).map_err(to_py_err)
        }

        fn classify(&self, features: Vec<f32>) -> PyResult<u8> {
            self.inner.classify(&features).map_err(to_py_err)
        }

        fn train(&mut self) -> PyResult<f32> {
            self.inner.train().map_err(to_py_err)
        }

        #[pyo3(signature = (count = None))]
        fn get_weights(&self, count: Option<usize>) -> PyResult<Vec<f32>> {
            let count = count.unwrap_or(self.inner.input_length() + 1);
            let prefix = self.inner.weight_prefix(count).map_err(to_py_err)?;
            Ok(prefix.to_vec())
        }

        fn clear_all_classes(&mut self) {
            self.inner.clear_all_classes();
        }

        #[getter]
        fn example_count(&self) -> usize {
            self.inner.example_count()
        }
    }

    /// Python module exposing the perceptron. The name matches `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn linear_perceptron(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<PyPerceptron>()?;
        Ok(())
    }
}
