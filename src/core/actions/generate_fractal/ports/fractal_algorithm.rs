use crate::core::data::complex::Complex;

/// Escape-time evaluation of a single point of the complex plane.
pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> f64;

    fn max_iterations(&self) -> f64;
}
