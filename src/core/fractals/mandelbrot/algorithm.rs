use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::mandelbrot;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> f64 {
        mandelbrot(point, self.max_iterations)
    }

    fn max_iterations(&self) -> f64 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: f64) -> Result<Self, MandelbrotError> {
        if !max_iterations.is_finite() || max_iterations <= 0.0 {
            return Err(MandelbrotError::InvalidMaxIterations(max_iterations));
        }

        Ok(Self { max_iterations })
    }
}
