use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::julia;
use crate::core::fractals::julia::errors::JuliaError;

pub const DEFAULT_JULIA_SEED: Complex = Complex {
    real: -0.7,
    imag: 0.27015,
};

/// Julia membership for a fixed seed: the pixel's point is the orbit start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    seed: Complex,
    max_iterations: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> f64 {
        julia(point, self.seed, self.max_iterations)
    }

    fn max_iterations(&self) -> f64 {
        self.max_iterations
    }
}

impl JuliaAlgorithm {
    pub fn new(seed: Complex, max_iterations: f64) -> Result<Self, JuliaError> {
        if !max_iterations.is_finite() || max_iterations <= 0.0 {
            return Err(JuliaError::InvalidMaxIterations(max_iterations));
        }

        if !seed.real.is_finite() || !seed.imag.is_finite() {
            return Err(JuliaError::NonFiniteSeed {
                real: seed.real,
                imag: seed.imag,
            });
        }

        Ok(Self {
            seed,
            max_iterations,
        })
    }
}
