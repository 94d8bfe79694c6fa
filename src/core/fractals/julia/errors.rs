use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum JuliaError {
    #[error("maximum iterations must be a positive finite number, got {0}")]
    InvalidMaxIterations(f64),
    #[error("julia seed must be finite, got {real} + {imag}i")]
    NonFiniteSeed { real: f64, imag: f64 },
}
