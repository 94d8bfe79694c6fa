use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be a positive finite number, got {0}")]
    InvalidMaxIterations(f64),
}
