use crate::core::data::complex::Complex;
use crate::core::fractals::colour_mapping::in_set_rule::InSetRule;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_SEED;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderConfigError {
    #[error("render size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("maximum iterations must be a positive finite number, got {0}")]
    InvalidMaxIterations(f64),
}

/// Everything a render pass needs besides the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    max_iter: f64,
    set_kind: FractalKind,
    julia_seed: Complex,
    in_set_rule: InSetRule,
}

fn validate_max_iter(max_iter: f64) -> Result<(), RenderConfigError> {
    if !max_iter.is_finite() || max_iter <= 0.0 {
        return Err(RenderConfigError::InvalidMaxIterations(max_iter));
    }

    Ok(())
}

impl RenderConfig {
    pub fn new(
        width: u32,
        height: u32,
        max_iter: f64,
        set_kind: FractalKind,
    ) -> Result<Self, RenderConfigError> {
        if width == 0 || height == 0 {
            return Err(RenderConfigError::InvalidSize { width, height });
        }

        validate_max_iter(max_iter)?;

        Ok(Self {
            width,
            height,
            max_iter,
            set_kind,
            julia_seed: DEFAULT_JULIA_SEED,
            in_set_rule: InSetRule::default(),
        })
    }

    #[must_use]
    pub fn with_julia_seed(self, julia_seed: Complex) -> Self {
        Self { julia_seed, ..self }
    }

    #[must_use]
    pub fn with_in_set_rule(self, in_set_rule: InSetRule) -> Self {
        Self {
            in_set_rule,
            ..self
        }
    }

    pub fn with_max_iter(self, max_iter: f64) -> Result<Self, RenderConfigError> {
        validate_max_iter(max_iter)?;

        Ok(Self { max_iter, ..self })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iter(&self) -> f64 {
        self.max_iter
    }

    #[must_use]
    pub fn set_kind(&self) -> FractalKind {
        self.set_kind
    }

    #[must_use]
    pub fn julia_seed(&self) -> Complex {
        self.julia_seed
    }

    #[must_use]
    pub fn in_set_rule(&self) -> InSetRule {
        self.in_set_rule
    }
}
