//! Command-line configuration for the explorer.

use crate::controllers::interactive::app_state::AppState;
use crate::controllers::interactive::history::budget_policy::{
    DEFAULT_GROWTH_FACTOR, GrowthFactorPolicy,
};
use crate::controllers::interactive::history::viewport_history::{
    DEFAULT_HISTORY_CAPACITY, ViewportHistory,
};
use crate::controllers::interactive::viewport_controller::ViewportController;
use crate::core::data::complex::Complex;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::fractals::colour_mapping::in_set_rule::InSetRule;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_SEED;
use clap::Parser;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 980;
pub const DEFAULT_MAX_ITER: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Render(#[from] RenderConfigError),
    #[error("julia seed must be finite, got {real} + {imag}i")]
    InvalidJuliaSeed { real: f64, imag: f64 },
    #[error("growth factor must be a finite number of at least 1, got {0}")]
    InvalidGrowthFactor(f64),
    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,
}

/// Interactive escape-time fractal zoom explorer
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fractal_zoom")]
#[command(about = "Drag a square to zoom in, press Enter to go back", long_about = None)]
pub struct ExplorerConfig {
    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration budget of the startup view
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    pub max_iter: f64,

    /// Fractal to explore
    #[arg(long, value_enum, default_value_t = FractalKind::Mandelbrot)]
    pub fractal: FractalKind,

    /// Real part of the Julia seed
    #[arg(long, default_value_t = DEFAULT_JULIA_SEED.real, allow_negative_numbers = true)]
    pub julia_re: f64,

    /// Imaginary part of the Julia seed
    #[arg(long, default_value_t = DEFAULT_JULIA_SEED.imag, allow_negative_numbers = true)]
    pub julia_im: f64,

    /// Which points are painted black
    #[arg(long, value_enum, default_value_t = InSetRule::NearSaturation)]
    pub in_set_rule: InSetRule,

    /// Iteration budget multiplier per zoom-in
    #[arg(long, default_value_t = DEFAULT_GROWTH_FACTOR)]
    pub growth_factor: f64,

    /// Number of views remembered for going back
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    pub history_limit: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iter: DEFAULT_MAX_ITER,
            fractal: FractalKind::default(),
            julia_re: DEFAULT_JULIA_SEED.real,
            julia_im: DEFAULT_JULIA_SEED.imag,
            in_set_rule: InSetRule::default(),
            growth_factor: DEFAULT_GROWTH_FACTOR,
            history_limit: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl ExplorerConfig {
    pub fn julia_seed(&self) -> Result<Complex, ConfigError> {
        if !self.julia_re.is_finite() || !self.julia_im.is_finite() {
            return Err(ConfigError::InvalidJuliaSeed {
                real: self.julia_re,
                imag: self.julia_im,
            });
        }

        Ok(Complex::new(self.julia_re, self.julia_im))
    }

    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        Ok(
            RenderConfig::new(self.width, self.height, self.max_iter, self.fractal)?
                .with_julia_seed(self.julia_seed()?)
                .with_in_set_rule(self.in_set_rule),
        )
    }

    pub fn budget_policy(&self) -> Result<GrowthFactorPolicy, ConfigError> {
        GrowthFactorPolicy::new(self.growth_factor)
            .ok_or(ConfigError::InvalidGrowthFactor(self.growth_factor))
    }

    pub fn history(&self) -> Result<ViewportHistory, ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }

        Ok(ViewportHistory::with_capacity(self.history_limit))
    }

    /// Builds the startup application state: the fractal's default region
    /// with an empty history.
    pub fn initial_state(&self) -> Result<AppState, ConfigError> {
        let config = self.render_config()?;
        let controller = ViewportController::with_policy(
            self.fractal.default_viewport(),
            config.max_iter(),
            self.history()?,
            self.budget_policy()?,
        );

        Ok(AppState::new(config, controller))
    }
}
