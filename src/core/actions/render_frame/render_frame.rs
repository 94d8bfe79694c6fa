use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::polynomial_palette::PolynomialPalette;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    Config(#[from] RenderConfigError),
    #[error("mandelbrot setup failed: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("julia setup failed: {0}")]
    Julia(#[from] JuliaError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

fn render_with<Alg: FractalAlgorithm>(
    viewport: &Viewport,
    config: &RenderConfig,
    algorithm: &Alg,
) -> Result<PixelBuffer, RenderError> {
    let start = Instant::now();
    let iterations = generate_fractal(viewport, config.width(), config.height(), algorithm);
    let palette = PolynomialPalette::new(algorithm.max_iterations(), config.in_set_rule());

    let frame = generate_pixel_buffer(iterations, &palette, config.width(), config.height())?;

    tracing::debug!(
        fractal = %config.set_kind(),
        palette = palette.display_name(),
        in_set_rule = %config.in_set_rule(),
        width = config.width(),
        height = config.height(),
        max_iter = config.max_iter(),
        duration_ms = start.elapsed().as_millis() as u64,
        "rendered frame"
    );

    Ok(frame)
}

/// Renders a complete frame for `viewport`.
///
/// Pure function of its inputs: identical arguments produce identical
/// buffers, and every call allocates a fresh buffer.
pub fn render_frame(viewport: &Viewport, config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    match config.set_kind() {
        FractalKind::Mandelbrot => {
            let algorithm = MandelbrotAlgorithm::new(config.max_iter())?;
            render_with(viewport, config, &algorithm)
        }
        FractalKind::Julia => {
            let algorithm = JuliaAlgorithm::new(config.julia_seed(), config.max_iter())?;
            render_with(viewport, config, &algorithm)
        }
    }
}
