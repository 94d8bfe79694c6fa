use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::viewport::Viewport;

/// Evaluates `algorithm` for every pixel of a `width x height` screen, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    viewport: &Viewport,
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Vec<f64> {
    (0..height)
        .flat_map(|j| (0..width).map(move |i| (i, j)))
        .map(|(i, j)| {
            let point = viewport.pixel_to_complex(f64::from(i), f64::from(j), width, height);
            algorithm.compute(point)
        })
        .collect()
}
