use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colour_mapping::in_set_rule::InSetRule;
use crate::core::fractals::escape_time::iteration_cap;

fn channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

fn is_in_set(iterations: f64, max_iterations: f64, rule: InSetRule) -> bool {
    match rule {
        InSetRule::NearSaturation => {
            iterations >= InSetRule::NEAR_SATURATION_RATIO * max_iterations
        }
        InSetRule::Exact => iterations >= iteration_cap(max_iterations),
    }
}

/// Colours an iteration count with the smooth polynomial palette
/// `r = 9(1-t)t³`, `g = 15(1-t)²t²`, `b = 8.5(1-t)³t` where
/// `t = iterations / max_iterations`.
#[must_use]
pub fn colour_of(iterations: f64, max_iterations: f64, rule: InSetRule) -> Colour {
    if is_in_set(iterations, max_iterations, rule) {
        return Colour::BLACK;
    }

    let t = iterations / max_iterations;
    let s = 1.0 - t;

    Colour {
        r: channel(9.0 * s * t * t * t),
        g: channel(15.0 * s * s * t * t),
        b: channel(8.5 * s * s * s * t),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialPalette {
    max_iterations: f64,
    rule: InSetRule,
}

impl ColourMap for PolynomialPalette {
    fn map(&self, iterations: f64) -> Colour {
        colour_of(iterations, self.max_iterations, self.rule)
    }

    fn display_name(&self) -> &str {
        "Polynomial"
    }
}

impl PolynomialPalette {
    #[must_use]
    pub fn new(max_iterations: f64, rule: InSetRule) -> Self {
        Self {
            max_iterations,
            rule,
        }
    }
}
