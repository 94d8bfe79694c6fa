use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must satisfy min < max: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// The rectangle of the complex plane mapped onto the pixel buffer.
///
/// Pixel `(i, j)` of a `width x height` screen maps to
/// `x_min + (x_max - x_min) * i / width` on the real axis and
/// `y_min + (y_max - y_min) * j / height` on the imaginary axis, so row 0
/// sits at `y_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        // Negated comparisons so NaN is rejected too.
        if !finite || !(x_min < x_max) || !(y_min < y_max) {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Maps a (possibly fractional or out-of-screen) pixel position into the
    /// complex plane.
    #[must_use]
    pub fn pixel_to_complex(&self, i: f64, j: f64, screen_width: u32, screen_height: u32) -> Complex {
        Complex {
            real: self.x_min + self.width() * i / f64::from(screen_width),
            imag: self.y_min + self.height() * j / f64::from(screen_height),
        }
    }
}
