//! Escape-time iteration shared by the Mandelbrot and Julia algorithms.

use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Whole number of iterations a (possibly fractional) budget allows.
#[must_use]
pub fn iteration_cap(max_iterations: f64) -> f64 {
    max_iterations.floor()
}

/// Applies `z = z * z + c` from `start_z` until `|z|` exceeds the escape
/// radius or the iteration cap is reached, returning the iteration count.
///
/// A magnitude of exactly 2 keeps iterating. A return value equal to
/// [`iteration_cap`] means the orbit never escaped.
#[must_use]
pub fn iterate(start_z: Complex, c: Complex, max_iterations: f64) -> f64 {
    let cap = iteration_cap(max_iterations);
    let mut z = start_z;
    let mut n = 0.0;

    while z.magnitude() <= ESCAPE_RADIUS && n < cap {
        z = z * z + c;
        n += 1.0;
    }

    n
}

#[must_use]
pub fn mandelbrot(point: Complex, max_iterations: f64) -> f64 {
    iterate(Complex::ZERO, point, max_iterations)
}

#[must_use]
pub fn julia(point: Complex, seed: Complex, max_iterations: f64) -> f64 {
    iterate(point, seed, max_iterations)
}
