pub mod colour_mapping;
pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
