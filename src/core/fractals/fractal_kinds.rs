use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// The region shown at startup.
    #[must_use]
    pub fn default_viewport(self) -> Viewport {
        let (x_min, x_max, y_min, y_max) = match self {
            Self::Mandelbrot => (-2.5, 1.5, -2.0, 2.0),
            Self::Julia => (-2.0, 2.0, -2.0, 2.0),
        };

        Viewport::new(x_min, x_max, y_min, y_max).expect("default fractal region is valid")
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
