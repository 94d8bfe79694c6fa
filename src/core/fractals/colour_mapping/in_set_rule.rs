/// Decides which iteration counts are drawn as members of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InSetRule {
    /// Anything at or above 90% of the budget is black.
    #[default]
    NearSaturation,
    /// Only orbits that used the whole budget are black.
    Exact,
}

impl InSetRule {
    pub const ALL: &'static [Self] = &[Self::NearSaturation, Self::Exact];

    pub const NEAR_SATURATION_RATIO: f64 = 0.9;

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NearSaturation => "Near saturation",
            Self::Exact => "Exact",
        }
    }
}

impl std::fmt::Display for InSetRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
