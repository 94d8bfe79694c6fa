pub const DEFAULT_GROWTH_FACTOR: f64 = 1.2;

/// How the iteration budget follows the zoom level.
pub trait IterationBudgetPolicy {
    /// Budget after zooming in from a view rendered with `max_iter`.
    fn zoomed_in(&self, max_iter: f64) -> f64;

    /// Budget after zooming back out. `recorded` is the budget stored with
    /// the restored view.
    fn zoomed_out(&self, current: f64, recorded: f64) -> f64;
}

/// Multiplies the budget by `factor` per zoom-in and undoes it per zoom-out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GrowthFactorPolicy {
    factor: f64,
}

impl Default for GrowthFactorPolicy {
    fn default() -> Self {
        Self {
            factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthFactorPolicy {
    /// Returns `None` unless `factor` is finite and at least 1.
    #[must_use]
    pub fn new(factor: f64) -> Option<Self> {
        (factor.is_finite() && factor >= 1.0).then_some(Self { factor })
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl IterationBudgetPolicy for GrowthFactorPolicy {
    fn zoomed_in(&self, max_iter: f64) -> f64 {
        max_iter * self.factor
    }

    // `recorded` is `current / factor` before any rounding.
    fn zoomed_out(&self, _current: f64, recorded: f64) -> f64 {
        recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factor() {
        assert_eq!(GrowthFactorPolicy::default().factor(), 1.2);
    }

    #[test]
    fn test_zoomed_in_scales_budget() {
        let policy = GrowthFactorPolicy::default();

        assert_eq!(policy.zoomed_in(100.0), 120.0);
    }

    #[test]
    fn test_zoomed_out_is_exact_inverse() {
        let policy = GrowthFactorPolicy::default();
        let mut budget = 60.0;
        let mut recorded = Vec::new();

        for _ in 0..25 {
            recorded.push(budget);
            budget = policy.zoomed_in(budget);
        }

        while let Some(previous) = recorded.pop() {
            budget = policy.zoomed_out(budget, previous);
        }

        assert_eq!(budget, 60.0);
    }

    #[test]
    fn test_invalid_factors_are_rejected() {
        assert_eq!(GrowthFactorPolicy::new(0.5), None);
        assert_eq!(GrowthFactorPolicy::new(f64::NAN), None);
        assert_eq!(GrowthFactorPolicy::new(1.0).map(|p| p.factor()), Some(1.0));
    }
}
