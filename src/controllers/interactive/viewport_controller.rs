use crate::controllers::interactive::history::budget_policy::{
    GrowthFactorPolicy, IterationBudgetPolicy,
};
use crate::controllers::interactive::history::viewport_history::{HistoryEntry, ViewportHistory};
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::viewport::Viewport;

/// Converts a screen-space selection into the viewport it covers.
///
/// The drag is clamped to a square (see [`SelectionRect::to_square`]) and
/// its corners are mapped through `current`. Degenerate selections give
/// `None`.
#[must_use]
pub fn zoom_to(
    selection: &SelectionRect,
    screen_width: u32,
    screen_height: u32,
    current: &Viewport,
) -> Option<Viewport> {
    let square = selection.to_square()?;
    let left = f64::from(square.origin.x);
    let top = f64::from(square.origin.y);
    let size = f64::from(square.size);

    let min = current.pixel_to_complex(left, top, screen_width, screen_height);
    let max = current.pixel_to_complex(left + size, top + size, screen_width, screen_height);

    // Deep zooms can collapse the span below f64 resolution.
    Viewport::new(min.real, max.real, min.imag, max.imag).ok()
}

/// Owns the current view, its iteration budget and the zoom history.
#[derive(Debug, Clone)]
pub struct ViewportController<P: IterationBudgetPolicy = GrowthFactorPolicy> {
    viewport: Viewport,
    max_iter: f64,
    history: ViewportHistory,
    policy: P,
}

impl ViewportController<GrowthFactorPolicy> {
    #[must_use]
    pub fn new(viewport: Viewport, max_iter: f64) -> Self {
        Self::with_policy(
            viewport,
            max_iter,
            ViewportHistory::default(),
            GrowthFactorPolicy::default(),
        )
    }
}

impl<P: IterationBudgetPolicy> ViewportController<P> {
    #[must_use]
    pub fn with_policy(
        viewport: Viewport,
        max_iter: f64,
        history: ViewportHistory,
        policy: P,
    ) -> Self {
        Self {
            viewport,
            max_iter,
            history,
            policy,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iter(&self) -> f64 {
        self.max_iter
    }

    /// Number of views that can be returned to.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Zooms into `selection`, remembering the current view and budget.
    ///
    /// Returns the new viewport, or `None` (with no state change) for a
    /// degenerate selection or when the policy's next budget is not a
    /// positive finite number.
    pub fn push_and_zoom(
        &mut self,
        selection: &SelectionRect,
        screen_width: u32,
        screen_height: u32,
    ) -> Option<Viewport> {
        let Some(next) = zoom_to(selection, screen_width, screen_height, &self.viewport) else {
            tracing::warn!(
                start_x = selection.start.x,
                start_y = selection.start.y,
                end_x = selection.end.x,
                end_y = selection.end.y,
                "ignoring degenerate selection"
            );
            return None;
        };

        let next_max_iter = self.policy.zoomed_in(self.max_iter);

        if !next_max_iter.is_finite() || next_max_iter <= 0.0 {
            tracing::warn!(
                max_iter = self.max_iter,
                next_max_iter,
                "ignoring zoom with unusable iteration budget"
            );
            return None;
        }

        self.history.push(HistoryEntry {
            viewport: self.viewport,
            max_iter: self.max_iter,
        });

        self.viewport = next;
        self.max_iter = next_max_iter;

        tracing::debug!(
            depth = self.depth(),
            max_iter = self.max_iter,
            x_min = next.x_min(),
            x_max = next.x_max(),
            y_min = next.y_min(),
            y_max = next.y_max(),
            "zoomed in"
        );

        Some(next)
    }

    /// Returns to the previous view. Does nothing when the history is empty.
    pub fn pop_history(&mut self) -> Option<Viewport> {
        let entry = self.history.pop()?;

        self.viewport = entry.viewport;
        self.max_iter = self.policy.zoomed_out(self.max_iter, entry.max_iter);

        tracing::debug!(depth = self.depth(), max_iter = self.max_iter, "zoomed out");

        Some(entry.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    const WIDTH: u32 = 400;
    const HEIGHT: u32 = 400;

    fn drag(from: (i32, i32), to: (i32, i32)) -> SelectionRect {
        SelectionRect {
            start: Point { x: from.0, y: from.1 },
            end: Point { x: to.0, y: to.1 },
            active: true,
        }
    }

    fn startup_viewport() -> Viewport {
        Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_zoom_to_maps_square_corners_through_viewport() {
        let selection = drag((100, 100), (200, 150));
        let next = zoom_to(&selection, WIDTH, HEIGHT, &startup_viewport()).unwrap();

        // 50 px square at (100, 100) on a 4-wide plane over 400 px.
        assert_eq!(next.x_min(), -1.0);
        assert_eq!(next.x_max(), -0.5);
        assert_eq!(next.y_min(), -1.0);
        assert_eq!(next.y_max(), -0.5);
    }

    #[test]
    fn test_zoom_to_scales_axes_by_their_own_screen_extent() {
        let next = zoom_to(&drag((0, 0), (100, 100)), 400, 200, &startup_viewport()).unwrap();

        assert_eq!(next.width(), 1.0);
        assert_eq!(next.height(), 2.0);
    }

    #[test]
    fn test_zoom_to_backward_drag() {
        let selection = drag((200, 200), (100, 100));
        let next = zoom_to(&selection, WIDTH, HEIGHT, &startup_viewport()).unwrap();

        assert_eq!(next.x_min(), -1.0);
        assert_eq!(next.x_max(), 0.0);
        assert_eq!(next.y_min(), -1.0);
        assert_eq!(next.y_max(), 0.0);
    }

    #[test]
    fn test_zoom_to_degenerate_selection_is_none() {
        let viewport = startup_viewport();

        assert_eq!(zoom_to(&drag((10, 10), (10, 10)), WIDTH, HEIGHT, &viewport), None);
        assert_eq!(zoom_to(&drag((10, 10), (90, 10)), WIDTH, HEIGHT, &viewport), None);
    }

    #[test]
    fn test_push_and_zoom_records_history_and_grows_budget() {
        let mut controller = ViewportController::new(startup_viewport(), 100.0);

        let next = controller.push_and_zoom(&drag((100, 100), (200, 150)), WIDTH, HEIGHT);

        assert_eq!(next, Some(controller.viewport()));
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.max_iter(), 120.0);
    }

    #[test]
    fn test_degenerate_selection_changes_nothing() {
        let mut controller = ViewportController::new(startup_viewport(), 100.0);

        let next = controller.push_and_zoom(&drag((50, 50), (50, 50)), WIDTH, HEIGHT);

        assert_eq!(next, None);
        assert_eq!(controller.depth(), 0);
        assert_eq!(controller.viewport(), startup_viewport());
        assert_eq!(controller.max_iter(), 100.0);
    }

    #[test]
    fn test_push_then_pop_restores_viewport_and_budget_exactly() {
        let mut controller = ViewportController::new(startup_viewport(), 60.0);

        controller.push_and_zoom(&drag((13, 27), (311, 190)), WIDTH, HEIGHT);
        let restored = controller.pop_history();

        assert_eq!(restored, Some(startup_viewport()));
        assert_eq!(controller.viewport(), startup_viewport());
        assert_eq!(controller.max_iter(), 60.0);
        assert_eq!(controller.depth(), 0);
    }

    #[test]
    fn test_pop_on_empty_history_is_noop() {
        let mut controller = ViewportController::new(startup_viewport(), 60.0);

        assert_eq!(controller.pop_history(), None);
        assert_eq!(controller.viewport(), startup_viewport());
        assert_eq!(controller.max_iter(), 60.0);
    }

    #[test]
    fn test_n_commits_then_n_pops_returns_to_startup() {
        let mut controller = ViewportController::new(startup_viewport(), 60.0);
        let n = 8;

        for step in 0..n {
            let zoomed = controller.push_and_zoom(&drag((40, 60), (240, 300)), WIDTH, HEIGHT);
            assert!(zoomed.is_some());
            assert_eq!(controller.depth(), step + 1);
        }

        for _ in 0..n {
            assert!(controller.pop_history().is_some());
        }

        assert_eq!(controller.depth(), 0);
        assert_eq!(controller.viewport(), startup_viewport());
        assert_eq!(controller.max_iter(), 60.0);
        assert_eq!(controller.pop_history(), None);
    }

    #[test]
    fn test_bounded_history_forgets_oldest_view() {
        let mut controller = ViewportController::with_policy(
            startup_viewport(),
            60.0,
            ViewportHistory::with_capacity(2),
            GrowthFactorPolicy::default(),
        );

        for _ in 0..3 {
            controller.push_and_zoom(&drag((0, 0), (200, 200)), WIDTH, HEIGHT);
        }

        assert_eq!(controller.depth(), 2);
        controller.pop_history();
        controller.pop_history();

        assert_ne!(controller.viewport(), startup_viewport());
        assert_eq!(controller.pop_history(), None);
    }

    #[test]
    fn test_overflowing_budget_changes_nothing() {
        let policy = GrowthFactorPolicy::new(1e307).unwrap();
        let mut controller = ViewportController::with_policy(
            startup_viewport(),
            60.0,
            ViewportHistory::default(),
            policy,
        );

        let next = controller.push_and_zoom(&drag((0, 0), (16, 16)), WIDTH, HEIGHT);

        assert_eq!(next, None);
        assert_eq!(controller.depth(), 0);
        assert_eq!(controller.viewport(), startup_viewport());
        assert_eq!(controller.max_iter(), 60.0);
    }

    #[derive(Debug)]
    struct FixedBudgetPolicy {}

    impl IterationBudgetPolicy for FixedBudgetPolicy {
        fn zoomed_in(&self, max_iter: f64) -> f64 {
            max_iter
        }

        fn zoomed_out(&self, current: f64, _recorded: f64) -> f64 {
            current
        }
    }

    #[test]
    fn test_custom_policy_controls_budget() {
        let mut controller = ViewportController::with_policy(
            startup_viewport(),
            256.0,
            ViewportHistory::default(),
            FixedBudgetPolicy {},
        );

        controller.push_and_zoom(&drag((0, 0), (100, 100)), WIDTH, HEIGHT);
        assert_eq!(controller.max_iter(), 256.0);

        controller.pop_history();
        assert_eq!(controller.max_iter(), 256.0);
    }
}
