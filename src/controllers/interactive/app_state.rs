use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::history::budget_policy::{
    GrowthFactorPolicy, IterationBudgetPolicy,
};
use crate::controllers::interactive::interaction::{Command, InteractionStateMachine};
use crate::controllers::interactive::viewport_controller::ViewportController;
use crate::core::actions::render_frame::render_frame::{RenderError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::selection_rect::PixelSquare;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing visible changed.
    Unchanged,
    /// The frame or the overlay changed and should be presented.
    Present,
    Exit,
}

/// The whole explorer state, owned by the event loop.
#[derive(Debug)]
pub struct AppState<P: IterationBudgetPolicy = GrowthFactorPolicy> {
    config: RenderConfig,
    controller: ViewportController<P>,
    interaction: InteractionStateMachine,
    frame: Option<PixelBuffer>,
    running: bool,
}

impl<P: IterationBudgetPolicy> AppState<P> {
    /// `config` supplies the screen size, the fractal and the colouring; the
    /// iteration budget is taken from `controller`.
    #[must_use]
    pub fn new(config: RenderConfig, controller: ViewportController<P>) -> Self {
        Self {
            config,
            controller,
            interaction: InteractionStateMachine::default(),
            frame: None,
            running: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController<P> {
        &self.controller
    }

    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<PixelSquare> {
        self.interaction.overlay()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-renders the current viewport with the current budget.
    pub fn render(&mut self) -> Result<&PixelBuffer, RenderError> {
        let config = self.config.with_max_iter(self.controller.max_iter())?;
        let frame = render_frame(&self.controller.viewport(), &config)?;

        Ok(&*self.frame.insert(frame))
    }

    pub fn step(&mut self, event: InputEvent) -> Result<StepOutcome, RenderError> {
        let had_overlay = self.overlay().is_some();

        let Some(command) = self.interaction.handle(event) else {
            return Ok(StepOutcome::Unchanged);
        };

        match command {
            Command::Preview => Ok(StepOutcome::Present),
            Command::Commit(selection) => {
                let zoomed = self.controller.push_and_zoom(
                    &selection,
                    self.config.width(),
                    self.config.height(),
                );

                if zoomed.is_some() {
                    self.render()?;
                }

                // The overlay disappears even when the selection was ignored.
                Ok(StepOutcome::Present)
            }
            Command::PopHistory => {
                if self.controller.pop_history().is_some() {
                    self.render()?;
                    return Ok(StepOutcome::Present);
                }

                if had_overlay {
                    Ok(StepOutcome::Present)
                } else {
                    Ok(StepOutcome::Unchanged)
                }
            }
            Command::Exit => {
                self.running = false;
                Ok(StepOutcome::Exit)
            }
        }
    }
}
