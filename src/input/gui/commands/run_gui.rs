use crate::config::ExplorerConfig;
use crate::controllers::interactive::app_state::StepOutcome;
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::EventTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub const WINDOW_TITLE: &str = "Fractal Zoom";

/// Opens the explorer window and runs until it is closed.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let mut state = self.config.initial_state()?;
        let render_config = *state.config();

        tracing::info!(
            fractal = %render_config.set_kind(),
            width = render_config.width(),
            height = render_config.height(),
            max_iter = render_config.max_iter(),
            in_set_rule = %render_config.in_set_rule(),
            growth_factor = self.config.growth_factor,
            history_limit = self.config.history_limit,
            "starting explorer"
        );

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(
                    render_config.width(),
                    render_config.height(),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut presenter =
            PixelsPresenter::new(window, render_config.width(), render_config.height())?;
        let mut translator = EventTranslator::default();
        let mut failure: Option<GuiError> = None;

        state.render()?;
        window.request_redraw();

        event_loop.run(|event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };

            if window_id != window.id() {
                return;
            }

            if let WindowEvent::RedrawRequested = event {
                if let Some(frame) = state.frame() {
                    if let Err(err) = presenter.present(frame, state.overlay()) {
                        failure = Some(err.into());
                        elwt.exit();
                    }
                }

                return;
            }

            let Some(input) = translator.translate(&event, |position| {
                presenter.cursor_to_pixel(position)
            }) else {
                return;
            };

            match state.step(input) {
                Ok(StepOutcome::Unchanged) => {}
                Ok(StepOutcome::Present) => window.request_redraw(),
                Ok(StepOutcome::Exit) => elwt.exit(),
                Err(err) => {
                    failure = Some(err.into());
                    elwt.exit();
                }
            }
        })?;

        tracing::info!(depth = state.controller().depth(), "explorer closed");

        failure.map_or(Ok(()), Err)
    }
}
