mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::{PixelFormatError, blit_frame, copy_rgb_to_rgba, draw_square_outline};
pub use config::{ConfigError, ExplorerConfig};
pub use controllers::interactive::history::budget_policy::{GrowthFactorPolicy, IterationBudgetPolicy};
pub use controllers::interactive::history::viewport_history::{HistoryEntry, ViewportHistory};
pub use controllers::interactive::interaction::{Command, InteractionState, InteractionStateMachine};
pub use controllers::interactive::viewport_controller::{ViewportController, zoom_to};
pub use controllers::interactive::{
    AppState, DisplaySurface, InputEvent, Key, PointerButton, SessionError, SessionSummary, StepOutcome,
    run_session,
};
pub use crate::core::actions::render_frame::render_frame::{RenderError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{RenderConfig, RenderConfigError};
pub use crate::core::data::selection_rect::{PixelSquare, SelectionRect};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::colour_mapping::in_set_rule::InSetRule;
pub use crate::core::fractals::colour_mapping::polynomial_palette::colour_of;
pub use crate::core::fractals::escape_time::{julia, mandelbrot};
pub use crate::core::fractals::fractal_kinds::FractalKind;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
