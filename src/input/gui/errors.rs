use crate::config::ConfigError;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::presenters::pixels::presenter::PixelsPresenterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create pixels surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Present(#[from] PixelsPresenterError),
}
