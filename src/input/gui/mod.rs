//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer rendering.

pub mod commands;
pub mod errors;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
