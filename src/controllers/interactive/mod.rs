//! Interactive zoom explorer.
//!
//! This module turns input events into viewport changes and frames for a
//! display surface.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values translated from the windowing backend
//! - **Output**: `DisplaySurface` trait for showing frames and the selection overlay
//! - **Core**: Uses `render_frame` from `core/` for actual computation

pub mod app_state;
pub mod events;
pub mod history;
pub mod interaction;
pub mod ports;
pub mod session;
pub mod viewport_controller;

pub use app_state::{AppState, StepOutcome};
pub use events::input::{InputEvent, Key, PointerButton};
pub use ports::display_surface::DisplaySurface;
pub use session::{SessionError, SessionSummary, run_session};
