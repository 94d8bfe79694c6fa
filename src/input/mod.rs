//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from windowing systems
//! and translate them into explorer input events.

#[cfg(feature = "gui")]
pub mod gui;
