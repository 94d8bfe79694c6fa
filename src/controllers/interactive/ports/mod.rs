//! Ports for the interactive controller.
//!
//! The controller only knows how to hand frames to a [`display_surface::DisplaySurface`];
//! windowing backends implement it.

pub mod display_surface;
