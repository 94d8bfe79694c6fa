use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::selection_rect::PixelSquare;
use std::error::Error;

/// Somewhere a rendered frame can be shown.
pub trait DisplaySurface {
    type Error: Error + Send + Sync + 'static;

    /// Shows `frame`, with the live selection square drawn on top when
    /// `overlay` is set.
    fn present(&mut self, frame: &PixelBuffer, overlay: Option<PixelSquare>) -> Result<(), Self::Error>;
}
