use crate::adapters::pixel_format::{PixelFormatError, blit_frame, draw_square_outline};
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::selection_rect::PixelSquare;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

pub const OVERLAY_COLOUR: Colour = Colour::WHITE;

#[derive(Debug, Error)]
pub enum PixelsPresenterError {
    #[error(transparent)]
    Format(#[from] PixelFormatError),
    #[error("pixels render failed: {0}")]
    Render(#[from] pixels::Error),
}

/// Shows frames in a fixed-size window through a `pixels` RGBA framebuffer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    /// `width` x `height` is the framebuffer size; the window surface may
    /// differ and is scaled.
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Maps a window cursor position to framebuffer pixel coordinates.
    ///
    /// Positions outside the framebuffer are kept so drags can leave the
    /// window.
    #[must_use]
    pub fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        };

        Point {
            x: x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            y: y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }
}

impl DisplaySurface for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(
        &mut self,
        frame: &PixelBuffer,
        overlay: Option<PixelSquare>,
    ) -> Result<(), Self::Error> {
        let target = self.pixels.frame_mut();

        blit_frame(frame, target)?;

        if let Some(square) = overlay {
            draw_square_outline(target, self.width, self.height, square, OVERLAY_COLOUR);
        }

        self.pixels.render()?;

        Ok(())
    }
}
