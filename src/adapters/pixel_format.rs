//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::selection_rect::PixelSquare;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgba target holds {actual} bytes, expected {expected}")]
    TargetSizeMismatch { expected: usize, actual: usize },
}

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let expected = (src.len() / 3) * 4;

    if src.len() % 3 != 0 || dst.len() != expected {
        return Err(PixelFormatError::TargetSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

/// Copies a rendered frame into an RGBA surface of the same dimensions.
pub fn blit_frame(frame: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    copy_rgb_to_rgba(frame.buffer(), dst)
}

/// Draws the one-pixel border of `square` into an RGBA surface.
///
/// The square covers columns `origin.x .. origin.x + size` and the same
/// rows from `origin.y`. Parts falling outside the surface are clipped.
pub fn draw_square_outline(
    dst: &mut [u8],
    width: u32,
    height: u32,
    square: PixelSquare,
    colour: Colour,
) {
    if square.size <= 0 {
        return;
    }

    let left = i64::from(square.origin.x);
    let top = i64::from(square.origin.y);
    let right = left + i64::from(square.size) - 1;
    let bottom = top + i64::from(square.size) - 1;

    let mut plot = |x: i64, y: i64| {
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return;
        }

        let offset = ((y * i64::from(width) + x) * 4) as usize;

        if let Some(pixel) = dst.get_mut(offset..offset + 4) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, u8::MAX]);
        }
    };

    for x in left..=right {
        plot(x, top);
        plot(x, bottom);
    }

    for y in top..=bottom {
        plot(left, y);
        plot(right, y);
    }
}
