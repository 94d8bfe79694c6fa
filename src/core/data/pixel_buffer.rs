use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("expected buffer size {expected} does not match buffer size {buffer_size}")]
    BoundsMismatch { expected: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = dimensions_to_buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height;

        if !inside {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 1 }).unwrap(),
            Colour { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(3, 3);
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), red);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(3, 3);
        let blue = Colour { r: 0, g: 0, b: 255 };

        buffer.set_pixel(Point { x: 2, y: 2 }, blue).unwrap();

        assert_eq!(&buffer.buffer()[24..27], &[0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);

        for pixel in [
            Point { x: 3, y: 1 },
            Point { x: 1, y: 3 },
            Point { x: -1, y: 0 },
            Point { x: 0, y: -1 },
        ] {
            assert_eq!(
                buffer.set_pixel(pixel, Colour::WHITE),
                Err(PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: 3,
                    height: 3
                })
            );
        }

        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_outside_bounds_error_message() {
        let buffer = PixelBuffer::new(4, 2);
        let err = buffer.pixel(Point { x: 9, y: 1 }).unwrap_err();

        assert_eq!(err.to_string(), "pixel at x:9, y:1 outside of 4x2 buffer");
    }
}
