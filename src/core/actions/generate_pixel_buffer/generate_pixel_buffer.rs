use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates a pixel buffer by mapping row-major iteration counts to colours.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<f64>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(width, height, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubGreyColourMap {}

    impl ColourMap for StubGreyColourMap {
        fn map(&self, value: f64) -> Colour {
            let v = value as u8;
            Colour { r: v, g: v, b: v }
        }

        fn display_name(&self) -> &str {
            "Stub grey"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let expected: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &StubGreyColourMap {}, 3, 2).unwrap();

        assert_eq!(results.buffer(), &expected);
        assert_eq!(results.width(), 3);
        assert_eq!(results.height(), 2);
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let results = generate_pixel_buffer(input, &StubGreyColourMap {}, 2, 2);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected: 12,
                    buffer_size: 18
                }
            ))
        );
    }
}
