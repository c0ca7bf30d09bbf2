use std::error::Error;
use std::fmt;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours an escape field into an image.
///
/// The image has one pixel per grid point. Field rows run from `imag_min`
/// upwards, so they are written bottom to top to put `imag_max` at the top of
/// the image.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    field: &EscapeField,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let shape = field.shape();
    let mut buffer: PixelBufferData = Vec::with_capacity(shape.len() * 3);

    for row in field.rows().rev() {
        for &value in row {
            let Colour { r, g, b } = mapper.map(value)?;

            buffer.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(PixelBuffer::from_data(shape.nx(), shape.ny(), buffer)?)
}
