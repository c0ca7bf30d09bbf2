use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;

/// Turns an escape count into a display colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        (**self).map(iterations)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
