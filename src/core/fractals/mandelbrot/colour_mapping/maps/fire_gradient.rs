use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Black through red, orange and yellow to white, with bounded points black.
#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotFireGradient {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let band = |start: f64| (t - start) / 0.25;

        let (r, g, b) = if t < 0.25 {
            ((band(0.0) * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, (band(0.25) * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + band(0.5) * 90.0) as u8, 0)
        } else {
            (255, 255, (band(0.75) * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::FireGradient.display_name()
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
