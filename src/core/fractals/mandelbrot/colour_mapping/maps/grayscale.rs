use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Grey levels with gamma contrast adjustment: `level = 255 * (k / max)^gamma`.
///
/// Gamma below 1 brightens fast-escaping exterior points; above 1 pushes
/// them towards black. Bounded points are always black.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
    gamma: f64,
}

impl ColourMap for MandelbrotGrayscale {
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
        let level = (t.powf(self.gamma) * 255.0).round() as u8;

        Ok(Colour::grey(level))
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::Grayscale.display_name()
    }
}

impl MandelbrotGrayscale {
    pub fn new(max_iterations: u32, gamma: f64) -> Result<Self, ColourMapError> {
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(ColourMapError::InvalidGamma { gamma });
        }

        Ok(Self {
            max_iterations,
            gamma,
        })
    }
}
