use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::fire_gradient::MandelbrotFireGradient;
use crate::core::fractals::mandelbrot::colour_mapping::maps::grayscale::MandelbrotGrayscale;

/// Builds the colour map for `kind`.
///
/// `gamma` only applies to [`MandelbrotColourMapKinds::Grayscale`].
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
    gamma: f64,
) -> Result<Box<dyn ColourMap>, ColourMapError> {
    let colour_map: Box<dyn ColourMap> = match kind {
        MandelbrotColourMapKinds::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::Grayscale => {
            Box::new(MandelbrotGrayscale::new(max_iterations, gamma)?)
        }
    };

    Ok(colour_map)
}
