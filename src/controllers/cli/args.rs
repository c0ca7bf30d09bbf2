use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::data::region::{Region, RegionError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::params::{DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_NX};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Shrink the set of active points every round.
    #[default]
    Pruned,
    /// Iterate every point independently.
    PerPoint,
}

/// Compute a Mandelbrot escape-time field and write it as a PPM image.
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct RenderArgs {
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    pub real_min: f64,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub real_max: f64,

    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub imag_min: f64,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub imag_max: f64,

    /// Points along the real axis; the row count follows the region's aspect ratio.
    #[arg(long, default_value_t = DEFAULT_TARGET_NX)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = Strategy::default())]
    pub strategy: Strategy,

    #[arg(long, value_enum, default_value_t = MandelbrotColourMapKinds::default())]
    pub colour_map: MandelbrotColourMapKinds,

    /// Contrast exponent for the grayscale colour map.
    #[arg(long, default_value_t = 1.0)]
    pub gamma: f64,

    #[arg(long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl RenderArgs {
    pub fn region(&self) -> Result<Region, RegionError> {
        Region::new(self.real_min, self.real_max, self.imag_min, self.imag_max)
    }
}
