//! Escape-time fields for the Mandelbrot iteration `z -> z² + c`.
//!
//! [`compute_escape_field`] samples a [`Region`] of the complex plane on a
//! grid whose row count follows the region's aspect ratio, and returns an
//! [`EscapeField`] of escape iteration counts. Points are iterated in rounds
//! and dropped from the active set as soon as they escape, with each round's
//! work spread across cores by rayon.
//!
//! The command-line controller and PPM presenter are a thin shell around the
//! engine: they pick the region, colour the returned field and write an image.

mod controllers;
mod core;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::compute_escape_field::compute_escape_field::{
    compute_escape_field, compute_escape_field_observed,
};
pub use crate::core::actions::compute_escape_field::compute_escape_field_per_point::compute_escape_field_per_point;
pub use crate::core::actions::generate_grid::generate_grid::generate_grid;
pub use crate::core::actions::generate_grid::sample_grid::SampleGrid;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::progress::{NoProgress, ProgressObserver};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
pub use crate::core::data::grid_shape::{GridShape, MAX_GRID_POINTS};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::errors::{EngineError, ParameterError};
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS_SQUARED, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::errors::ColourMapError;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::params::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_NX, MandelbrotParams,
};

pub use controllers::cli::args::{RenderArgs, Strategy};
pub use controllers::cli::render::RenderController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;
