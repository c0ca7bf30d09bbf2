use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::cli::args::{RenderArgs, Strategy};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::compute_escape_field::compute_escape_field::compute_escape_field_observed;
use crate::core::actions::compute_escape_field::compute_escape_field_per_point::compute_escape_field_per_point;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;

/// Number of progress lines logged over a full run.
const PROGRESS_STEPS: u32 = 10;

/// Drives one command-line render: escape field, colour mapping, output file.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    field: Option<EscapeField>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            field: None,
            buffer: None,
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&EscapeField> {
        self.field.as_ref()
    }

    pub fn generate(&mut self, args: &RenderArgs) -> Result<(), Box<dyn Error>> {
        let region = args.region()?;
        let max_iterations = args.max_iterations;

        info!("Rendering Mandelbrot set over {}", region);
        info!("Target width: {}", args.width);
        info!("Max iterations: {}", max_iterations);
        info!("Strategy: {:?}", args.strategy);

        let log_every = (max_iterations / PROGRESS_STEPS).max(1);
        let progress = |iteration: u32, max_iter: u32| {
            if iteration % log_every == 0 {
                info!("Round {}/{}", iteration, max_iter);
            }
        };

        let start = Instant::now();
        let field = match args.strategy {
            Strategy::Pruned => compute_escape_field_observed(
                region,
                args.width,
                max_iterations,
                &progress,
                &NeverCancel,
            )?,
            Strategy::PerPoint => {
                compute_escape_field_per_point(region, args.width, max_iterations, &NeverCancel)?
            }
        };

        info!("Field shape: {}", field.shape());
        info!("Duration:   {:?}", start.elapsed());

        let colour_map =
            mandelbrot_colour_map_factory(args.colour_map, max_iterations, args.gamma)?;
        info!("Colour map: {}", colour_map.display_name());

        self.buffer = Some(generate_pixel_buffer(&field, &colour_map)?);
        self.field = Some(field);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
