use std::time::Instant;

use log::{debug, trace};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::compute_escape_field::working_set::WorkingSet;
use crate::core::actions::generate_grid::generate_grid::generate_grid;
use crate::core::actions::generate_grid::sample_grid::SampleGrid;
use crate::core::actions::progress::{NoProgress, ProgressObserver};
use crate::core::data::escape_field::EscapeField;
use crate::core::data::region::Region;
use crate::core::errors::EngineError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Computes the escape field of `region` sampled with `target_nx` columns.
///
/// For cancellation and progress reporting, use [`compute_escape_field_observed`].
pub fn compute_escape_field(
    region: Region,
    target_nx: u32,
    max_iter: u32,
) -> Result<EscapeField, EngineError> {
    compute_escape_field_observed(region, target_nx, max_iter, &NoProgress, &NeverCancel)
}

/// Computes the escape field with progress reporting and cooperative cancellation.
///
/// `cancel` is polled once at the start of every round; when it fires the call
/// returns [`EngineError::Cancelled`] and no field. `progress` is told about
/// each completed round and has no influence on the result.
pub fn compute_escape_field_observed<P, C>(
    region: Region,
    target_nx: u32,
    max_iter: u32,
    progress: &P,
    cancel: &C,
) -> Result<EscapeField, EngineError>
where
    P: ProgressObserver,
    C: CancelToken,
{
    let params = MandelbrotParams::new(region, target_nx, max_iter)?;
    let grid = generate_grid(params.region(), params.target_nx())?;

    debug!(
        "computing escape field over {} at {} with max_iter {}",
        params.region(),
        grid.shape(),
        max_iter
    );

    let start = Instant::now();
    let values = iterate_with_pruning(&grid, max_iter, progress, cancel)?;
    let field = EscapeField::from_engine(grid.shape(), max_iter, values);

    debug!(
        "escape field done in {:?}: {} of {} points bounded",
        start.elapsed(),
        field.bounded_count(),
        field.shape().len()
    );

    Ok(field)
}

/// Runs rounds `1..=max_iter`, retiring escaped points after each escape test.
///
/// A point retired in round `k` records `k - 1`; points never retired keep
/// the `max_iter` default. The transform is skipped in the final round since
/// its result could never be observed.
fn iterate_with_pruning<P, C>(
    grid: &SampleGrid,
    max_iter: u32,
    progress: &P,
    cancel: &C,
) -> Result<Vec<u32>, Cancelled>
where
    P: ProgressObserver,
    C: CancelToken,
{
    let mut field = vec![max_iter; grid.shape().len()];
    let mut working_set = WorkingSet::from_grid(grid);

    for iteration in 1..=max_iter {
        if working_set.is_empty() {
            trace!("all points escaped before round {}", iteration);
            break;
        }

        if cancel.is_cancelled() {
            debug!("escape field cancelled at round {} of {}", iteration, max_iter);
            return Err(Cancelled);
        }

        let retired = working_set.run_round(iteration - 1, iteration < max_iter, &mut field);

        trace!(
            "round {}/{}: {} escaped, {} active",
            iteration,
            max_iter,
            retired,
            working_set.len()
        );

        progress.on_round(iteration, max_iter);
    }

    Ok(field)
}
