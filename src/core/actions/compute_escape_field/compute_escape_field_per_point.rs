use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_POINTS, CancelToken, Cancelled};
use crate::core::actions::generate_grid::generate_grid::generate_grid;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::region::Region;
use crate::core::errors::EngineError;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Computes the escape field point by point, rows in parallel.
///
/// Produces the same field as
/// [`compute_escape_field`](super::compute_escape_field::compute_escape_field)
/// without pruning a working set: every point runs its own loop until it
/// escapes or exhausts the budget. Cancellation is polled at the start of each
/// row and every [`CANCEL_CHECK_INTERVAL_POINTS`] points within a row.
pub fn compute_escape_field_per_point<C>(
    region: Region,
    target_nx: u32,
    max_iter: u32,
    cancel: &C,
) -> Result<EscapeField, EngineError>
where
    C: CancelToken,
{
    let params = MandelbrotParams::new(region, target_nx, max_iter)?;
    let grid = generate_grid(params.region(), params.target_nx())?;
    let shape = grid.shape();
    let mut values = vec![0; shape.len()];

    values
        .par_chunks_mut(shape.nx() as usize)
        .enumerate()
        .try_for_each(|(row, out)| {
            for (i, (slot, c)) in out.iter_mut().zip(grid.row_points(row)).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_POINTS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                *slot = escape_time(c, max_iter);
            }

            Ok(())
        })?;

    Ok(EscapeField::from_engine(shape, max_iter, values))
}
