use crate::core::actions::generate_grid::sample_grid::SampleGrid;
use crate::core::data::grid_shape::GridShape;
use crate::core::data::region::Region;
use crate::core::errors::ParameterError;
use crate::core::util::linspace::linspace;

/// Maps a region and a target column count onto concrete sample coordinates.
pub fn generate_grid(region: &Region, target_nx: u32) -> Result<SampleGrid, ParameterError> {
    let shape = GridShape::derive(region, target_nx)?;

    Ok(SampleGrid {
        shape,
        real_axis: linspace(region.real_min(), region.real_max(), shape.nx()),
        imag_axis: linspace(region.imag_min(), region.imag_max(), shape.ny()),
    })
}
