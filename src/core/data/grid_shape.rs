use std::fmt;

use crate::core::data::region::Region;
use crate::core::errors::ParameterError;

/// Upper bound on the number of grid points, so a point's index fits in a `u32`.
pub const MAX_GRID_POINTS: usize = u32::MAX as usize;

/// Dimensions of a sample grid and of the escape field computed over it.
///
/// Fields are row-major: `ny` rows along the imaginary axis, `nx` columns
/// along the real axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridShape {
    nx: u32,
    ny: u32,
}

impl GridShape {
    /// Derives the row count from `target_nx` and the region's aspect ratio.
    ///
    /// `ny = round(nx * imag_span / real_span)`, rounding half to even and
    /// clamping to at least one row.
    pub fn derive(region: &Region, target_nx: u32) -> Result<Self, ParameterError> {
        if target_nx == 0 {
            return Err(ParameterError::ZeroTargetNx);
        }

        let ny = (f64::from(target_nx) * region.aspect_ratio()).round_ties_even();

        if !ny.is_finite() || ny > f64::from(u32::MAX) {
            return Err(ParameterError::GridTooLarge { nx: target_nx, ny });
        }

        let shape = Self {
            nx: target_nx,
            ny: (ny as u32).max(1),
        };

        if shape.checked_len().is_none_or(|len| len > MAX_GRID_POINTS) {
            return Err(ParameterError::GridTooLarge {
                nx: target_nx,
                ny: f64::from(shape.ny),
            });
        }

        Ok(shape)
    }

    #[must_use]
    pub fn nx(&self) -> u32 {
        self.nx
    }

    #[must_use]
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Total number of points, `nx * ny`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nx as usize * self.ny as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major index of `(row, col)`, or `None` when outside the grid.
    #[must_use]
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.ny || col >= self.nx {
            return None;
        }

        Some(row as usize * self.nx as usize + col as usize)
    }

    fn checked_len(&self) -> Option<usize> {
        (self.nx as usize).checked_mul(self.ny as usize)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} columns", self.ny, self.nx)
    }
}
