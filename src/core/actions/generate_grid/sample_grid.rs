use crate::core::data::complex::Complex;
use crate::core::data::grid_shape::GridShape;

/// Sample coordinates for a grid, kept as its two axes.
///
/// The full set of points is the outer combination `real[col] + i * imag[row]`,
/// enumerated row-major to match [`EscapeField`](crate::EscapeField).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub(crate) shape: GridShape,
    pub(crate) real_axis: Vec<f64>,
    pub(crate) imag_axis: Vec<f64>,
}

impl SampleGrid {
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn real_axis(&self) -> &[f64] {
        &self.real_axis
    }

    #[must_use]
    pub fn imag_axis(&self) -> &[f64] {
        &self.imag_axis
    }

    #[must_use]
    pub fn point(&self, row: u32, col: u32) -> Option<Complex> {
        let imag = *self.imag_axis.get(row as usize)?;
        let real = *self.real_axis.get(col as usize)?;

        Some(Complex { real, imag })
    }

    /// Points of a single row, from `real_min` to `real_max`.
    pub fn row_points(&self, row: usize) -> impl Iterator<Item = Complex> + '_ {
        let imag = self.imag_axis[row];

        self.real_axis
            .iter()
            .map(move |&real| Complex { real, imag })
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Complex> + '_ {
        (0..self.imag_axis.len()).flat_map(|row| self.row_points(row))
    }
}
