use std::error::Error;
use std::fmt;

use crate::core::data::grid_shape::GridShape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeFieldError {
    ShapeMismatch {
        shape_len: usize,
        data_len: usize,
    },
    ValueExceedsMax {
        index: usize,
        value: u32,
        max_iter: u32,
    },
}

impl fmt::Display for EscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                shape_len,
                data_len,
            } => {
                write!(
                    f,
                    "grid of {} points does not match {} escape values",
                    shape_len, data_len
                )
            }
            Self::ValueExceedsMax {
                index,
                value,
                max_iter,
            } => {
                write!(
                    f,
                    "escape value {} at index {} exceeds maximum {}",
                    value, index, max_iter
                )
            }
        }
    }
}

impl Error for EscapeFieldError {}

/// Escape iteration counts for every point of a sample grid.
///
/// Values are stored row-major (`index = row * nx + col`), row 0 being the
/// `imag_min` edge and column 0 the `real_min` edge. Each value lies in
/// `[0, max_iter]`; `max_iter` marks points that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    shape: GridShape,
    max_iter: u32,
    values: Vec<u32>,
}

impl EscapeField {
    pub fn from_values(
        shape: GridShape,
        max_iter: u32,
        values: Vec<u32>,
    ) -> Result<Self, EscapeFieldError> {
        if shape.len() != values.len() {
            return Err(EscapeFieldError::ShapeMismatch {
                shape_len: shape.len(),
                data_len: values.len(),
            });
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v > max_iter) {
            return Err(EscapeFieldError::ValueExceedsMax {
                index,
                value,
                max_iter,
            });
        }

        Ok(Self {
            shape,
            max_iter,
            values,
        })
    }

    /// Wraps values produced by the engine, which upholds the shape and range invariants.
    pub(crate) fn from_engine(shape: GridShape, max_iter: u32, values: Vec<u32>) -> Self {
        debug_assert_eq!(shape.len(), values.len());
        debug_assert!(values.iter().all(|&v| v <= max_iter));

        Self {
            shape,
            max_iter,
            values,
        }
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        self.shape.index(row, col).map(|index| self.values[index])
    }

    /// Iterates over rows from `imag_min` to `imag_max`.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u32]> + ExactSizeIterator {
        self.values.chunks_exact(self.shape.nx() as usize)
    }

    /// Number of points that never escaped within the iteration budget.
    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == self.max_iter).count()
    }
}
