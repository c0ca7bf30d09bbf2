use std::error::Error;
use std::fmt;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::region::RegionError;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParameterError {
    ZeroTargetNx,
    ZeroMaxIterations,
    GridTooLarge { nx: u32, ny: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTargetNx => {
                write!(f, "target point count along the real axis must be at least 1")
            }
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::GridTooLarge { nx, ny } => {
                write!(f, "grid of {} x {} points exceeds the addressable size", nx, ny)
            }
        }
    }
}

impl Error for ParameterError {}

/// Failure modes of an escape field computation.
///
/// Invalid inputs are reported before any work starts. [`EngineError::Cancelled`]
/// is expected control flow for callers that abandon stale requests, and never
/// carries a partial field.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    InvalidRegion(RegionError),
    InvalidParameter(ParameterError),
    Cancelled(Cancelled),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid region: {}", err),
            Self::InvalidParameter(err) => write!(f, "invalid parameter: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::InvalidParameter(err) => Some(err),
            Self::Cancelled(c) => Some(c),
        }
    }
}

impl From<RegionError> for EngineError {
    fn from(err: RegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<ParameterError> for EngineError {
    fn from(err: ParameterError) -> Self {
        Self::InvalidParameter(err)
    }
}

impl From<Cancelled> for EngineError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}
