use crate::core::data::region::Region;
use crate::core::errors::ParameterError;

pub const DEFAULT_TARGET_NX: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

pub(crate) fn default_region() -> Region {
    Region::new(-2.0, 1.0, -1.0, 1.0).expect("default region is valid")
}

/// Validated inputs of a single escape field computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: Region,
    target_nx: u32,
    max_iterations: u32,
}

impl MandelbrotParams {
    pub fn new(
        region: Region,
        target_nx: u32,
        max_iterations: u32,
    ) -> Result<Self, ParameterError> {
        if target_nx == 0 {
            return Err(ParameterError::ZeroTargetNx);
        }

        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations);
        }

        Ok(Self {
            region,
            target_nx,
            max_iterations,
        })
    }

    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub fn target_nx(&self) -> u32 {
        self.target_nx
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            region: default_region(),
            target_nx: DEFAULT_TARGET_NX,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let params = MandelbrotParams::new(default_region(), 3, 100).unwrap();

        assert_eq!(params.region(), &default_region());
        assert_eq!(params.target_nx(), 3);
        assert_eq!(params.max_iterations(), 100);
    }

    #[test]
    fn test_zero_target_nx_is_rejected() {
        assert_eq!(
            MandelbrotParams::new(default_region(), 0, 100),
            Err(ParameterError::ZeroTargetNx)
        );
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        assert_eq!(
            MandelbrotParams::new(default_region(), 3, 0),
            Err(ParameterError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_default_is_classic_view() {
        let params = MandelbrotParams::default();

        assert_eq!(params.region().real_min(), -2.0);
        assert_eq!(params.region().imag_max(), 1.0);
        assert_eq!(params.target_nx(), DEFAULT_TARGET_NX);
        assert_eq!(params.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }
}
