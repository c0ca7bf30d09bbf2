use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonFinite {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },
    InvalidSpan { real_span: f64, imag_span: f64 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                real_min,
                real_max,
                imag_min,
                imag_max,
            } => {
                write!(
                    f,
                    "region bounds must be finite: real [{}, {}], imag [{}, {}]",
                    real_min, real_max, imag_min, imag_max
                )
            }
            Self::InvalidSpan {
                real_span,
                imag_span,
            } => {
                write!(
                    f,
                    "region spans must be positive: real {}, imag {}",
                    real_span, imag_span
                )
            }
        }
    }
}

impl Error for RegionError {}

/// Rectangular area of the complex plane to sample.
///
/// Bounds are always finite and strictly ordered on both axes; the only way to
/// obtain a `Region` is through [`Region::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Region {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, RegionError> {
        let all_finite = [real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|bound| bound.is_finite());

        if !all_finite {
            return Err(RegionError::NonFinite {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }

        if !(real_min < real_max && imag_min < imag_max) {
            return Err(RegionError::InvalidSpan {
                real_span: real_max - real_min,
                imag_span: imag_max - imag_min,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    /// Width of the region. Infinite when the bounds lie more than `f64::MAX` apart.
    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    /// Ratio of the imaginary span to the real span.
    ///
    /// Computed from half spans, which stay finite for any pair of finite bounds.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let half_imag = self.imag_max / 2.0 - self.imag_min / 2.0;
        let half_real = self.real_max / 2.0 - self.real_min / 2.0;
        half_imag / half_real
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real [{}, {}] x imag [{}, {}]",
            self.real_min, self.real_max, self.imag_min, self.imag_max
        )
    }
}
