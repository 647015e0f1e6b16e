use serde::{Deserialize, Serialize};
use tanhsinh_math::pow10;

use crate::error::SolverError;

/// Default search ceiling: candidates `n` are scanned over `[1, 1_000_000)`.
pub const DEFAULT_MAX_INDEX: u64 = 1_000_000;

/// Parameters for one table generation run.
///
/// Step size and precision are fixed for the whole run; the table produced
/// from a given config is always the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Spacing `h` of sample points in the pre-image domain.
    /// Default: 2^-6.
    pub step_size: f64,

    /// Target precision in decimal digits; the noise floor is `10^-precision`.
    /// Default: 6.
    pub precision: i32,

    /// Exclusive upper bound on candidate node indices.
    /// Default: 1_000_000.
    pub max_index: u64,

    /// Optional wall-clock budget for the search, in milliseconds.
    /// Default: none.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_size: 2f64.powi(-6),
            precision: 6,
            max_index: DEFAULT_MAX_INDEX,
            deadline_ms: None,
        }
    }
}

impl SolverConfig {
    pub fn new(step_size: f64, precision: i32) -> Self {
        Self {
            step_size,
            precision,
            ..Self::default()
        }
    }

    /// Step size `h = 2^-exponent`. Exponents outside the `f64` range give
    /// `0` or `inf`, which [`validate`](Self::validate) rejects.
    pub fn from_step_exponent(exponent: i32, precision: i32) -> Self {
        Self::new(2f64.powf(-f64::from(exponent)), precision)
    }

    pub fn with_max_index(mut self, max_index: u64) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    /// Weight threshold `η = 10^-precision`.
    pub fn noise_floor(&self) -> f64 {
        pow10(-self.precision)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        if self.precision <= 0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "precision must be at least 1 digit, got {}",
                self.precision
            )));
        }
        if self.max_index < 2 {
            return Err(SolverError::InvalidConfiguration(format!(
                "max_index must be at least 2 to leave a non-empty search range, got {}",
                self.max_index
            )));
        }
        Ok(())
    }
}
