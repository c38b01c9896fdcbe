use twine_solvers::equation::bisection;

use crate::support::vdw::{ContractError, EntropyDifference};

/// Solver configuration for the entropy-difference root-find.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationConfig {
    /// Search interval for the entropy difference, `[lower, upper]`.
    ///
    /// The default `[1e-5, 700]` reaches from within `1e-11` of the critical
    /// temperature down to about `Tr = 0.005`, and pressures down to about
    /// `3e-303`. The upper end may not exceed
    /// [`MAX_ENTROPY_DIFFERENCE`](crate::support::vdw::MAX_ENTROPY_DIFFERENCE).
    pub bracket: [f64; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the entropy difference.
    pub ds_abs_tol: f64,

    /// Relative tolerance on the entropy difference.
    pub ds_rel_tol: f64,

    /// Tolerance on the residual, taken relative to the target value.
    pub residual_tol: f64,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            bracket: [1e-5, 700.0],
            max_iters: 200,
            ds_abs_tol: 1e-13,
            ds_rel_tol: 4.0 * f64::EPSILON,
            residual_tol: 1e-14,
        }
    }
}

impl SaturationConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.ds_abs_tol,
            x_rel_tol: self.ds_rel_tol,
            residual_tol: self.residual_tol,
        }
    }

    /// Returns the bracket endpoints if `0 < lower < upper <= MAX_ENTROPY_DIFFERENCE`.
    pub(super) fn checked_bracket(&self) -> Result<[EntropyDifference; 2], ContractError> {
        let [lower, upper] = self.bracket;
        let invalid = ContractError::InvalidBracket { lower, upper };

        if !(lower < upper) {
            return Err(invalid);
        }
        let lower = EntropyDifference::new(lower).map_err(|_| invalid)?;
        let upper = EntropyDifference::new(upper).map_err(|_| invalid)?;

        Ok([lower, upper])
    }
}
