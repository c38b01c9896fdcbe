use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::ConstraintError;

use super::SaturationTarget;

/// Errors that may occur when evaluating reduced van der Waals properties.
///
/// The three kinds are kept apart so callers can tell a bad input from a
/// misuse of the API or a failed root-find.
#[derive(Debug, Error)]
pub enum VdwError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}

/// An input lies outside the mathematically valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The reduced volume is at or below the excluded-volume pole `vr = 1/3`.
    ///
    /// Also reported for a `NaN` volume.
    #[error("reduced volume {volume} is not above the excluded-volume pole at 1/3")]
    ExcludedVolume { volume: f64 },

    /// The reduced temperature must be positive for the entropy to be defined.
    #[error("reduced temperature {temperature} must be positive")]
    NonPositiveTemperature { temperature: f64 },

    /// A saturation target is not a sub-critical reduced value.
    #[error("saturation target {target:?} is outside the open interval (0, 1)")]
    SaturationTarget {
        target: SaturationTarget,

        #[source]
        source: ConstraintError,
    },
}

/// The caller broke a precondition the type system cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContractError {
    /// The isoline and its volume grid are not aligned index for index.
    #[error("volume grid has {grid} points but the isoline has {values}")]
    LengthMismatch { grid: usize, values: usize },

    /// The volume grid is not sorted ascending.
    ///
    /// `index` is the first position whose value is below (or not comparable
    /// to) its predecessor.
    #[error("volume grid is not ascending at index {index}")]
    UnsortedGrid { index: usize },

    /// The entropy-difference bracket must satisfy `0 < lower < upper < ∞`.
    #[error("invalid entropy-difference bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },
}

/// The saturation root-find did not produce an answer.
#[derive(Debug, Error)]
pub enum ConvergenceError {
    /// The residuals at both bracket endpoints have the same sign.
    #[error("target {target:?} is not bracketed by ds in [{lower}, {upper}]")]
    NotBracketed {
        target: SaturationTarget,
        lower: f64,
        upper: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
