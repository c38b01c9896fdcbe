//! Problem formulation for the entropy-difference root-find.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::support::constraint::ConstraintError;

use super::{EntropyDifference, SaturationState, SaturationTarget};

/// Evaluates the closed-form saturation state at a candidate `ds`.
pub(super) struct SaturationModel;

impl Model for SaturationModel {
    type Input = EntropyDifference;
    type Output = SaturationState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(SaturationState::new(*input))
    }
}

/// Equation problem for matching a saturation target.
///
/// Computes the residual relative to the target, `(Trsat(ds) − T)/T` or
/// `(prsat(ds) − p)/p`.
pub(super) struct SaturationProblem {
    target: SaturationTarget,
}

impl SaturationProblem {
    pub(super) fn new(target: SaturationTarget) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SaturationProblem {
    type Input = EntropyDifference;
    type Output = SaturationState;
    type Error = ConstraintError;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        EntropyDifference::new(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.target.residual(output)])
    }
}
