use twine_core::Model;

use crate::support::vdw::{
    SaturationConfig, SaturationState, SaturationTarget, VdwError, saturation_state_with_config,
};

/// Solves for the saturation state at a reduced temperature or pressure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaturationSolver {
    pub config: SaturationConfig,
}

impl Model for SaturationSolver {
    type Input = SaturationTarget;
    type Output = SaturationState;
    type Error = VdwError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        saturation_state_with_config(*input, &self.config)
    }
}
