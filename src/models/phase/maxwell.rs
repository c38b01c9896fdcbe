use twine_core::Model;

use crate::support::vdw::{
    ContractError, Isoline, SaturationConfig, VdwError, apply_maxwell_with_config,
    check_ascending,
};

/// Applies the Maxwell construction to isolines over a fixed volume grid.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use vdw_models::{
///     models::phase::MaxwellConstruction,
///     support::vdw::{self, Isoline},
/// };
///
/// let volumes = vdw::linspace(0.4, 20.0, 500);
/// let model = MaxwellConstruction::new(volumes.clone()).unwrap();
///
/// let isotherm = Isoline::Isotherm {
///     temperature: 0.9,
///     pressures: vdw::pressures(0.9, &volumes).unwrap(),
/// };
/// let flattened = model.call(&isotherm).unwrap();
/// assert!(flattened.values().windows(2).all(|w| w[1] <= w[0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaxwellConstruction {
    volumes: Vec<f64>,
    config: SaturationConfig,
}

impl MaxwellConstruction {
    /// Creates a model over the given reduced-volume grid.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnsortedGrid`] if `volumes` is not ascending.
    pub fn new(volumes: Vec<f64>) -> Result<Self, ContractError> {
        check_ascending(&volumes)?;
        Ok(Self {
            volumes,
            config: SaturationConfig::default(),
        })
    }

    /// Returns the model with a different saturation solver configuration.
    #[must_use]
    pub fn with_config(self, config: SaturationConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }
}

impl Model for MaxwellConstruction {
    type Input = Isoline;
    type Output = Isoline;
    type Error = VdwError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        apply_maxwell_with_config(input.clone(), &self.volumes, &self.config)
    }
}
