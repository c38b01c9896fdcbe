//! Corresponding-states scaling of reduced results to SI quantities.
//!
//! The reduced van der Waals equation is universal: every fluid maps onto it
//! through its critical temperature, pressure, and density. `VanDerWaals`
//! applies that mapping so reduced results can be read in physical units.
//!
//! # Accuracy
//!
//! A van der Waals fluid has a critical compressibility factor of exactly
//! `3/8`, while real fluids sit near `0.23–0.29`. Scaling by all three
//! measured critical constants places the critical point exactly, but the
//! shape of the two-phase region away from it is only qualitative.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{
    DomainError, SaturationConfig, SaturationState, SaturationTarget, VdwError, eos,
    saturation_state_with_config,
};

/// Critical constants that define a fluid's reduced variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalConstants {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
}

/// Fluid constants required by the [`VanDerWaals`] model.
pub trait VanDerWaalsFluid {
    /// Returns the critical constants of the fluid.
    fn critical_constants() -> CriticalConstants;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CriticalConstantsError {
    #[error("invalid critical temperature: {temperature:?}")]
    Temperature { temperature: ThermodynamicTemperature },
    #[error("invalid critical pressure: {pressure:?}")]
    Pressure { pressure: Pressure },
    #[error("invalid critical density: {density:?}")]
    Density { density: MassDensity },
}

/// Liquid–vapor coexistence in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub liquid_density: MassDensity,
    pub vapor_density: MassDensity,
}

/// Van der Waals fluid scaled by a fluid's critical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerWaals<Fluid> {
    critical: CriticalConstants,
    config: SaturationConfig,
    _marker: PhantomData<Fluid>,
}

impl<Fluid: VanDerWaalsFluid> VanDerWaals<Fluid> {
    /// Creates a model using the critical constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`CriticalConstantsError`] if any constant is not strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use uom::si::{
    ///     f64::ThermodynamicTemperature, pressure::megapascal,
    ///     thermodynamic_temperature::kelvin,
    /// };
    /// use vdw_models::support::vdw::{VanDerWaals, fluid::CarbonDioxide};
    ///
    /// let co2 = VanDerWaals::<CarbonDioxide>::new().unwrap();
    /// let sat = co2
    ///     .saturation(ThermodynamicTemperature::new::<kelvin>(280.0))
    ///     .unwrap();
    /// assert!(sat.pressure.get::<megapascal>() < 7.3773);
    /// assert!(sat.liquid_density > sat.vapor_density);
    /// ```
    pub fn new() -> Result<Self, CriticalConstantsError> {
        Self::from_constants(Fluid::critical_constants())
    }
}

impl<Fluid> VanDerWaals<Fluid> {
    /// Creates a model from explicit critical constants.
    ///
    /// # Errors
    ///
    /// Returns [`CriticalConstantsError`] if any constant is not strictly positive.
    pub fn from_constants(critical: CriticalConstants) -> Result<Self, CriticalConstantsError> {
        let CriticalConstants {
            temperature,
            pressure,
            density,
        } = critical;

        if StrictlyPositive::check(&temperature.get::<kelvin>()).is_err() {
            return Err(CriticalConstantsError::Temperature { temperature });
        }
        if StrictlyPositive::check(&pressure.get::<pascal>()).is_err() {
            return Err(CriticalConstantsError::Pressure { pressure });
        }
        if StrictlyPositive::check(&density.get::<kilogram_per_cubic_meter>()).is_err() {
            return Err(CriticalConstantsError::Density { density });
        }

        Ok(Self {
            critical,
            config: SaturationConfig::default(),
            _marker: PhantomData,
        })
    }

    /// Returns the model with a different saturation solver configuration.
    #[must_use]
    pub fn with_config(self, config: SaturationConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn critical_constants(&self) -> CriticalConstants {
        self.critical
    }

    #[must_use]
    pub fn reduced_temperature(&self, temperature: ThermodynamicTemperature) -> f64 {
        temperature.get::<kelvin>() / self.critical.temperature.get::<kelvin>()
    }

    #[must_use]
    pub fn reduced_pressure(&self, pressure: Pressure) -> f64 {
        pressure.get::<pascal>() / self.critical.pressure.get::<pascal>()
    }

    /// Returns the reduced volume `ρc/ρ`.
    #[must_use]
    pub fn reduced_volume(&self, density: MassDensity) -> f64 {
        self.critical.density.get::<kilogram_per_cubic_meter>()
            / density.get::<kilogram_per_cubic_meter>()
    }

    /// Computes pressure from temperature and density.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ExcludedVolume`] if the density is at or above
    /// three times the critical density, or is negative.
    pub fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        density: MassDensity,
    ) -> Result<Pressure, DomainError> {
        let pr = eos::pressure(
            self.reduced_temperature(temperature),
            self.reduced_volume(density),
        )?;
        Ok(self.pressure_from_reduced(pr))
    }

    /// Computes temperature from pressure and density.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ExcludedVolume`] under the same conditions as
    /// [`VanDerWaals::pressure`].
    pub fn temperature(
        &self,
        pressure: Pressure,
        density: MassDensity,
    ) -> Result<ThermodynamicTemperature, DomainError> {
        let tr = eos::temperature(
            self.reduced_pressure(pressure),
            self.reduced_volume(density),
        )?;
        Ok(self.temperature_from_reduced(tr))
    }

    /// Finds liquid–vapor coexistence at the given temperature.
    ///
    /// # Errors
    ///
    /// Fails as [`saturation_state_with_config`] does, for example at or
    /// above the critical temperature.
    pub fn saturation(&self, temperature: ThermodynamicTemperature) -> Result<Saturation, VdwError> {
        let target = SaturationTarget::Temperature(self.reduced_temperature(temperature));
        let state = saturation_state_with_config(target, &self.config)?;
        Ok(self.saturation_from_reduced(&state))
    }

    /// Finds liquid–vapor coexistence at the given pressure.
    ///
    /// # Errors
    ///
    /// Fails as [`saturation_state_with_config`] does, for example at or
    /// above the critical pressure.
    pub fn saturation_at_pressure(&self, pressure: Pressure) -> Result<Saturation, VdwError> {
        let target = SaturationTarget::Pressure(self.reduced_pressure(pressure));
        let state = saturation_state_with_config(target, &self.config)?;
        Ok(self.saturation_from_reduced(&state))
    }

    fn temperature_from_reduced(&self, tr: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(tr * self.critical.temperature.get::<kelvin>())
    }

    fn pressure_from_reduced(&self, pr: f64) -> Pressure {
        self.critical.pressure * pr
    }

    fn density_from_reduced(&self, vr: f64) -> MassDensity {
        self.critical.density / vr
    }

    fn saturation_from_reduced(&self, state: &SaturationState) -> Saturation {
        Saturation {
            temperature: self.temperature_from_reduced(state.temperature),
            pressure: self.pressure_from_reduced(state.pressure),
            liquid_density: self.density_from_reduced(state.liquid_volume),
            vapor_density: self.density_from_reduced(state.vapor_volume),
        }
    }
}
