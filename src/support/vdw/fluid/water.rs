use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::vdw::{CriticalConstants, VanDerWaalsFluid};

/// Canonical identifier for water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl VanDerWaalsFluid for Water {
    fn critical_constants() -> CriticalConstants {
        CriticalConstants {
            temperature: ThermodynamicTemperature::new::<kelvin>(647.096),
            pressure: Pressure::new::<megapascal>(22.064),
            density: MassDensity::new::<kilogram_per_cubic_meter>(322.0),
        }
    }
}
