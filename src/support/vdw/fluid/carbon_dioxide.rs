use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::vdw::{CriticalConstants, VanDerWaalsFluid};

/// Canonical identifier for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl VanDerWaalsFluid for CarbonDioxide {
    fn critical_constants() -> CriticalConstants {
        CriticalConstants {
            temperature: ThermodynamicTemperature::new::<kelvin>(304.1282),
            pressure: Pressure::new::<megapascal>(7.3773),
            density: MassDensity::new::<kilogram_per_cubic_meter>(467.6),
        }
    }
}
