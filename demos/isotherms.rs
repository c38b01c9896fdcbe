//! Prints reduced van der Waals isotherms and the coexistence dome as CSV.
//!
//! ```sh
//! cargo run --example isotherms > isotherms.csv
//! ```
//!
//! Rows are `series,volume,pressure`; the dome is written as two series,
//! `liquid` and `vapor`.

use vdw_models::support::vdw::{self, SaturationTarget, VdwError};

fn main() -> Result<(), VdwError> {
    let volumes = vdw::linspace(0.4, 20.0, 2500);

    println!("series,volume,pressure");

    for temperature in [0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4] {
        let isotherm = vdw::isotherm(temperature, &volumes)?;
        for (v, p) in volumes.iter().zip(isotherm.values()) {
            println!("T={temperature:.2},{v},{p}");
        }
    }

    let dome = vdw::coexistence_curve(
        vdw::linspace(0.6, 1.0, 500)
            .into_iter()
            .map(SaturationTarget::Temperature),
    )?;
    for state in &dome {
        println!("liquid,{},{}", state.liquid_volume, state.pressure);
    }
    for state in &dome {
        println!("vapor,{},{}", state.vapor_volume, state.pressure);
    }

    Ok(())
}
