//! Prints reduced van der Waals isobars on the temperature–entropy plane as CSV.
//!
//! ```sh
//! cargo run --example ts_isobars > ts_isobars.csv
//! ```
//!
//! Rows are `series,entropy,temperature`; the dome is written as two series,
//! `liquid` and `vapor`.

use vdw_models::support::vdw::{self, SaturationTarget, VdwError};

fn main() -> Result<(), VdwError> {
    let volumes = vdw::linspace(0.36, 20.0, 1000);

    println!("series,entropy,temperature");

    for pressure in [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2] {
        let isobar = vdw::isobar(pressure, &volumes)?;
        let entropies = isobar.entropies(&volumes)?;
        for (s, t) in entropies.iter().zip(isobar.values()) {
            println!("p={pressure:.2},{s},{t}");
        }
    }

    let dome = vdw::coexistence_curve(
        vdw::linspace(0.3, 1.0, 1000)
            .into_iter()
            .map(SaturationTarget::Pressure),
    )?;
    let sides = dome
        .iter()
        .map(|state| -> Result<_, VdwError> { Ok((state.entropies()?, state.temperature)) })
        .collect::<Result<Vec<_>, VdwError>>()?;

    for ((liquid, _), t) in &sides {
        println!("liquid,{liquid},{t}");
    }
    for ((_, vapor), t) in &sides {
        println!("vapor,{vapor},{t}");
    }

    Ok(())
}
