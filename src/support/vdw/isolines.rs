//! Isotherms, isobars, and the coexistence curve over reduced-volume grids.
//!
//! These builders produce the arrays a phase diagram is drawn from. Each
//! sub-critical isoline comes back already corrected by the Maxwell
//! construction.

use super::{
    ContractError, Isoline, SaturationState, SaturationTarget, VdwError, apply_maxwell, eos,
    saturation_state,
};

/// Returns `n` evenly spaced values from `start` to `stop`, inclusive.
///
/// Returns an empty grid for `n = 0` and `[start]` for `n = 1`.
///
/// # Example
///
/// ```
/// use vdw_models::support::vdw::linspace;
///
/// assert_eq!(linspace(0.5, 2.0, 4), vec![0.5, 1.0, 1.5, 2.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

/// Computes the isotherm at `temperature` over `volumes`.
///
/// # Errors
///
/// Fails if any volume is at or below the pole, or if the Maxwell
/// construction fails.
pub fn isotherm(temperature: f64, volumes: &[f64]) -> Result<Isoline, VdwError> {
    let pressures = eos::pressures(temperature, volumes)?;
    apply_maxwell(
        Isoline::Isotherm {
            temperature,
            pressures,
        },
        volumes,
    )
}

/// Computes the isobar at `pressure` over `volumes`.
///
/// # Errors
///
/// Fails if any volume is at or below the pole, or if the Maxwell
/// construction fails.
pub fn isobar(pressure: f64, volumes: &[f64]) -> Result<Isoline, VdwError> {
    let temperatures = eos::temperatures(pressure, volumes)?;
    apply_maxwell(
        Isoline::Isobar {
            pressure,
            temperatures,
        },
        volumes,
    )
}

/// Computes saturation states along a sweep of targets.
///
/// Targets at or above the critical value have no coexisting phases and are
/// skipped, so a sweep may run up to and including 1.
///
/// # Errors
///
/// Fails on the first target that is non-positive or cannot be solved.
pub fn coexistence_curve<I>(targets: I) -> Result<Vec<SaturationState>, VdwError>
where
    I: IntoIterator<Item = SaturationTarget>,
{
    targets
        .into_iter()
        // NaN is kept so the solve reports it.
        .filter(|target| !(target.value() >= 1.0))
        .map(saturation_state)
        .collect()
}

impl Isoline {
    /// Returns the reduced entropy at each point of the isoline.
    ///
    /// Pairs each sampled value with its fixed parameter to recover the
    /// temperature at every volume.
    ///
    /// # Errors
    ///
    /// Fails if `volumes` does not match the isoline length, or if any point
    /// lies outside the entropy's domain.
    pub fn entropies(&self, volumes: &[f64]) -> Result<Vec<f64>, VdwError> {
        let values = self.values();
        if volumes.len() != values.len() {
            return Err(ContractError::LengthMismatch {
                grid: volumes.len(),
                values: values.len(),
            }
            .into());
        }

        let entropies = match self {
            Self::Isotherm { temperature, .. } => volumes
                .iter()
                .map(|&v| eos::entropy(*temperature, v))
                .collect::<Result<_, _>>()?,
            Self::Isobar { temperatures, .. } => temperatures
                .iter()
                .zip(volumes)
                .map(|(&t, &v)| eos::entropy(t, v))
                .collect::<Result<_, _>>()?,
        };

        Ok(entropies)
    }
}
