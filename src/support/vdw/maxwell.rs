//! Maxwell equal-area construction.
//!
//! Below the critical point a van der Waals isotherm (or isobar) has a local
//! maximum and minimum in volume. The segment between them is mechanically
//! unstable, and the states around it are metastable. In equilibrium the fluid
//! splits into liquid and vapor at the saturation pressure (or temperature)
//! instead. The construction replaces the isoline between the two saturation
//! volumes with that constant value.

use std::ops::Range;

use super::{
    ContractError, SaturationConfig, SaturationState, SaturationTarget, VdwError,
    saturation_state_with_config,
};

/// A computed isoline over a reduced-volume grid.
///
/// One reduced variable is fixed and the other is sampled index for index
/// with the volume grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Isoline {
    /// Reduced pressures along a fixed reduced temperature.
    Isotherm { temperature: f64, pressures: Vec<f64> },

    /// Reduced temperatures along a fixed reduced pressure.
    Isobar { pressure: f64, temperatures: Vec<f64> },
}

impl Isoline {
    /// Returns the sampled values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Isotherm { pressures, .. } => pressures,
            Self::Isobar { temperatures, .. } => temperatures,
        }
    }

    /// Consumes the isoline and returns the sampled values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        match self {
            Self::Isotherm { pressures, .. } => pressures,
            Self::Isobar { temperatures, .. } => temperatures,
        }
    }

    /// Returns the fixed parameter as a saturation target.
    #[must_use]
    pub fn target(&self) -> SaturationTarget {
        match *self {
            Self::Isotherm { temperature, .. } => SaturationTarget::Temperature(temperature),
            Self::Isobar { pressure, .. } => SaturationTarget::Pressure(pressure),
        }
    }

    /// Returns `true` if the fixed parameter is at or above its critical value.
    ///
    /// Such isolines are single-valued and need no construction.
    #[must_use]
    pub fn is_supercritical(&self) -> bool {
        self.target().value() >= 1.0
    }

    fn values_mut(&mut self) -> &mut [f64] {
        match self {
            Self::Isotherm { pressures, .. } => pressures,
            Self::Isobar { temperatures, .. } => temperatures,
        }
    }
}

/// Applies the Maxwell construction using the default solver configuration.
///
/// # Errors
///
/// See [`apply_maxwell_with_config`].
///
/// # Example
///
/// ```
/// use vdw_models::support::vdw::{self, Isoline};
///
/// let volumes: Vec<f64> = (0..400).map(|i| 0.4 + 0.05 * f64::from(i)).collect();
/// let pressures = vdw::pressures(0.85, &volumes).unwrap();
///
/// let isotherm = Isoline::Isotherm { temperature: 0.85, pressures };
/// let flattened = vdw::apply_maxwell(isotherm, &volumes).unwrap();
///
/// // The corrected isotherm never rises as the volume grows.
/// assert!(flattened.values().windows(2).all(|w| w[1] <= w[0]));
/// ```
pub fn apply_maxwell(isoline: Isoline, volumes: &[f64]) -> Result<Isoline, VdwError> {
    apply_maxwell_with_config(isoline, volumes, &SaturationConfig::default())
}

/// Replaces the unstable segment of a sub-critical isoline with its saturation value.
///
/// Takes ownership of the isoline, overwrites the half-open index range
/// spanned by the saturation volumes, and returns it. Isolines whose fixed
/// parameter is at or above 1 are returned unmodified.
///
/// # Errors
///
/// - [`ContractError::LengthMismatch`] if `volumes` and the isoline differ in length.
/// - [`ContractError::UnsortedGrid`] if `volumes` is not ascending.
/// - Any error from [`saturation_state_with_config`].
pub fn apply_maxwell_with_config(
    mut isoline: Isoline,
    volumes: &[f64],
    config: &SaturationConfig,
) -> Result<Isoline, VdwError> {
    check_grid(volumes, isoline.values().len())?;

    if isoline.is_supercritical() {
        return Ok(isoline);
    }

    let state = saturation_state_with_config(isoline.target(), config)?;
    let value = match isoline {
        Isoline::Isotherm { .. } => state.pressure,
        Isoline::Isobar { .. } => state.temperature,
    };

    isoline.values_mut()[coexistence_range(&state, volumes)].fill(value);

    Ok(isoline)
}

/// Returns the grid indices that fall inside the two-phase region.
///
/// Uses left-biased sorted insertion: the range starts at the first volume
/// not below the liquid volume and ends at the first volume not below the
/// vapor volume. `volumes` must be ascending.
#[must_use]
pub fn coexistence_range(state: &SaturationState, volumes: &[f64]) -> Range<usize> {
    let start = volumes.partition_point(|&v| v < state.liquid_volume);
    let end = volumes.partition_point(|&v| v < state.vapor_volume);
    start..end
}

fn check_grid(volumes: &[f64], values: usize) -> Result<(), ContractError> {
    if volumes.len() != values {
        return Err(ContractError::LengthMismatch {
            grid: volumes.len(),
            values,
        });
    }
    check_ascending(volumes)
}

pub(crate) fn check_ascending(volumes: &[f64]) -> Result<(), ContractError> {
    // A NaN compares false and counts as out of order.
    match volumes.windows(2).position(|w| !(w[0] <= w[1])) {
        Some(i) => Err(ContractError::UnsortedGrid { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::vdw::{
        ConvergenceError, DomainError, pressures, saturation_state, temperatures,
    };

    fn grid(start: f64, stop: f64, n: usize) -> Vec<f64> {
        let step = (stop - start) / (n - 1) as f64;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn supercritical_isotherm_passes_through() {
        let volumes = grid(0.36, 20.0, 1000);
        for t in [1.0, 1.1, 1.4] {
            let raw = pressures(t, &volumes).unwrap();
            let isotherm = Isoline::Isotherm {
                temperature: t,
                pressures: raw.clone(),
            };
            let result = apply_maxwell(isotherm, &volumes).unwrap();
            assert_eq!(result.into_values(), raw);
        }
    }

    #[test]
    fn subcritical_isotherm_is_flattened() {
        let volumes = grid(0.36, 20.0, 1000);
        let raw = pressures(0.8, &volumes).unwrap();
        let isotherm = Isoline::Isotherm {
            temperature: 0.8,
            pressures: raw.clone(),
        };

        let result = apply_maxwell(isotherm, &volumes).unwrap();
        let state = saturation_state(SaturationTarget::Temperature(0.8)).unwrap();
        let range = coexistence_range(&state, &volumes);
        assert!(!range.is_empty());

        let values = result.values();
        for (i, (&new, &old)) in values.iter().zip(&raw).enumerate() {
            if range.contains(&i) {
                assert_eq!(new, state.pressure);
            } else {
                assert_eq!(new, old);
            }
        }

        // Flat segment is bounded by the saturation volumes.
        assert!(volumes[range.start] >= state.liquid_volume);
        assert!(volumes[range.start - 1] < state.liquid_volume);
        assert!(volumes[range.end - 1] < state.vapor_volume);
        assert!(volumes[range.end] >= state.vapor_volume);
    }

    #[test]
    fn flattened_isotherm_is_monotonic() {
        let volumes = grid(0.4, 20.0, 2500);
        for t in [0.6, 0.7, 0.8, 0.9, 0.99] {
            let isotherm = Isoline::Isotherm {
                temperature: t,
                pressures: pressures(t, &volumes).unwrap(),
            };
            let raw_rises = isotherm.values().windows(2).any(|w| w[1] > w[0]);
            let result = apply_maxwell(isotherm, &volumes).unwrap();
            assert!(raw_rises || t > 0.95);
            assert!(result.values().windows(2).all(|w| w[1] <= w[0]));
        }
    }

    #[test]
    fn subcritical_isobar_is_flattened() {
        let volumes = grid(0.36, 20.0, 1000);
        let raw = temperatures(0.5, &volumes).unwrap();
        let isobar = Isoline::Isobar {
            pressure: 0.5,
            temperatures: raw.clone(),
        };

        let result = apply_maxwell(isobar, &volumes).unwrap();
        let state = saturation_state(SaturationTarget::Pressure(0.5)).unwrap();
        let range = coexistence_range(&state, &volumes);

        for (i, &value) in result.values().iter().enumerate() {
            if range.contains(&i) {
                assert_relative_eq!(value, state.temperature);
            } else {
                assert_eq!(value, raw[i]);
            }
        }
        assert!(result.values().windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn grid_outside_two_phase_region_is_untouched() {
        let volumes = grid(5.0, 20.0, 50);
        let raw = pressures(0.95, &volumes).unwrap();
        let isotherm = Isoline::Isotherm {
            temperature: 0.95,
            pressures: raw.clone(),
        };
        let result = apply_maxwell(isotherm, &volumes).unwrap();
        assert_eq!(result.into_values(), raw);
    }

    #[test]
    fn misaligned_grid_is_a_contract_error() {
        let isotherm = Isoline::Isotherm {
            temperature: 0.8,
            pressures: vec![1.0; 3],
        };
        assert!(matches!(
            apply_maxwell(isotherm, &[0.5, 1.0]),
            Err(VdwError::Contract(ContractError::LengthMismatch {
                grid: 2,
                values: 3
            }))
        ));
    }

    #[test]
    fn unsorted_grid_is_a_contract_error() {
        let isotherm = Isoline::Isotherm {
            temperature: 1.2,
            pressures: vec![1.0; 4],
        };
        assert!(matches!(
            apply_maxwell(isotherm, &[0.5, 1.0, 0.9, 2.0]),
            Err(VdwError::Contract(ContractError::UnsortedGrid { index: 2 }))
        ));
    }

    #[test]
    fn error_kinds_are_distinct() {
        let volumes = [0.5, 1.0, 2.0];
        let isotherm = |temperature| Isoline::Isotherm {
            temperature,
            pressures: vec![0.0; 3],
        };

        assert!(matches!(
            apply_maxwell(isotherm(0.0), &volumes),
            Err(VdwError::Domain(DomainError::SaturationTarget { .. }))
        ));
        assert!(matches!(
            apply_maxwell(isotherm(1e-3), &volumes),
            Err(VdwError::Convergence(ConvergenceError::NotBracketed { .. }))
        ));
        assert!(matches!(
            apply_maxwell(isotherm(0.8), &volumes[..2]),
            Err(VdwError::Contract(_))
        ));
    }
}
