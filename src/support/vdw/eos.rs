//! Reduced van der Waals equation of state.
//!
//! In reduced variables the equation of state is
//! `pr = 8·Tr/(3·vr − 1) − 3/vr²` and the configurational entropy is
//! `s = ln(Tr^1.5·(3·vr − 1)/2)`.
//!
//! The pressure has a pole at `vr = 1/3`, where the molecules fill the
//! available volume. Rather than return an infinite or `NaN` value there,
//! every function here rejects `vr <= 1/3` with
//! [`DomainError::ExcludedVolume`].

use super::DomainError;

/// Reduced volume of the excluded-volume pole.
pub const EXCLUDED_VOLUME: f64 = 1.0 / 3.0;

/// Computes the reduced pressure at the given reduced temperature and volume.
///
/// # Errors
///
/// Returns [`DomainError::ExcludedVolume`] if `volume <= 1/3` or is `NaN`.
///
/// # Example
///
/// ```
/// use vdw_models::support::vdw;
///
/// assert_eq!(vdw::pressure(1.0, 1.0).unwrap(), 1.0);
/// assert!(vdw::pressure(1.0, 0.3).is_err());
/// ```
pub fn pressure(temperature: f64, volume: f64) -> Result<f64, DomainError> {
    let volume = check_volume(volume)?;
    Ok(8.0 * temperature / (3.0 * volume - 1.0) - 3.0 / (volume * volume))
}

/// Computes the reduced temperature at the given reduced pressure and volume.
///
/// This is the algebraic inverse of [`pressure`].
///
/// # Errors
///
/// Returns [`DomainError::ExcludedVolume`] if `volume <= 1/3` or is `NaN`.
pub fn temperature(pressure: f64, volume: f64) -> Result<f64, DomainError> {
    let volume = check_volume(volume)?;
    Ok((pressure + 3.0 / (volume * volume)) * (3.0 * volume - 1.0) / 8.0)
}

/// Computes the non-dimensional entropy at the given reduced temperature and volume.
///
/// The entropy is defined up to an additive constant; only differences are
/// physically meaningful.
///
/// # Errors
///
/// Returns [`DomainError::ExcludedVolume`] if `volume <= 1/3`, or
/// [`DomainError::NonPositiveTemperature`] if `temperature <= 0`.
pub fn entropy(temperature: f64, volume: f64) -> Result<f64, DomainError> {
    let volume = check_volume(volume)?;
    if temperature.is_nan() || temperature <= 0.0 {
        return Err(DomainError::NonPositiveTemperature { temperature });
    }
    Ok((temperature.powf(1.5) * (3.0 * volume - 1.0) / 2.0).ln())
}

/// Evaluates [`pressure`] along a fixed reduced temperature.
///
/// # Errors
///
/// Fails on the first volume at or below the pole.
pub fn pressures(temperature: f64, volumes: &[f64]) -> Result<Vec<f64>, DomainError> {
    volumes.iter().map(|&v| pressure(temperature, v)).collect()
}

/// Evaluates [`temperature`] along a fixed reduced pressure.
///
/// # Errors
///
/// Fails on the first volume at or below the pole.
pub fn temperatures(pressure: f64, volumes: &[f64]) -> Result<Vec<f64>, DomainError> {
    volumes.iter().map(|&v| temperature(pressure, v)).collect()
}

fn check_volume(volume: f64) -> Result<f64, DomainError> {
    if volume > EXCLUDED_VOLUME {
        Ok(volume)
    } else {
        Err(DomainError::ExcludedVolume { volume })
    }
}
