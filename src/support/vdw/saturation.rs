//! Closed-form saturation states and the entropy-difference root-find.
//!
//! Liquid–vapor coexistence of a reduced van der Waals fluid admits a closed
//! parametric form in the entropy difference `ds = s_vapor − s_liquid`
//! (Lekner, Am. J. Phys. 50, 1982). With `y = ds/2`:
//!
//! - `f(y) = (y·cosh y − sinh y)/(sinh y·cosh y − y)`
//! - `g(y) = 1 + 2·f·cosh y + f²`
//! - `Trsat = 27·f·(f + cosh y)/(4·g²)`
//! - `prsat = 27·f²·(1 − f²)/g²`
//! - `vrsat = ((1 + e^−y/f)/3, (1 + e^y/f)/3)`
//!
//! Going the other way, from a target temperature or pressure to `ds`, has no
//! closed form and is solved by bisection on `ds`.

mod config;
mod problem;

pub use config::SaturationConfig;

use twine_solvers::equation::bisection;

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, StrictlyPositive, UnitIntervalOpen,
};

use super::{ContractError, ConvergenceError, DomainError, VdwError, eos};

use problem::{SaturationModel, SaturationProblem};

/// The entropy difference between coexisting vapor and liquid phases.
///
/// It tends to zero at the critical point and grows as the temperature falls.
/// Values are limited to `(0, MAX_ENTROPY_DIFFERENCE]`.
pub type EntropyDifference = Constrained<f64, SaturationRange>;

/// Largest entropy difference the closed forms accept.
///
/// The vapor volume grows like `e^ds` and overflows an `f64` just past
/// `ds = 709`. At this bound `Trsat ≈ 0.0048` and `prsat ≈ 2.7e-303`.
pub const MAX_ENTROPY_DIFFERENCE: f64 = 700.0;

/// Marker type for an entropy difference in `(0, MAX_ENTROPY_DIFFERENCE]`.
///
/// # Example
///
/// ```
/// use vdw_models::support::vdw::EntropyDifference;
///
/// assert!(EntropyDifference::new(1.5).is_ok());
/// assert!(EntropyDifference::new(0.0).is_err());
/// assert!(EntropyDifference::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SaturationRange;

impl Constraint<f64> for SaturationRange {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if *value > MAX_ENTROPY_DIFFERENCE {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}

/// Below this `y`, `f(y)` is evaluated from its Taylor series.
///
/// The closed form subtracts nearly equal terms of order `y` to get a result
/// of order `y³`.
const SERIES_THRESHOLD: f64 = 0.05;

/// The fixed parameter of a coexistence query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaturationTarget {
    /// A reduced saturation temperature.
    Temperature(f64),

    /// A reduced saturation pressure.
    Pressure(f64),
}

impl SaturationTarget {
    /// Returns the reduced value of the target.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Temperature(value) | Self::Pressure(value) => value,
        }
    }

    /// Returns `(target(state) − value)/value`.
    ///
    /// Relative, so a tiny target pressure still has to be matched to full
    /// precision. Positive on the critical side of the root.
    pub(crate) fn residual(self, state: &SaturationState) -> f64 {
        match self {
            Self::Temperature(t) => (state.temperature - t) / t,
            Self::Pressure(p) => (state.pressure - p) / p,
        }
    }

    fn check(self) -> Result<Self, DomainError> {
        UnitIntervalOpen::check(&self.value())
            .map(|()| self)
            .map_err(|source| DomainError::SaturationTarget {
                target: self,
                source,
            })
    }
}

/// A point on the coexistence curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationState {
    pub entropy_difference: EntropyDifference,
    pub temperature: f64,
    pub pressure: f64,
    pub liquid_volume: f64,
    pub vapor_volume: f64,
}

impl SaturationState {
    /// Evaluates the closed-form saturation state for the given entropy difference.
    #[must_use]
    pub fn new(ds: EntropyDifference) -> Self {
        let params = Params::new(ds);
        Self {
            entropy_difference: ds,
            temperature: params.temperature(),
            pressure: params.pressure(),
            liquid_volume: (1.0 + params.liquid) / 3.0,
            vapor_volume: (1.0 + params.vapor) / 3.0,
        }
    }

    /// Returns the reduced (liquid, vapor) entropies.
    ///
    /// Their difference is the state's entropy difference.
    ///
    /// # Errors
    ///
    /// Fails only if a saturation volume has lost all precision, which does
    /// not happen inside the default solver bracket.
    pub fn entropies(&self) -> Result<(f64, f64), DomainError> {
        Ok((
            eos::entropy(self.temperature, self.liquid_volume)?,
            eos::entropy(self.temperature, self.vapor_volume)?,
        ))
    }
}

/// Returns the reduced saturation temperature for the given entropy difference.
#[must_use]
pub fn saturation_temperature(ds: EntropyDifference) -> f64 {
    Params::new(ds).temperature()
}

/// Returns the reduced saturation pressure for the given entropy difference.
#[must_use]
pub fn saturation_pressure(ds: EntropyDifference) -> f64 {
    Params::new(ds).pressure()
}

/// Returns the reduced (liquid, vapor) saturation volumes for the given entropy difference.
///
/// The liquid volume is always in `(1/3, 1)` and the vapor volume is always
/// above 1 and finite. Near [`MAX_ENTROPY_DIFFERENCE`] the vapor volume is of
/// order `1e301`.
#[must_use]
pub fn saturation_volumes(ds: EntropyDifference) -> (f64, f64) {
    let params = Params::new(ds);
    ((1.0 + params.liquid) / 3.0, (1.0 + params.vapor) / 3.0)
}

/// Finds the entropy difference at which the saturation curve meets `target`.
///
/// Uses [`SaturationConfig::default`].
///
/// # Errors
///
/// See [`saturation_state_with_config`].
///
/// # Example
///
/// ```
/// use vdw_models::support::vdw::{self, SaturationTarget};
///
/// let ds = vdw::entropy_difference(SaturationTarget::Temperature(0.9)).unwrap();
/// let t = vdw::saturation_temperature(ds);
/// assert!((t - 0.9).abs() < 1e-10);
/// ```
pub fn entropy_difference(target: SaturationTarget) -> Result<EntropyDifference, VdwError> {
    saturation_state(target).map(|state| state.entropy_difference)
}

/// Finds the full saturation state at `target` using the default configuration.
///
/// # Errors
///
/// See [`saturation_state_with_config`].
pub fn saturation_state(target: SaturationTarget) -> Result<SaturationState, VdwError> {
    saturation_state_with_config(target, &SaturationConfig::default())
}

/// Finds the entropy difference at which the saturation curve meets `target`.
///
/// # Errors
///
/// See [`saturation_state_with_config`].
pub fn entropy_difference_with_config(
    target: SaturationTarget,
    config: &SaturationConfig,
) -> Result<EntropyDifference, VdwError> {
    saturation_state_with_config(target, config).map(|state| state.entropy_difference)
}

/// Finds the full saturation state at `target`.
///
/// Both the saturation temperature and pressure decrease monotonically with
/// `ds`, so a single sign change inside the bracket identifies the root.
///
/// # Errors
///
/// - [`DomainError::SaturationTarget`] if the target is not in `(0, 1)`.
/// - [`ContractError::InvalidBracket`] if the configured bracket is malformed.
/// - [`ConvergenceError::NotBracketed`] if the target is sub-critical but
///   lies outside the range the bracket can reach, for example a pressure
///   below `prsat(upper)`.
/// - [`ConvergenceError::Bisection`] or [`ConvergenceError::MaxIters`] if
///   the solver fails.
pub fn saturation_state_with_config(
    target: SaturationTarget,
    config: &SaturationConfig,
) -> Result<SaturationState, VdwError> {
    let target = target.check()?;
    let [lower, upper] = config.checked_bracket()?;

    let model = SaturationModel;
    let problem = SaturationProblem::new(target);

    let lower_residual = target.residual(&SaturationState::new(lower));
    let upper_residual = target.residual(&SaturationState::new(upper));
    if lower_residual * upper_residual > 0.0 {
        return Err(ConvergenceError::NotBracketed {
            target,
            lower: lower.into_inner(),
            upper: upper.into_inner(),
        }
        .into());
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower.into_inner(), upper.into_inner()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Only a non-positive iterate is rejected, and it sits on the
            // critical side of the root where the residual is positive.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .map_err(ConvergenceError::from)?;

    if solution.status != bisection::Status::Converged {
        return Err(ConvergenceError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        }
        .into());
    }

    Ok(solution.snapshot.output)
}

/// Shape functions of the parametric saturation curve at `y = ds/2`.
struct Params {
    f: f64,
    /// `f·cosh y`
    fc: f64,
    /// `e^−y/f`
    liquid: f64,
    /// `e^y/f`
    vapor: f64,
}

impl Params {
    fn new(ds: EntropyDifference) -> Self {
        let y = ds.into_inner() / 2.0;

        if y < SERIES_THRESHOLD {
            let y2 = y * y;
            let num = 1.0 / 3.0 + y2 * (1.0 / 30.0 + y2 * (1.0 / 840.0 + y2 / 45_360.0));
            let den =
                2.0 / 3.0 + y2 * (2.0 / 15.0 + y2 * (4.0 / 315.0 + y2 * 2.0 / 2835.0));
            let f = num / den;
            return Self {
                f,
                fc: f * y.cosh(),
                liquid: (-y).exp() / f,
                vapor: y.exp() / f,
            };
        }

        // Scaled by cosh y so nothing overflows before the result does.
        let t = y.tanh();
        let c = y.cosh();
        let num = y - t;
        let f = num / (y.sinh() - y / c);
        let fc = num / (t - y / (c * c));

        // e^∓y·(sinh y − y/cosh y), written to survive large y.
        let liquid = (-(-2.0 * y).exp_m1() / 2.0 - 2.0 * y / (1.0 + (2.0 * y).exp())) / num;
        let vapor = ((2.0 * y).exp_m1() / 2.0 - 2.0 * y / (1.0 + (-2.0 * y).exp())) / num;

        Self {
            f,
            fc,
            liquid,
            vapor,
        }
    }

    fn g(&self) -> f64 {
        1.0 + 2.0 * self.fc + self.f * self.f
    }

    fn temperature(&self) -> f64 {
        let g = self.g();
        27.0 * (self.f * self.f + self.fc) / (4.0 * g * g)
    }

    fn pressure(&self) -> f64 {
        let g = self.g();
        let f2 = self.f * self.f;
        27.0 * f2 * (1.0 - f2) / (g * g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn ds(value: f64) -> EntropyDifference {
        EntropyDifference::new(value).unwrap()
    }

    #[test]
    fn near_critical_temperature() {
        assert_abs_diff_eq!(saturation_temperature(ds(1e-4)), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(saturation_pressure(ds(1e-4)), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn volumes_bracket_the_critical_volume() {
        for &value in &[1e-8, 1e-4, 0.05, 0.0999, 0.1001, 1.0, 10.0, 100.0, 699.0] {
            let (liquid, vapor) = saturation_volumes(ds(value));
            assert!(liquid < 1.0, "liquid volume {liquid} at ds={value}");
            assert!(vapor > 1.0, "vapor volume {vapor} at ds={value}");
            assert!(liquid > 1.0 / 3.0);
        }
    }

    #[test]
    fn volumes_converge_at_critical_point() {
        let (liquid, vapor) = saturation_volumes(ds(1e-7));
        assert_abs_diff_eq!(liquid, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(vapor, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn temperature_and_pressure_decrease_with_ds() {
        let grid: Vec<f64> = (0..200).map(|i| 1e-3 * 1.06_f64.powi(i)).collect();
        for pair in grid.windows(2) {
            let (a, b) = (ds(pair[0]), ds(pair[1]));
            assert!(saturation_temperature(a) > saturation_temperature(b));
            assert!(saturation_pressure(a) > saturation_pressure(b));
        }
    }

    #[test]
    fn series_and_closed_form_agree_at_threshold() {
        let below = SaturationState::new(ds(2.0 * SERIES_THRESHOLD * (1.0 - 1e-12)));
        let above = SaturationState::new(ds(2.0 * SERIES_THRESHOLD * (1.0 + 1e-12)));
        assert_relative_eq!(below.temperature, above.temperature, max_relative = 1e-11);
        assert_relative_eq!(below.pressure, above.pressure, max_relative = 1e-11);
        assert_relative_eq!(below.liquid_volume, above.liquid_volume, max_relative = 1e-10);
        assert_relative_eq!(below.vapor_volume, above.vapor_volume, max_relative = 1e-10);
    }

    #[test]
    fn phases_share_pressure_at_saturation() {
        for &value in &[0.01, 0.5, 2.0, 8.0] {
            let state = SaturationState::new(ds(value));
            let p_liquid = eos::pressure(state.temperature, state.liquid_volume).unwrap();
            let p_vapor = eos::pressure(state.temperature, state.vapor_volume).unwrap();
            assert_relative_eq!(p_liquid, state.pressure, max_relative = 1e-9);
            assert_relative_eq!(p_vapor, state.pressure, max_relative = 1e-9);
        }
    }

    #[test]
    fn equal_area_rule_holds() {
        // ∫ p dv from v_l to v_g equals p_sat·(v_g − v_l).
        for &value in &[0.2, 1.0, 3.0] {
            let state = SaturationState::new(ds(value));
            let (vl, vg, t) = (state.liquid_volume, state.vapor_volume, state.temperature);
            let work = 8.0 * t / 3.0 * ((3.0 * vg - 1.0) / (3.0 * vl - 1.0)).ln()
                + 3.0 / vg
                - 3.0 / vl;
            assert_relative_eq!(work, state.pressure * (vg - vl), max_relative = 1e-9);
        }
    }

    #[test]
    fn entropy_difference_is_the_parameter() {
        let state = SaturationState::new(ds(1.7));
        let (liquid, vapor) = state.entropies().unwrap();
        assert_relative_eq!(vapor - liquid, 1.7, max_relative = 1e-12);
    }

    #[test]
    fn solves_for_temperature() {
        let ds = entropy_difference(SaturationTarget::Temperature(0.9)).unwrap();
        assert!(ds.into_inner() > 0.0);
        assert_relative_eq!(saturation_temperature(ds), 0.9, epsilon = 1e-10);
    }

    #[test]
    fn solves_for_pressure() {
        for &p in &[0.01, 0.3, 0.5, 0.99] {
            let state = saturation_state(SaturationTarget::Pressure(p)).unwrap();
            assert_relative_eq!(state.pressure, p, epsilon = 1e-10);
            assert_relative_eq!(
                saturation_pressure(state.entropy_difference),
                p,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn left_inverse_over_temperature_range() {
        for &t in &[0.05, 0.3, 0.6, 0.8, 0.95, 0.999_999] {
            let ds = entropy_difference(SaturationTarget::Temperature(t)).unwrap();
            assert_relative_eq!(saturation_temperature(ds), t, epsilon = 1e-10);
        }
    }

    #[test]
    fn left_inverse_over_small_pressures() {
        for &p in &[1e-6, 1e-8, 1e-10, 1e-12, 1e-14, 1e-20, 1e-100, 1e-300] {
            let ds = entropy_difference(SaturationTarget::Pressure(p)).unwrap();
            assert!(ds.into_inner() < MAX_ENTROPY_DIFFERENCE);
            assert_relative_eq!(saturation_pressure(ds), p, max_relative = 1e-10);
        }
    }

    #[test]
    fn left_inverse_over_small_temperatures() {
        for &t in &[0.01, 0.006, 0.005] {
            let ds = entropy_difference(SaturationTarget::Temperature(t)).unwrap();
            assert_relative_eq!(saturation_temperature(ds), t, max_relative = 1e-10);
        }
    }

    #[test]
    fn pressure_below_bracket_reach_is_not_bracketed() {
        let floor = saturation_pressure(ds(MAX_ENTROPY_DIFFERENCE));
        assert!(floor > 0.0);
        assert!(matches!(
            saturation_state(SaturationTarget::Pressure(floor / 100.0)),
            Err(VdwError::Convergence(ConvergenceError::NotBracketed { .. }))
        ));
    }

    #[test]
    fn entropy_difference_range_is_enforced() {
        assert_eq!(
            EntropyDifference::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            EntropyDifference::new(MAX_ENTROPY_DIFFERENCE + 1.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(EntropyDifference::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(
            EntropyDifference::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );

        let state = SaturationState::new(ds(MAX_ENTROPY_DIFFERENCE));
        for value in [
            state.temperature,
            state.pressure,
            state.liquid_volume,
            state.vapor_volume,
        ] {
            assert!(value.is_finite() && value > 0.0);
        }
        assert!(state.vapor_volume > 1.0 && state.liquid_volume < 1.0);
    }

    #[test]
    fn rejects_non_sub_critical_targets() {
        for target in [
            SaturationTarget::Temperature(1.0),
            SaturationTarget::Temperature(1.3),
            SaturationTarget::Pressure(0.0),
            SaturationTarget::Pressure(-0.2),
            SaturationTarget::Temperature(f64::NAN),
        ] {
            assert!(matches!(
                saturation_state(target),
                Err(VdwError::Domain(DomainError::SaturationTarget { .. }))
            ));
        }
    }

    #[test]
    fn unreachable_target_is_not_bracketed() {
        // The default bracket only reaches down to about Tr = 0.005.
        assert!(matches!(
            saturation_state(SaturationTarget::Temperature(1e-4)),
            Err(VdwError::Convergence(ConvergenceError::NotBracketed { .. }))
        ));

        let narrow = SaturationConfig {
            bracket: [1e-5, 1.0],
            ..SaturationConfig::default()
        };
        assert!(matches!(
            saturation_state_with_config(SaturationTarget::Temperature(0.5), &narrow),
            Err(VdwError::Convergence(ConvergenceError::NotBracketed { .. }))
        ));
    }

    #[test]
    fn malformed_bracket_is_a_contract_error() {
        for bracket in [[0.0, 700.0], [5.0, 1.0], [1e-5, f64::INFINITY], [1e-5, 800.0]] {
            let config = SaturationConfig {
                bracket,
                ..SaturationConfig::default()
            };
            assert!(matches!(
                saturation_state_with_config(SaturationTarget::Temperature(0.9), &config),
                Err(VdwError::Contract(ContractError::InvalidBracket { .. }))
            ));
        }
    }

    #[test]
    fn iteration_limit_is_reported() {
        let config = SaturationConfig {
            max_iters: 2,
            ..SaturationConfig::default()
        };
        assert!(matches!(
            saturation_state_with_config(SaturationTarget::Temperature(0.9), &config),
            Err(VdwError::Convergence(ConvergenceError::MaxIters { .. }))
        ));
    }
}
