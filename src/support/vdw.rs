//! Reduced van der Waals fluid with the Maxwell equal-area construction.
//!
//! All quantities are reduced by their critical values, so the critical point
//! sits at `Tr = pr = vr = 1`.
//!
//! - [`pressure`], [`temperature`], [`entropy`]: the equation of state.
//! - [`saturation_temperature`], [`saturation_pressure`],
//!   [`saturation_volumes`]: closed-form coexistence in terms of the
//!   [`EntropyDifference`] between the phases.
//! - [`entropy_difference`], [`saturation_state`]: the inverse, solved by
//!   bisection for a [`SaturationTarget`].
//! - [`apply_maxwell`]: flattens the unstable segment of a sub-critical
//!   [`Isoline`].
//! - [`VanDerWaals`]: scales reduced results by a fluid's critical constants.
//!
//! Every function is pure, so independent isolines can be computed on
//! separate threads without coordination.

mod corresponding_states;
mod eos;
mod error;
mod isolines;
mod maxwell;
mod saturation;

pub mod fluid;

pub use corresponding_states::{
    CriticalConstants, CriticalConstantsError, Saturation, VanDerWaals, VanDerWaalsFluid,
};
pub use eos::{EXCLUDED_VOLUME, entropy, pressure, pressures, temperature, temperatures};
pub use error::{ContractError, ConvergenceError, DomainError, VdwError};
pub use isolines::{coexistence_curve, isobar, isotherm, linspace};
pub use maxwell::{Isoline, apply_maxwell, apply_maxwell_with_config, coexistence_range};
pub use saturation::{
    EntropyDifference, MAX_ENTROPY_DIFFERENCE, SaturationConfig, SaturationRange,
    SaturationState, SaturationTarget, entropy_difference, entropy_difference_with_config,
    saturation_pressure, saturation_state, saturation_state_with_config, saturation_temperature,
    saturation_volumes,
};

pub(crate) use maxwell::check_ascending;
