//! # Van der Waals Models
//!
//! Reduced van der Waals fluid properties and the Maxwell equal-area
//! construction, with [Twine](https://github.com/isentropic-dev/twine) model
//! adapters.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for the Maxwell
//!   construction and the saturation solve.
//! - [`support`]: The reduced equation of state, closed-form saturation
//!   curve, Maxwell construction, and supporting utilities.
//!
//! ## Example
//!
//! ```
//! use vdw_models::support::vdw;
//!
//! let volumes = vdw::linspace(0.4, 20.0, 1000);
//!
//! // Below the critical temperature the raw isotherm has a van der Waals loop;
//! // `isotherm` returns it with the loop replaced by the coexistence line.
//! let isotherm = vdw::isotherm(0.9, &volumes).unwrap();
//! assert!(isotherm.values().windows(2).all(|w| w[1] <= w[0]));
//! ```

pub mod models;
pub mod support;
