//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Implementing
//! [`VanDerWaalsFluid`](super::VanDerWaalsFluid) for it supplies the critical
//! constants that scale reduced van der Waals results to SI quantities.

mod carbon_dioxide;
mod water;

pub use carbon_dioxide::CarbonDioxide;
pub use water::Water;
