//! Public Twine models.
//!
//! Each model is a thin [`twine_core::Model`] adapter over the reduced van der
//! Waals functions in [`crate::support::vdw`], so the construction and the
//! saturation solve can be composed with other Twine models.

pub mod phase;
