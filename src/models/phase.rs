//! Liquid–vapor phase equilibrium models.

mod maxwell;
mod saturation;

pub use maxwell::MaxwellConstruction;
pub use saturation::SaturationSolver;
