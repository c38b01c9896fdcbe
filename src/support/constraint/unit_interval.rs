mod open;

pub use open::UnitIntervalOpen;

/// Supplies 0 and 1 for types bounded by the unit interval.
///
/// Reduced temperatures and pressures are normalized by their critical
/// values, so the sub-critical range of either is the open interval `(0, 1)`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
