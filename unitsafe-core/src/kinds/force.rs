//! Force.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Force kind, `kg.m/s2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Force",
    dimensions = SIDimensions::MASS
        .plus(SIDimensions::LENGTH)
        .minus(SIDimensions::TIME.pow(2)),
    standard = NEWTON,
    units = [NEWTON, KILONEWTON, POUND_FORCE]
)]
pub struct Force;

/// Newton, the standard unit.
pub const NEWTON: Unit<Force> = Unit::standard("N", "newton", "N");
/// Kilonewton.
pub const KILONEWTON: Unit<Force> = Unit::linear("kN", "kilonewton", "kN", 1e3);
/// Pound-force.
pub const POUND_FORCE: Unit<Force> = Unit::linear("lbf", "pound-force", "lbf", 4.448_221_615_260_5);

/// A vector of forces.
pub type ForceVector = Vector<Force, Relative>;
/// A matrix of forces.
pub type ForceMatrix = Matrix<Force, Relative>;
