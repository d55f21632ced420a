//! Mass.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Mass kind (relative, no absolute counterpart).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Mass",
    dimensions = SIDimensions::MASS,
    standard = KILOGRAM,
    units = [KILOGRAM, GRAM, TONNE, POUND]
)]
pub struct Mass;

/// Kilogram, the standard unit.
pub const KILOGRAM: Unit<Mass> = Unit::standard("kg", "kilogram", "kg");
/// Gram.
pub const GRAM: Unit<Mass> = Unit::linear("g", "gram", "g", 1e-3);
/// Metric tonne.
pub const TONNE: Unit<Mass> = Unit::linear("t", "tonne", "t", 1e3);
/// Avoirdupois pound.
pub const POUND: Unit<Mass> = Unit::linear("lb", "pound", "lb", 0.453_592_37);

/// A vector of masses.
pub type MassVector = Vector<Mass, Relative>;
/// A matrix of masses.
pub type MassMatrix = Matrix<Mass, Relative>;
