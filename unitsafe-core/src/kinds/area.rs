//! Area.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Area kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Area",
    dimensions = SIDimensions::LENGTH.pow(2),
    standard = SQUARE_METER,
    units = [SQUARE_METER, SQUARE_KILOMETER, HECTARE]
)]
pub struct Area;

/// Square meter, the standard unit.
pub const SQUARE_METER: Unit<Area> = Unit::standard("m2", "square meter", "m2");
/// Square kilometer.
pub const SQUARE_KILOMETER: Unit<Area> = Unit::linear("km2", "square kilometer", "km2", 1e6);
/// Hectare.
pub const HECTARE: Unit<Area> = Unit::linear("ha", "hectare", "ha", 1e4);

/// A vector of areas.
pub type AreaVector = Vector<Area, Relative>;
/// A matrix of areas.
pub type AreaMatrix = Matrix<Area, Relative>;
