//! Position along an axis, measured from an arbitrary origin.

use super::length::Length;
use crate::{Absolute, Kind, Matrix, SIDimensions, Unit, Vector};

/// Position kind (absolute; differences are [`Length`]s).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Position",
    dimensions = SIDimensions::LENGTH,
    standard = METER,
    units = [METER, KILOMETER, FOOT],
    relative = Length
)]
pub struct Position;

/// Meter, the standard unit.
pub const METER: Unit<Position> = Unit::standard("m", "meter", "m").linked("m");
/// Kilometer.
pub const KILOMETER: Unit<Position> = Unit::linear("km", "kilometer", "km", 1e3).linked("km");
/// International foot.
pub const FOOT: Unit<Position> = Unit::linear("ft", "foot", "ft", 0.3048).linked("ft");

/// A vector of positions.
pub type PositionVector = Vector<Position, Absolute>;
/// A matrix of positions.
pub type PositionMatrix = Matrix<Position, Absolute>;
