//! Length, the distance between two [`Position`]s.
//!
//! ```rust
//! use unitsafe_core::kinds::length::{KILOMETER, METER};
//! use unitsafe_core::RelScalar;
//!
//! let run = RelScalar::new(5.0, KILOMETER);
//! assert_eq!(run.in_unit(METER), 5000.0);
//! ```

use super::position::Position;
use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Length kind (relative, linked to [`Position`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Length",
    dimensions = SIDimensions::LENGTH,
    standard = METER,
    units = [METER, MILLIMETER, CENTIMETER, KILOMETER, INCH, FOOT, MILE, NAUTICAL_MILE],
    absolute = Position
)]
pub struct Length;

/// Meter, the standard unit.
pub const METER: Unit<Length> = Unit::standard("m", "meter", "m").linked("m");
/// Millimeter.
pub const MILLIMETER: Unit<Length> = Unit::linear("mm", "millimeter", "mm", 1e-3);
/// Centimeter.
pub const CENTIMETER: Unit<Length> = Unit::linear("cm", "centimeter", "cm", 1e-2);
/// Kilometer.
pub const KILOMETER: Unit<Length> = Unit::linear("km", "kilometer", "km", 1e3).linked("km");
/// International inch.
pub const INCH: Unit<Length> = Unit::linear("in", "inch", "in", 0.0254);
/// International foot.
pub const FOOT: Unit<Length> = Unit::linear("ft", "foot", "ft", 0.3048).linked("ft");
/// International mile.
pub const MILE: Unit<Length> = Unit::linear("mi", "mile", "mi", 1609.344);
/// Nautical mile.
pub const NAUTICAL_MILE: Unit<Length> = Unit::linear("nmi", "nautical mile", "nmi", 1852.0);

/// A vector of lengths.
pub type LengthVector = Vector<Length, Relative>;
/// A matrix of lengths.
pub type LengthMatrix = Matrix<Length, Relative>;
