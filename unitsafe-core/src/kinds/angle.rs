//! Plane angles between two [`Direction`]s.

use super::direction::Direction;
use crate::{Kind, Matrix, Relative, Scale, SIDimensions, Unit, Vector};
use core::f64::consts::PI;

/// Angle kind (relative, linked to [`Direction`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Angle",
    dimensions = SIDimensions::ANGLE,
    standard = RADIAN,
    units = [RADIAN, DEGREE, GRADIAN, SLOPE_PERCENT],
    absolute = Direction
)]
pub struct Angle;

/// Radian, the standard unit.
pub const RADIAN: Unit<Angle> = Unit::standard("rad", "radian", "rad").linked("rad");
/// Degree.
pub const DEGREE: Unit<Angle> = Unit::linear("deg", "degree", "°", PI / 180.0).linked("deg");
/// Gradian.
pub const GRADIAN: Unit<Angle> = Unit::linear("grad", "gradian", "grad", PI / 200.0);
/// Inclination given as a slope in percent (rise over run times 100).
pub const SLOPE_PERCENT: Unit<Angle> = Unit::with_scale("slope", "slope percent", "%", Scale::Grade { factor: 0.01 });

/// A vector of angles.
pub type AngleVector = Vector<Angle, Relative>;
/// A matrix of angles.
pub type AngleMatrix = Matrix<Angle, Relative>;
