//! Directions, angles measured from a reference heading.

use super::angle::Angle;
use crate::{Absolute, Kind, Matrix, SIDimensions, Unit, Vector};
use core::f64::consts::PI;

/// Direction kind (absolute; differences are [`Angle`]s).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Direction",
    dimensions = SIDimensions::ANGLE,
    standard = RADIAN,
    units = [RADIAN, DEGREE],
    relative = Angle
)]
pub struct Direction;

/// Radian, the standard unit.
pub const RADIAN: Unit<Direction> = Unit::standard("rad", "radian", "rad").linked("rad");
/// Degree.
pub const DEGREE: Unit<Direction> = Unit::linear("deg", "degree", "°", PI / 180.0).linked("deg");

/// A vector of directions.
pub type DirectionVector = Vector<Direction, Absolute>;
/// A matrix of directions.
pub type DirectionMatrix = Matrix<Direction, Absolute>;
