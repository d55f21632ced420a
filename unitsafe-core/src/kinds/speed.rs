//! Speed, length per duration.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Speed kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Speed",
    dimensions = SIDimensions::LENGTH.minus(SIDimensions::TIME),
    standard = METER_PER_SECOND,
    units = [METER_PER_SECOND, KILOMETER_PER_HOUR, KNOT]
)]
pub struct Speed;

/// Meter per second, the standard unit.
pub const METER_PER_SECOND: Unit<Speed> = Unit::standard("m/s", "meter per second", "m/s");
/// Kilometer per hour.
pub const KILOMETER_PER_HOUR: Unit<Speed> = Unit::linear("km/h", "kilometer per hour", "km/h", 1.0 / 3.6);
/// Knot, one nautical mile per hour.
pub const KNOT: Unit<Speed> = Unit::linear("kn", "knot", "kn", 1852.0 / 3600.0);

/// A vector of speeds.
pub type SpeedVector = Vector<Speed, Relative>;
/// A matrix of speeds.
pub type SpeedMatrix = Matrix<Speed, Relative>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{duration, length};
    use crate::RelScalar;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_over_time() {
        let v = (RelScalar::new(36.0, length::KILOMETER) / RelScalar::new(1.0, duration::HOUR))
            .as_kind::<Speed>()
            .unwrap();
        assert_abs_diff_eq!(v.si(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.in_unit(KILOMETER_PER_HOUR), 36.0, epsilon = 1e-9);
        assert_eq!(v.unit(), METER_PER_SECOND);
    }
}
