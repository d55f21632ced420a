//! Duration, the span between two [`Time`]s.

use super::time::Time;
use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Duration kind (relative, linked to [`Time`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Duration",
    dimensions = SIDimensions::TIME,
    standard = SECOND,
    units = [SECOND, MILLISECOND, MINUTE, HOUR, DAY],
    absolute = Time
)]
pub struct Duration;

/// Second, the standard unit.
pub const SECOND: Unit<Duration> = Unit::standard("s", "second", "s").linked("s");
/// Millisecond.
pub const MILLISECOND: Unit<Duration> = Unit::linear("ms", "millisecond", "ms", 1e-3).linked("ms");
/// Minute.
pub const MINUTE: Unit<Duration> = Unit::linear("min", "minute", "min", 60.0).linked("min");
/// Hour.
pub const HOUR: Unit<Duration> = Unit::linear("h", "hour", "h", 3600.0).linked("h");
/// Day of 86 400 seconds.
pub const DAY: Unit<Duration> = Unit::linear("d", "day", "d", 86_400.0).linked("d");

/// A vector of durations.
pub type DurationVector = Vector<Duration, Relative>;
/// A matrix of durations.
pub type DurationMatrix = Matrix<Duration, Relative>;

impl From<core::time::Duration> for crate::Scalar<Duration, Relative> {
    fn from(value: core::time::Duration) -> Self {
        crate::Scalar::from_si(value.as_secs_f64(), SECOND)
    }
}
