//! Points in time, counted from an arbitrary epoch.

use super::duration::Duration;
use crate::{Absolute, Kind, Matrix, SIDimensions, Unit, Vector};

/// Time kind (absolute; differences are [`Duration`]s).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Time",
    dimensions = SIDimensions::TIME,
    standard = SECOND,
    units = [SECOND, MILLISECOND, MINUTE, HOUR, DAY],
    relative = Duration
)]
pub struct Time;

/// Seconds since the epoch, the standard unit.
pub const SECOND: Unit<Time> = Unit::standard("s", "second", "s").linked("s");
/// Milliseconds since the epoch.
pub const MILLISECOND: Unit<Time> = Unit::linear("ms", "millisecond", "ms", 1e-3).linked("ms");
/// Minutes since the epoch.
pub const MINUTE: Unit<Time> = Unit::linear("min", "minute", "min", 60.0).linked("min");
/// Hours since the epoch.
pub const HOUR: Unit<Time> = Unit::linear("h", "hour", "h", 3600.0).linked("h");
/// Days since the epoch.
pub const DAY: Unit<Time> = Unit::linear("d", "day", "d", 86_400.0).linked("d");

/// A vector of points in time.
pub type TimeVector = Vector<Time, Absolute>;
/// A matrix of points in time.
pub type TimeMatrix = Matrix<Time, Absolute>;
