//! Frequency, events per duration.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Frequency kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Frequency",
    dimensions = SIDimensions::TIME.invert(),
    standard = HERTZ,
    units = [HERTZ, KILOHERTZ, PER_MINUTE, PER_HOUR]
)]
pub struct Frequency;

/// Hertz, the standard unit.
pub const HERTZ: Unit<Frequency> = Unit::standard("Hz", "hertz", "Hz");
/// Kilohertz.
pub const KILOHERTZ: Unit<Frequency> = Unit::linear("kHz", "kilohertz", "kHz", 1e3);
/// Events per minute.
pub const PER_MINUTE: Unit<Frequency> = Unit::linear("1/min", "per minute", "1/min", 1.0 / 60.0);
/// Events per hour.
pub const PER_HOUR: Unit<Frequency> = Unit::linear("1/h", "per hour", "1/h", 1.0 / 3600.0);

/// A vector of frequencies.
pub type FrequencyVector = Vector<Frequency, Relative>;
/// A matrix of frequencies.
pub type FrequencyMatrix = Matrix<Frequency, Relative>;
