//! Energy.

use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Energy kind, `kg.m2/s2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Energy",
    dimensions = SIDimensions::MASS
        .plus(SIDimensions::LENGTH.pow(2))
        .minus(SIDimensions::TIME.pow(2)),
    standard = JOULE,
    units = [JOULE, KILOJOULE, KILOWATT_HOUR, CALORIE]
)]
pub struct Energy;

/// Joule, the standard unit.
pub const JOULE: Unit<Energy> = Unit::standard("J", "joule", "J");
/// Kilojoule.
pub const KILOJOULE: Unit<Energy> = Unit::linear("kJ", "kilojoule", "kJ", 1e3);
/// Kilowatt hour.
pub const KILOWATT_HOUR: Unit<Energy> = Unit::linear("kWh", "kilowatt hour", "kWh", 3.6e6);
/// Thermochemical calorie.
pub const CALORIE: Unit<Energy> = Unit::linear("cal", "calorie", "cal", 4.184);

/// A vector of energies.
pub type EnergyVector = Vector<Energy, Relative>;
/// A matrix of energies.
pub type EnergyMatrix = Matrix<Energy, Relative>;
