//! Pure numbers: ratios, fractions and logarithmic levels.

use crate::{Kind, Matrix, Relative, Scale, SIDimensions, Unit, Vector};

/// Dimensionless kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Dimensionless",
    dimensions = SIDimensions::NONE,
    standard = UNIT,
    units = [UNIT, PERCENT, PER_MILLE, DECIBEL]
)]
pub struct Dimensionless;

fn decibel_to_ratio(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

fn ratio_to_decibel(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

/// The plain number, the standard unit.
pub const UNIT: Unit<Dimensionless> = Unit::standard("1", "unit", "1");
/// Percent.
pub const PERCENT: Unit<Dimensionless> = Unit::linear("%", "percent", "%", 1e-2);
/// Per mille.
pub const PER_MILLE: Unit<Dimensionless> = Unit::linear("‰", "per mille", "‰", 1e-3);
/// Power ratio in decibels.
pub const DECIBEL: Unit<Dimensionless> = Unit::with_scale(
    "dB",
    "decibel",
    "dB",
    Scale::Custom {
        to_standard: decibel_to_ratio,
        from_standard: ratio_to_decibel,
    },
);

/// A vector of pure numbers.
pub type DimensionlessVector = Vector<Dimensionless, Relative>;
/// A matrix of pure numbers.
pub type DimensionlessMatrix = Matrix<Dimensionless, Relative>;
