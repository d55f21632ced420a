//! Thermodynamic temperature on the kelvin, Celsius and Fahrenheit scales.

use super::temperature::Temperature;
use crate::{Absolute, Kind, Matrix, SIDimensions, Unit, Vector};

/// Absolute temperature kind; differences are [`Temperature`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "AbsoluteTemperature",
    dimensions = SIDimensions::TEMPERATURE,
    standard = KELVIN,
    units = [KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT],
    relative = Temperature
)]
pub struct AbsoluteTemperature;

/// Kelvin, the standard unit.
pub const KELVIN: Unit<AbsoluteTemperature> = Unit::standard("K", "kelvin", "K").linked("K");
/// Degree Celsius, zero at 273.15 K.
pub const DEGREE_CELSIUS: Unit<AbsoluteTemperature> =
    Unit::offset_linear("°C", "degree Celsius", "°C", 1.0, 273.15).linked("°C");
/// Degree Fahrenheit, zero at 459.67 °R.
pub const DEGREE_FAHRENHEIT: Unit<AbsoluteTemperature> =
    Unit::offset_linear("°F", "degree Fahrenheit", "°F", 5.0 / 9.0, 459.67).linked("°F");

/// A vector of absolute temperatures.
pub type AbsoluteTemperatureVector = Vector<AbsoluteTemperature, Absolute>;
/// A matrix of absolute temperatures.
pub type AbsoluteTemperatureMatrix = Matrix<AbsoluteTemperature, Absolute>;
