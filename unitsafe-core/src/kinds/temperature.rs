//! Temperature differences.
//!
//! A difference of one degree Celsius equals one kelvin, so [`DEGREE_CELSIUS`] here is linear. The offset
//! scales live on [`AbsoluteTemperature`].

use super::absolute_temperature::AbsoluteTemperature;
use crate::{Kind, Matrix, Relative, SIDimensions, Unit, Vector};

/// Temperature difference kind (relative, linked to [`AbsoluteTemperature`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Kind)]
#[kind(
    name = "Temperature",
    dimensions = SIDimensions::TEMPERATURE,
    standard = KELVIN,
    units = [KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT],
    absolute = AbsoluteTemperature
)]
pub struct Temperature;

/// Kelvin, the standard unit.
pub const KELVIN: Unit<Temperature> = Unit::standard("K", "kelvin", "K").linked("K");
/// Degree Celsius difference.
pub const DEGREE_CELSIUS: Unit<Temperature> = Unit::linear("°C", "degree Celsius", "°C", 1.0).linked("°C");
/// Degree Fahrenheit difference.
pub const DEGREE_FAHRENHEIT: Unit<Temperature> =
    Unit::linear("°F", "degree Fahrenheit", "°F", 5.0 / 9.0).linked("°F");

/// A vector of temperature differences.
pub type TemperatureVector = Vector<Temperature, Relative>;
/// A matrix of temperature differences.
pub type TemperatureMatrix = Matrix<Temperature, Relative>;
