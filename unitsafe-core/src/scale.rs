//! Conversion between a unit's display value and the SI value of its kind.

/// How a unit maps display values to SI values.
///
/// `to_standard` and `from_standard` are mutual inverses for every variant.
#[derive(Clone, Copy, Debug, Default)]
pub enum Scale {
    /// The standard unit itself.
    #[default]
    Identity,
    /// `si = value * factor`.
    Linear {
        /// Multiplier to the standard unit.
        factor: f64,
    },
    /// `si = (value + offset) * factor`, e.g. degrees Celsius or Fahrenheit to kelvin.
    OffsetLinear {
        /// Multiplier to the standard unit, applied after the offset.
        factor: f64,
        /// Offset added before scaling.
        offset: f64,
    },
    /// `si = atan(value * factor)`, e.g. slope percent to radians.
    Grade {
        /// Multiplier applied to the display value before `atan`.
        factor: f64,
    },
    /// Arbitrary conversion given as a pair of inverse functions.
    Custom {
        /// Display value to SI value.
        to_standard: fn(f64) -> f64,
        /// SI value to display value.
        from_standard: fn(f64) -> f64,
    },
}

impl Scale {
    /// Convert a display value to the SI value.
    #[inline]
    pub fn to_standard(&self, value: f64) -> f64 {
        match *self {
            Scale::Identity => value,
            Scale::Linear { factor } => value * factor,
            Scale::OffsetLinear { factor, offset } => (value + offset) * factor,
            Scale::Grade { factor } => (value * factor).atan(),
            Scale::Custom { to_standard, .. } => to_standard(value),
        }
    }

    /// Convert an SI value to the display value.
    #[inline]
    pub fn from_standard(&self, si: f64) -> f64 {
        match *self {
            Scale::Identity => si,
            Scale::Linear { factor } => si / factor,
            Scale::OffsetLinear { factor, offset } => si / factor - offset,
            Scale::Grade { factor } => si.tan() / factor,
            Scale::Custom { from_standard, .. } => from_standard(si),
        }
    }

    /// `true` when the scale leaves values unchanged.
    pub fn is_standard(&self) -> bool {
        match *self {
            Scale::Identity => true,
            Scale::Linear { factor } => factor == 1.0,
            Scale::OffsetLinear { factor, offset } => factor == 1.0 && offset == 0.0,
            Scale::Grade { .. } | Scale::Custom { .. } => false,
        }
    }

    /// The multiplier of a purely linear scale (`1.0` for the identity), `None` otherwise.
    pub fn linear_factor(&self) -> Option<f64> {
        match *self {
            Scale::Identity => Some(1.0),
            Scale::Linear { factor } => Some(factor),
            _ => None,
        }
    }
}
