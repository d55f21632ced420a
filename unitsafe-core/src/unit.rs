//! Units of a kind.

use crate::dimension::SIDimensions;
use crate::error::{ValueError, ValueResult};
use crate::kind::{AbsoluteKind, Kind, RelativeWithAbsolute, SI};
use crate::scale::Scale;
use core::fmt;
use core::marker::PhantomData;

/// A concrete unit of kind `K`: an identity, an abbreviation, a [`Scale`] to the kind's standard unit and the
/// kind's SI-dimension vector.
///
/// Units are `Copy` constants. Absolute units may name their relative counterpart (and vice versa) by id with
/// [`Unit::linked`]; degrees Celsius as an absolute temperature links to degrees Celsius as a temperature
/// difference, for instance.
///
/// ```rust
/// use unitsafe_core::kinds::length::{KILOMETER, METER};
///
/// assert_eq!(KILOMETER.to_standard(1.5), 1500.0);
/// assert!(METER.is_standard());
/// assert_eq!(KILOMETER.to_string(), "km");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Unit<K: Kind> {
    id: &'static str,
    name: &'static str,
    abbreviation: &'static str,
    scale: Scale,
    dimensions: SIDimensions,
    counterpart: Option<&'static str>,
    _kind: PhantomData<K>,
}

impl<K: Kind> Unit<K> {
    /// The standard unit of `K` (identity scale).
    pub const fn standard(id: &'static str, name: &'static str, abbreviation: &'static str) -> Self {
        Self::with_scale(id, name, abbreviation, Scale::Identity)
    }

    /// A unit with `si = value * factor`.
    pub const fn linear(
        id: &'static str,
        name: &'static str,
        abbreviation: &'static str,
        factor: f64,
    ) -> Self {
        Self::with_scale(id, name, abbreviation, Scale::Linear { factor })
    }

    /// A unit with `si = (value + offset) * factor`.
    pub const fn offset_linear(
        id: &'static str,
        name: &'static str,
        abbreviation: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        Self::with_scale(id, name, abbreviation, Scale::OffsetLinear { factor, offset })
    }

    /// A unit with an arbitrary scale.
    pub const fn with_scale(
        id: &'static str,
        name: &'static str,
        abbreviation: &'static str,
        scale: Scale,
    ) -> Self {
        Self {
            id,
            name,
            abbreviation,
            scale,
            dimensions: K::DIMENSIONS,
            counterpart: None,
            _kind: PhantomData,
        }
    }

    /// Link this unit to the unit with id `counterpart` of the counterpart kind.
    pub const fn linked(self, counterpart: &'static str) -> Self {
        Self {
            counterpart: Some(counterpart),
            ..self
        }
    }

    /// Unique identifier within the kind.
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Printable abbreviation; empty for units synthesized from a dimension vector.
    pub const fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    /// Conversion to the kind's standard unit.
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// SI-dimension vector.
    pub const fn dimensions(&self) -> SIDimensions {
        self.dimensions
    }

    /// Id of the linked counterpart unit, if any.
    pub const fn counterpart(&self) -> Option<&'static str> {
        self.counterpart
    }

    /// Convert a value in this unit to the SI value.
    #[inline]
    pub fn to_standard(&self, value: f64) -> f64 {
        self.scale.to_standard(value)
    }

    /// Convert an SI value to this unit.
    #[inline]
    pub fn from_standard(&self, si: f64) -> f64 {
        self.scale.from_standard(si)
    }

    /// `true` when this unit's scale is the identity.
    pub fn is_standard(&self) -> bool {
        self.scale.is_standard()
    }

    /// Derive a new unit that is `factor` times this unit.
    ///
    /// Only linear (or standard) units can be derived from; anything else is a configuration error. The
    /// derived unit is not added to `K::UNITS`.
    ///
    /// ```rust
    /// use unitsafe_core::kinds::length::KILOMETER;
    ///
    /// let megameter = KILOMETER.derive_linear(1000.0, "Mm", "megameter", "Mm").unwrap();
    /// assert_eq!(megameter.to_standard(1.0), 1.0e6);
    /// ```
    pub fn derive_linear(
        &self,
        factor: f64,
        id: &'static str,
        name: &'static str,
        abbreviation: &'static str,
    ) -> ValueResult<Self> {
        let base = self.scale.linear_factor().ok_or_else(|| {
            ValueError::configuration(
                K::NAME,
                format!("cannot derive a linear unit from non-linear unit '{}'", self.id),
            )
        })?;
        Ok(Self {
            id,
            name,
            abbreviation,
            scale: Scale::Linear {
                factor: base * factor,
            },
            dimensions: self.dimensions,
            counterpart: None,
            _kind: PhantomData,
        })
    }

    /// Look up a unit of `K` by abbreviation.
    pub fn by_abbreviation(abbreviation: &str) -> ValueResult<Self> {
        K::UNITS
            .iter()
            .find(|u| u.abbreviation == abbreviation)
            .copied()
            .ok_or_else(|| {
                ValueError::unresolvable(format!(
                    "no unit '{}' for kind {}",
                    abbreviation,
                    K::NAME
                ))
            })
    }

    /// Look up a unit of `K` by id.
    pub fn by_id(id: &str) -> ValueResult<Self> {
        K::UNITS
            .iter()
            .find(|u| u.id == id)
            .copied()
            .ok_or_else(|| {
                ValueError::unresolvable(format!("no unit with id '{}' for kind {}", id, K::NAME))
            })
    }
}

impl Unit<SI> {
    /// The standard SI unit for a run-time dimension vector.
    ///
    /// Its abbreviation is empty; `Display` prints the dimension string instead.
    ///
    /// ```rust
    /// use unitsafe_core::{SIDimensions, Unit, SI};
    ///
    /// let unit = Unit::<SI>::from_dimensions(SIDimensions::LENGTH.minus(SIDimensions::TIME));
    /// assert_eq!(unit.to_string(), "m/s");
    /// ```
    pub const fn from_dimensions(dimensions: SIDimensions) -> Self {
        Self {
            id: "",
            name: "",
            abbreviation: "",
            scale: Scale::Identity,
            dimensions,
            counterpart: None,
            _kind: PhantomData,
        }
    }
}

impl<K: AbsoluteKind> Unit<K> {
    /// The relative unit linked to this absolute unit, or the relative kind's standard unit.
    pub fn relative_unit(&self) -> Unit<K::Relative> {
        self.counterpart
            .and_then(|id| Unit::<K::Relative>::by_id(id).ok())
            .unwrap_or(<K::Relative as Kind>::STANDARD)
    }
}

impl<K: RelativeWithAbsolute> Unit<K> {
    /// The absolute unit linked to this relative unit, or the absolute kind's standard unit.
    pub fn absolute_unit(&self) -> Unit<K::Absolute> {
        self.counterpart
            .and_then(|id| Unit::<K::Absolute>::by_id(id).ok())
            .unwrap_or(<K::Absolute as Kind>::STANDARD)
    }
}

impl<K: Kind> PartialEq for Unit<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.dimensions == other.dimensions
    }
}

impl<K: Kind> Eq for Unit<K> {}

impl<K: Kind> core::hash::Hash for Unit<K> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.dimensions.hash(state);
    }
}

impl<K: Kind> fmt::Display for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.abbreviation.is_empty() {
            write!(f, "{}", self.dimensions)
        } else {
            f.write_str(self.abbreviation)
        }
    }
}
