//! Scalar values with a kind, a nature and a display unit.

use crate::dimension::{self, SIDimensions};
use crate::error::{ValueError, ValueResult};
use crate::kind::{AbsoluteKind, Kind, RelativeKind, RelativeWithAbsolute, SI};
use crate::kinds::angle::Angle;
use crate::kinds::dimensionless::{self, Dimensionless};
use crate::nature::{Absolute, Admissible, Nature, Relative};
use crate::registry::{KindEntry, Registry};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// A single value of kind `K` and nature `N`.
///
/// The value is stored in SI and carries a display unit, which only affects [`Scalar::value`] and formatting.
/// Scalars are `Copy` and immutable.
///
/// Additive arithmetic follows the absolute/relative lattice and is checked at compile time:
///
/// ```rust
/// use unitsafe_core::kinds::{duration, time};
/// use unitsafe_core::{AbsScalar, RelScalar};
///
/// let start = AbsScalar::new(10.0, time::SECOND);
/// let end = AbsScalar::new(70.0, time::SECOND);
/// let elapsed = end - start; // absolute - absolute = relative
/// assert_eq!(elapsed.in_unit(duration::MINUTE), 1.0);
///
/// let later = start + RelScalar::new(5.0, duration::SECOND); // absolute + relative = absolute
/// assert_eq!(later.si(), 15.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scalar<K: Kind, N: Nature> {
    si: f64,
    unit: Unit<K>,
    _nature: PhantomData<N>,
}

/// An absolute scalar, such as a position or a point in time.
pub type AbsScalar<K> = Scalar<K, Absolute>;
/// A relative scalar, such as a length or a duration.
pub type RelScalar<K> = Scalar<K, Relative>;

impl<K: Admissible<N>, N: Nature> Scalar<K, N> {
    /// A scalar of `value` expressed in `unit`.
    #[inline]
    pub fn new(value: f64, unit: Unit<K>) -> Self {
        Self::from_si(unit.to_standard(value), unit)
    }

    /// A scalar from an SI value, displayed in `unit`.
    #[inline]
    pub const fn from_si(si: f64, unit: Unit<K>) -> Self {
        Self {
            si,
            unit,
            _nature: PhantomData,
        }
    }

    /// The same SI value displayed in another unit.
    #[inline]
    pub fn with_unit(self, unit: Unit<K>) -> Self {
        Self::from_si(self.si, unit)
    }

    /// Absolute value of the display value.
    pub fn abs(self) -> Self {
        self.map_display(f64::abs)
    }

    /// Smallest integer not below the display value.
    pub fn ceil(self) -> Self {
        self.map_display(f64::ceil)
    }

    /// Largest integer not above the display value.
    pub fn floor(self) -> Self {
        self.map_display(f64::floor)
    }

    /// Display value rounded to the nearest integer, ties to even.
    pub fn rint(self) -> Self {
        self.map_display(f64::round_ties_even)
    }

    /// Negated display value. Unlike the `Neg` operator this is defined for absolute scalars too.
    pub fn neg(self) -> Self {
        self.map_display(|v| -v)
    }

    /// The smaller of two scalars by SI value.
    pub fn min(self, other: Self) -> Self {
        if other.si < self.si {
            other
        } else {
            self
        }
    }

    /// The larger of two scalars by SI value.
    pub fn max(self, other: Self) -> Self {
        if other.si > self.si {
            other
        } else {
            self
        }
    }

    /// Linear interpolation between `zero` (ratio 0) and `one` (ratio 1), in the unit of `zero`.
    pub fn interpolate(zero: Self, one: Self, ratio: f64) -> Self {
        let value = zero.value() * (1.0 - ratio) + one.in_unit(zero.unit) * ratio;
        Self::new(value, zero.unit)
    }

    fn map_display(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.value()), self.unit)
    }
}

impl<K: Kind, N: Nature> Scalar<K, N> {
    /// The SI value.
    #[inline]
    pub const fn si(&self) -> f64 {
        self.si
    }

    /// The value in the display unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.unit.from_standard(self.si)
    }

    /// The value in `unit`.
    #[inline]
    pub fn in_unit(&self, unit: Unit<K>) -> f64 {
        unit.from_standard(self.si)
    }

    /// The display unit.
    #[inline]
    pub const fn unit(&self) -> Unit<K> {
        self.unit
    }

    /// SI-dimension vector of the value.
    #[inline]
    pub const fn dimensions(&self) -> SIDimensions {
        self.unit.dimensions()
    }

    /// `true` when the SI value is zero.
    pub fn is_zero(&self) -> bool {
        self.si == 0.0
    }
}

fn dimension_overflow(op: &str, dims: SIDimensions, argument: impl fmt::Display) -> ValueError {
    ValueError::dimension_overflow(format!("{} of [{}] with {}", op, dims, argument))
}

impl<K: Admissible<Relative>> Scalar<K, Relative> {
    /// Product with another relative scalar; the dimension vectors add.
    ///
    /// This is the checked form of `*`: an exponent that leaves the representable range is reported as
    /// [`ValueError::DimensionOverflow`].
    pub fn times<K2: Admissible<Relative>>(self, rhs: Scalar<K2, Relative>) -> ValueResult<Scalar<SI, Relative>> {
        let dims = dimension::product(self.dimensions(), rhs.dimensions())?;
        Ok(Scalar::from_si(self.si * rhs.si, Unit::from_dimensions(dims)))
    }

    /// Quotient by another relative scalar; the dimension vectors subtract. Checked form of `/`.
    pub fn divide<K2: Admissible<Relative>>(self, rhs: Scalar<K2, Relative>) -> ValueResult<Scalar<SI, Relative>> {
        let dims = dimension::quotient(self.dimensions(), rhs.dimensions())?;
        Ok(Scalar::from_si(self.si / rhs.si, Unit::from_dimensions(dims)))
    }

    /// The reciprocal, as an SI-dimensioned scalar.
    pub fn reciprocal(self) -> ValueResult<Scalar<SI, Relative>> {
        let dims = self
            .dimensions()
            .checked_invert()
            .ok_or_else(|| dimension_overflow("reciprocal", self.dimensions(), "-1"))?;
        Ok(Scalar::from_si(1.0 / self.si, Unit::from_dimensions(dims)))
    }

    /// The square root, as an SI-dimensioned scalar with halved exponents.
    pub fn sqrt(self) -> ValueResult<Scalar<SI, Relative>> {
        let dims = self
            .dimensions()
            .checked_sqrt()
            .ok_or_else(|| dimension_overflow("square root", self.dimensions(), "1/2"))?;
        Ok(Scalar::from_si(self.si.sqrt(), Unit::from_dimensions(dims)))
    }

    /// An integer power, as an SI-dimensioned scalar.
    pub fn powi(self, power: i8) -> ValueResult<Scalar<SI, Relative>> {
        let dims = self
            .dimensions()
            .checked_pow(power)
            .ok_or_else(|| dimension_overflow("power", self.dimensions(), power))?;
        Ok(Scalar::from_si(self.si.powi(power as i32), Unit::from_dimensions(dims)))
    }

    /// The same value with its dimension vector only known at run time.
    pub fn to_si(self) -> Scalar<SI, Relative> {
        Scalar::from_si(self.si, Unit::from_dimensions(self.dimensions()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI-dimensioned scalars
// ─────────────────────────────────────────────────────────────────────────────

impl Scalar<SI, Relative> {
    fn check_dimensions(&self, other: &Self) -> ValueResult<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(ValueError::incompatible(self.unit, other.unit))
        }
    }

    /// Sum of two SI scalars with the same dimension vector.
    pub fn plus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_si(self.si + other.si, self.unit))
    }

    /// Difference of two SI scalars with the same dimension vector.
    pub fn minus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_si(self.si - other.si, self.unit))
    }

    /// Resolve into the relative kind `K`, displayed in its standard unit.
    ///
    /// Fails with [`ValueError::IncompatibleUnits`] when the dimension vectors differ and with
    /// [`ValueError::UnresolvableUnit`] when `K` is not registered.
    ///
    /// ```rust
    /// use unitsafe_core::kinds::{frequency, length, speed::Speed};
    /// use unitsafe_core::RelScalar;
    ///
    /// let product = RelScalar::new(10.0, length::METER) * RelScalar::new(2.0, frequency::HERTZ);
    /// let speed = product.as_kind::<Speed>().unwrap();
    /// assert_eq!(speed.si(), 20.0);
    /// assert_eq!(speed.to_string(), "20 m/s");
    /// ```
    pub fn as_kind<K: RelativeKind>(&self) -> ValueResult<Scalar<K, Relative>> {
        Registry::global().instantiate_scalar::<K>(self.si, &self.unit)
    }

    /// The registered kind whose dimension vector matches this value.
    pub fn resolve_kind(&self) -> ValueResult<KindEntry> {
        Registry::global().resolve(&self.dimensions())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless and angular math
// ─────────────────────────────────────────────────────────────────────────────

impl Scalar<Dimensionless, Relative> {
    fn ratio(value: f64) -> Self {
        Self::from_si(value, dimensionless::UNIT)
    }

    /// `e` raised to this value.
    pub fn exp(self) -> Self {
        Self::ratio(self.si.exp())
    }

    /// Natural logarithm.
    pub fn ln(self) -> Self {
        Self::ratio(self.si.ln())
    }

    /// Sine, reading the value as radians.
    pub fn sin(self) -> Self {
        Self::ratio(self.si.sin())
    }

    /// Cosine, reading the value as radians.
    pub fn cos(self) -> Self {
        Self::ratio(self.si.cos())
    }

    /// Tangent, reading the value as radians.
    pub fn tan(self) -> Self {
        Self::ratio(self.si.tan())
    }

    /// Real power.
    pub fn pow(self, exponent: f64) -> Self {
        Self::ratio(self.si.powf(exponent))
    }
}

impl Scalar<Angle, Relative> {
    /// Sine of the angle.
    pub fn sin(self) -> f64 {
        self.si.sin()
    }

    /// Cosine of the angle.
    pub fn cos(self) -> f64 {
        self.si.cos()
    }

    /// Tangent of the angle.
    pub fn tan(self) -> f64 {
        self.si.tan()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators: the absolute/relative lattice
// ─────────────────────────────────────────────────────────────────────────────

/// relative + relative = relative
impl<K: RelativeKind> Add for Scalar<K, Relative> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_si(self.si + rhs.si, self.unit)
    }
}

/// relative - relative = relative
impl<K: RelativeKind> Sub for Scalar<K, Relative> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_si(self.si - rhs.si, self.unit)
    }
}

/// absolute + relative = absolute
impl<K: AbsoluteKind> Add<Scalar<K::Relative, Relative>> for Scalar<K, Absolute> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Scalar<K::Relative, Relative>) -> Self {
        Self::from_si(self.si + rhs.si, self.unit)
    }
}

/// absolute - relative = absolute
impl<K: AbsoluteKind> Sub<Scalar<K::Relative, Relative>> for Scalar<K, Absolute> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Scalar<K::Relative, Relative>) -> Self {
        Self::from_si(self.si - rhs.si, self.unit)
    }
}

/// absolute - absolute = relative
impl<K: AbsoluteKind> Sub for Scalar<K, Absolute> {
    type Output = Scalar<K::Relative, Relative>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Scalar::from_si(self.si - rhs.si, self.unit.relative_unit())
    }
}

/// relative + absolute = absolute
impl<K: RelativeWithAbsolute> Add<Scalar<K::Absolute, Absolute>> for Scalar<K, Relative> {
    type Output = Scalar<K::Absolute, Absolute>;
    #[inline]
    fn add(self, rhs: Scalar<K::Absolute, Absolute>) -> Self::Output {
        Scalar::from_si(self.si + rhs.si, rhs.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators (relative only)
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Admissible<Relative>> Neg for Scalar<K, Relative> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_si(-self.si, self.unit)
    }
}

impl<K: Admissible<Relative>> Mul<f64> for Scalar<K, Relative> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.si * rhs, self.unit)
    }
}

impl<K: Admissible<Relative>> Mul<Scalar<K, Relative>> for f64 {
    type Output = Scalar<K, Relative>;
    #[inline]
    fn mul(self, rhs: Scalar<K, Relative>) -> Self::Output {
        rhs * self
    }
}

impl<K: Admissible<Relative>> Div<f64> for Scalar<K, Relative> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.si / rhs, self.unit)
    }
}

/// Product of two relative scalars: the dimension vectors add.
///
/// # Panics
///
/// Panics when an exponent of the product leaves the `i8` range. [`Scalar::times`] reports that as an error.
impl<K1: Admissible<Relative>, K2: Admissible<Relative>> Mul<Scalar<K2, Relative>> for Scalar<K1, Relative> {
    type Output = Scalar<SI, Relative>;
    #[inline]
    fn mul(self, rhs: Scalar<K2, Relative>) -> Self::Output {
        Scalar::from_si(
            self.si * rhs.si,
            Unit::from_dimensions(self.dimensions().plus(rhs.dimensions())),
        )
    }
}

/// Quotient of two relative scalars: the dimension vectors subtract.
///
/// # Panics
///
/// Panics when an exponent of the quotient leaves the `i8` range. [`Scalar::divide`] reports that as an error.
impl<K1: Admissible<Relative>, K2: Admissible<Relative>> Div<Scalar<K2, Relative>> for Scalar<K1, Relative> {
    type Output = Scalar<SI, Relative>;
    #[inline]
    fn div(self, rhs: Scalar<K2, Relative>) -> Self::Output {
        Scalar::from_si(
            self.si / rhs.si,
            Unit::from_dimensions(self.dimensions().minus(rhs.dimensions())),
        )
    }
}

impl<K: RelativeKind> core::iter::Sum for Scalar<K, Relative> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut unit = None;
        let si = iter.fold(0.0, |acc, s| {
            unit.get_or_insert(s.unit);
            acc + s.si
        });
        Self::from_si(si, unit.unwrap_or(K::STANDARD))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison and formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind, N: Nature> PartialEq for Scalar<K, N> {
    /// SI values are compared regardless of display unit.
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si && self.dimensions() == other.dimensions()
    }
}

impl<K: Kind, N: Nature> PartialOrd for Scalar<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimensions() != other.dimensions() {
            return None;
        }
        self.si.partial_cmp(&other.si)
    }
}

impl<K: Kind, N: Nature> fmt::Display for Scalar<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)?;
        write!(f, " {}", self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    impl<K: Kind, N: Nature> Serialize for Scalar<K, N> {
        /// `{"value": <display value>, "unit": "<abbreviation>"}`
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Scalar", 2)?;
            state.serialize_field("value", &self.value())?;
            state.serialize_field("unit", &self.unit.to_string())?;
            state.end()
        }
    }

    impl<'de, K: Admissible<N>, N: Nature> Deserialize<'de> for Scalar<K, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            #[serde(field_identifier, rename_all = "lowercase")]
            enum Field {
                Value,
                Unit,
            }

            struct ScalarVisitor<K, N>(PhantomData<(K, N)>);

            impl<'de, K: Admissible<N>, N: Nature> Visitor<'de> for ScalarVisitor<K, N> {
                type Value = Scalar<K, N>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("struct Scalar with value and unit fields")
                }

                fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Scalar<K, N>, V::Error> {
                    let mut value: Option<f64> = None;
                    let mut unit: Option<String> = None;

                    while let Some(key) = map.next_key()? {
                        match key {
                            Field::Value => {
                                if value.is_some() {
                                    return Err(de::Error::duplicate_field("value"));
                                }
                                value = Some(map.next_value()?);
                            }
                            Field::Unit => {
                                if unit.is_some() {
                                    return Err(de::Error::duplicate_field("unit"));
                                }
                                unit = Some(map.next_value()?);
                            }
                        }
                    }

                    let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                    let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;
                    let unit = K::parse_unit(&unit).map_err(de::Error::custom)?;
                    Ok(Scalar::new(value, unit))
                }
            }

            deserializer.deserialize_struct("Scalar", &["value", "unit"], ScalarVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::absolute_temperature::{self, AbsoluteTemperature};
    use crate::kinds::length::{self, Length};
    use crate::kinds::position::{self, Position};
    use crate::kinds::speed::Speed;
    use crate::kinds::{angle, duration, frequency, mass, temperature};
    use approx::assert_abs_diff_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn stores_si_and_displays_in_unit() {
        let d = RelScalar::new(1.5, length::KILOMETER);
        assert_eq!(d.si(), 1500.0);
        assert_eq!(d.value(), 1.5);
        assert_eq!(d.in_unit(length::METER), 1500.0);
        assert_eq!(d.to_string(), "1.5 km");
        assert_eq!(d.with_unit(length::METER).to_string(), "1500 m");
    }

    #[test]
    fn equality_ignores_display_unit() {
        let a = RelScalar::new(1.0, length::KILOMETER);
        let b = RelScalar::new(1000.0, length::METER);
        assert_eq!(a, b);
        assert!(RelScalar::new(2.0, length::METER) < a);
    }

    #[test]
    fn offset_units() {
        let t = AbsScalar::new(0.0, absolute_temperature::DEGREE_CELSIUS);
        assert_abs_diff_eq!(t.si(), 273.15);
        assert_abs_diff_eq!(t.in_unit(absolute_temperature::DEGREE_FAHRENHEIT), 32.0, epsilon = 1e-9);
        let warmer = t + RelScalar::new(10.0, temperature::KELVIN);
        assert_abs_diff_eq!(warmer.value(), 10.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lattice
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn absolute_minus_absolute_is_relative() {
        let p1: AbsScalar<Position> = AbsScalar::new(3.0, position::KILOMETER);
        let p2 = AbsScalar::new(1000.0, position::METER);
        let d: RelScalar<Length> = p1 - p2;
        assert_eq!(d.si(), 2000.0);
        assert_eq!(d.unit(), length::KILOMETER);
    }

    #[test]
    fn absolute_plus_minus_relative_is_absolute() {
        let p = AbsScalar::new(10.0, position::METER);
        let l = RelScalar::new(4.0, length::METER);
        let moved: AbsScalar<Position> = p - l;
        assert_eq!(moved.si(), 6.0);
        let moved: AbsScalar<Position> = l + p;
        assert_eq!(moved.si(), 14.0);
        assert_eq!(moved.unit(), position::METER);
    }

    #[test]
    fn absolute_temperature_difference_uses_linked_unit() {
        let a = AbsScalar::new(20.0, absolute_temperature::DEGREE_CELSIUS);
        let b = AbsScalar::new(5.0, absolute_temperature::DEGREE_CELSIUS);
        let diff = a - b;
        assert_abs_diff_eq!(diff.si(), 15.0, epsilon = 1e-9);
        assert_eq!(diff.unit(), temperature::DEGREE_CELSIUS);
        let _: AbsScalar<AbsoluteTemperature> = b + diff;
    }

    #[test]
    fn relative_scaling() {
        let d = RelScalar::new(2.0, duration::MINUTE);
        assert_eq!((d * 3.0).si(), 360.0);
        assert_eq!((3.0 * d).si(), 360.0);
        assert_eq!((d / 4.0).si(), 30.0);
        assert_eq!((-d).si(), -120.0);
        assert_eq!((d + d - d).value(), 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dimension algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_derives_dimensions() {
        let product = RelScalar::new(10.0, length::METER) * RelScalar::new(2.0, frequency::HERTZ);
        assert_eq!(product.si(), 20.0);
        assert_eq!(product.dimensions(), SIDimensions::LENGTH.minus(SIDimensions::TIME));
        assert_eq!(product.to_string(), "20 m/s");
        let speed = product.as_kind::<Speed>().unwrap();
        assert_eq!(speed.si(), 20.0);
        assert_eq!(product.resolve_kind().unwrap().name, "Speed");
    }

    #[test]
    fn as_kind_checks_dimensions() {
        let product = RelScalar::new(10.0, length::METER) * RelScalar::new(2.0, mass::KILOGRAM);
        assert!(matches!(
            product.as_kind::<Speed>(),
            Err(ValueError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn si_additive_ops_check_dimensions() {
        let a = RelScalar::new(2.0, length::METER) / RelScalar::new(1.0, duration::SECOND);
        let b = RelScalar::new(3.0, length::METER) * RelScalar::new(1.0, frequency::HERTZ);
        assert_eq!(a.plus(&b).unwrap().si(), 5.0);
        assert_eq!(a.minus(&b).unwrap().si(), -1.0);
        let c = RelScalar::new(3.0, length::METER).to_si();
        assert!(matches!(a.plus(&c), Err(ValueError::IncompatibleUnits { .. })));
    }

    #[test]
    fn reciprocal_sqrt_and_powers() {
        let t = RelScalar::new(4.0, duration::SECOND);
        let f = t.reciprocal().unwrap();
        assert_eq!(f.si(), 0.25);
        assert_eq!(f.dimensions(), SIDimensions::TIME.invert());
        let root = t.sqrt().unwrap();
        assert_eq!(root.si(), 2.0);
        assert!(root.dimensions().is_fractional());
        let area = RelScalar::new(3.0, length::METER).powi(2).unwrap();
        assert_eq!(area.si(), 9.0);
        assert_eq!(area.dimensions(), SIDimensions::LENGTH.pow(2));
    }

    #[test]
    fn checked_product_matches_operator() {
        let d = RelScalar::new(10.0, length::METER);
        let f = RelScalar::new(2.0, frequency::HERTZ);
        assert_eq!(d.times(f).unwrap(), d * f);
        assert_eq!(d.divide(f).unwrap(), d / f);
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let big = RelScalar::new(2.0, length::METER).powi(100).unwrap();
        assert_eq!(big.dimensions().exponent(3), (100, 1));
        let err = big.to_si().times(big).unwrap_err();
        assert!(matches!(err, ValueError::DimensionOverflow { .. }), "got {:?}", err);
        assert!(err.to_string().contains("product"));
        assert!(big.divide(big.reciprocal().unwrap()).is_err());

        let low = RelScalar::new(2.0, length::METER).powi(i8::MIN).unwrap();
        assert!(matches!(low.reciprocal(), Err(ValueError::DimensionOverflow { .. })));
        assert!(RelScalar::new(2.0, length::METER).powi(100).unwrap().powi(2).is_err());
    }

    #[test]
    fn repeated_sqrt_reports_overflow() {
        let mut x = RelScalar::new(2.0, length::METER).to_si();
        for _ in 0..7 {
            x = x.sqrt().unwrap();
        }
        assert_eq!(x.dimensions().exponent(3), (1, 128));
        assert!(matches!(x.sqrt(), Err(ValueError::DimensionOverflow { .. })));
    }

    #[test]
    #[should_panic(expected = "SI dimension exponent overflow")]
    fn product_operator_panics_on_overflow() {
        let big = RelScalar::new(2.0, length::METER).powi(100).unwrap();
        let _ = big * big;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display-value helpers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn rounding_helpers_work_on_display_value() {
        let d = RelScalar::new(-1.5, length::KILOMETER);
        assert_eq!(d.abs().value(), 1.5);
        assert_eq!(d.ceil().value(), -1.0);
        assert_eq!(d.floor().value(), -2.0);
        assert_eq!(d.rint().value(), -2.0);
        assert_eq!(RelScalar::new(2.5, length::METER).rint().value(), 2.0);
        assert_eq!(d.neg().value(), 1.5);
        let p = AbsScalar::new(-3.2, position::METER);
        assert_eq!(p.abs().si(), 3.2);
    }

    #[test]
    fn min_max_interpolate() {
        let a = RelScalar::new(1.0, length::KILOMETER);
        let b = RelScalar::new(500.0, length::METER);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
        let mid = RelScalar::interpolate(a, b, 0.5);
        assert_eq!(mid.unit(), length::KILOMETER);
        assert_abs_diff_eq!(mid.value(), 0.75);
        assert!(RelScalar::new(0.0, length::METER).is_zero());
    }

    #[test]
    fn dimensionless_and_angle_math() {
        let x = RelScalar::new(0.0, crate::kinds::dimensionless::UNIT);
        assert_eq!(x.exp().si(), 1.0);
        assert_eq!(x.cos().si(), 1.0);
        let two = RelScalar::new(2.0, crate::kinds::dimensionless::UNIT);
        assert_eq!(two.pow(3.0).si(), 8.0);
        assert_abs_diff_eq!(two.ln().si(), core::f64::consts::LN_2);
        let right = RelScalar::new(90.0, angle::DEGREE);
        assert_abs_diff_eq!(right.sin(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sum_of_relative_scalars() {
        let total: RelScalar<Length> = [1.0, 2.0, 3.0]
            .iter()
            .map(|&v| RelScalar::new(v, length::KILOMETER))
            .sum();
        assert_eq!(total.si(), 6000.0);
        assert_eq!(total.unit(), length::KILOMETER);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_value_and_unit() {
        let d = RelScalar::new(2.5, length::KILOMETER);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"value":2.5,"unit":"km"}"#);
        let back: RelScalar<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert_eq!(back.unit(), length::KILOMETER);

        let bad = serde_json::from_str::<RelScalar<Length>>(r#"{"value":1.0,"unit":"kg"}"#);
        assert!(bad.is_err());

        let product = RelScalar::new(10.0, length::METER) * RelScalar::new(2.0, frequency::HERTZ);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"value":20.0,"unit":"m/s"}"#);
        let back: Scalar<SI, Relative> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
