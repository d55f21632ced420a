//! SI-dimension algebra.
//!
//! An [`SIDimensions`] value is a vector of rational exponents over the ten base dimensions
//! `rad, sr, kg, m, s, A, K, mol, cd, $` (angle, solid angle, mass, length, time, current, temperature,
//! amount of substance, luminous intensity, money). Multiplying two quantities adds their exponent vectors,
//! dividing subtracts them, which is how the unit of a product or quotient is derived without a lookup table.
//!
//! Every algebra operation is a `const fn`, so kind descriptors can carry their dimension vector as a
//! constant.
//!
//! ```rust
//! use unitsafe_core::SIDimensions;
//!
//! let speed = SIDimensions::LENGTH.minus(SIDimensions::TIME);
//! assert_eq!(speed.to_string(), "m/s");
//! assert_eq!("m/s".parse::<SIDimensions>().unwrap(), speed);
//! ```

use crate::error::ValueError;
use core::fmt;
use core::str::FromStr;

/// Number of base dimensions.
pub const DIMENSION_COUNT: usize = 10;

/// Abbreviations of the base dimensions, in vector order.
pub const BASE_ABBREVIATIONS: [&str; DIMENSION_COUNT] =
    ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd", "$"];

// Longest abbreviations first so that "mol" wins over "m" and "sr" over "s".
const PARSE_ORDER: [usize; DIMENSION_COUNT] = [0, 7, 1, 2, 8, 3, 4, 5, 6, 9];

/// Rational exponents of the SI base dimensions.
///
/// Exponents are stored as normalized fractions: the numerator and denominator of each cell share no
/// common factor and a zero numerator always has denominator 1, so derived `Eq` and `Hash` are exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SIDimensions {
    numerators: [i8; DIMENSION_COUNT],
    denominators: [u8; DIMENSION_COUNT],
}

const fn gcd(a: i32, b: i32) -> i32 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a > i32::MAX as u32 {
        i32::MAX
    } else {
        a as i32
    }
}

impl SIDimensions {
    /// The dimensionless vector.
    pub const NONE: Self = Self::new([0; DIMENSION_COUNT]);
    /// Plane angle (`rad`).
    pub const ANGLE: Self = Self::base(0);
    /// Solid angle (`sr`).
    pub const SOLID_ANGLE: Self = Self::base(1);
    /// Mass (`kg`).
    pub const MASS: Self = Self::base(2);
    /// Length (`m`).
    pub const LENGTH: Self = Self::base(3);
    /// Time (`s`).
    pub const TIME: Self = Self::base(4);
    /// Electric current (`A`).
    pub const CURRENT: Self = Self::base(5);
    /// Thermodynamic temperature (`K`).
    pub const TEMPERATURE: Self = Self::base(6);
    /// Amount of substance (`mol`).
    pub const AMOUNT: Self = Self::base(7);
    /// Luminous intensity (`cd`).
    pub const LUMINOUS_INTENSITY: Self = Self::base(8);
    /// Money (`$`).
    pub const MONEY: Self = Self::base(9);

    /// Build a dimension vector from integer exponents.
    pub const fn new(exponents: [i8; DIMENSION_COUNT]) -> Self {
        Self {
            numerators: exponents,
            denominators: [1; DIMENSION_COUNT],
        }
    }

    /// Build a dimension vector from rational exponents.
    ///
    /// A zero denominator is treated as 1.
    pub const fn from_fractions(
        numerators: [i8; DIMENSION_COUNT],
        denominators: [u8; DIMENSION_COUNT],
    ) -> Self {
        let mut wide_num = [0i32; DIMENSION_COUNT];
        let mut wide_den = [1i32; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            wide_num[i] = numerators[i] as i32;
            wide_den[i] = if denominators[i] == 0 {
                1
            } else {
                denominators[i] as i32
            };
            i += 1;
        }
        // Reducing a fraction never grows its terms, so narrowing cannot fail here.
        match Self::narrowed(wide_num, wide_den) {
            Some(dims) => dims,
            None => Self::NONE,
        }
    }

    const fn base(index: usize) -> Self {
        let mut exponents = [0; DIMENSION_COUNT];
        exponents[index] = 1;
        Self::new(exponents)
    }

    /// Reduce every fraction and narrow it back to the stored width, or `None` when a reduced term does
    /// not fit.
    const fn narrowed(num: [i32; DIMENSION_COUNT], den: [i32; DIMENSION_COUNT]) -> Option<Self> {
        let mut numerators = [0i8; DIMENSION_COUNT];
        let mut denominators = [1u8; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            // Denominators are always positive.
            let (mut n, mut d) = (num[i], den[i]);
            if n == 0 {
                d = 1;
            } else {
                let g = gcd(n, d);
                n /= g;
                d /= g;
            }
            if n < i8::MIN as i32 || n > i8::MAX as i32 || d > u8::MAX as i32 {
                return None;
            }
            numerators[i] = n as i8;
            denominators[i] = d as u8;
            i += 1;
        }
        Some(Self {
            numerators,
            denominators,
        })
    }

    /// Dimensions of a product, or `None` when an exponent leaves the `i8`/`u8` range.
    pub const fn checked_plus(self, other: Self) -> Option<Self> {
        let mut num = [0i32; DIMENSION_COUNT];
        let mut den = [1i32; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            let (a, b) = (self.numerators[i] as i32, self.denominators[i] as i32);
            let (c, d) = (other.numerators[i] as i32, other.denominators[i] as i32);
            num[i] = a * d + c * b;
            den[i] = b * d;
            i += 1;
        }
        Self::narrowed(num, den)
    }

    /// Dimensions of a quotient, or `None` when an exponent leaves the `i8`/`u8` range.
    pub const fn checked_minus(self, other: Self) -> Option<Self> {
        let mut num = [0i32; DIMENSION_COUNT];
        let mut den = [1i32; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            let (a, b) = (self.numerators[i] as i32, self.denominators[i] as i32);
            let (c, d) = (other.numerators[i] as i32, other.denominators[i] as i32);
            num[i] = a * d - c * b;
            den[i] = b * d;
            i += 1;
        }
        Self::narrowed(num, den)
    }

    /// Dimensions of a reciprocal, or `None` when an exponent is `i8::MIN`.
    pub const fn checked_invert(self) -> Option<Self> {
        let mut numerators = self.numerators;
        let mut i = 0;
        while i < DIMENSION_COUNT {
            if numerators[i] == i8::MIN {
                return None;
            }
            numerators[i] = -numerators[i];
            i += 1;
        }
        Some(Self {
            numerators,
            denominators: self.denominators,
        })
    }

    /// Dimensions of an integer power, or `None` when an exponent leaves the `i8` range.
    pub const fn checked_pow(self, power: i8) -> Option<Self> {
        let mut num = [0i32; DIMENSION_COUNT];
        let mut den = [1i32; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            num[i] = self.numerators[i] as i32 * power as i32;
            den[i] = self.denominators[i] as i32;
            i += 1;
        }
        Self::narrowed(num, den)
    }

    /// Dimensions of a square root, or `None` when a denominator leaves the `u8` range.
    pub const fn checked_sqrt(self) -> Option<Self> {
        let mut num = [0i32; DIMENSION_COUNT];
        let mut den = [1i32; DIMENSION_COUNT];
        let mut i = 0;
        while i < DIMENSION_COUNT {
            num[i] = self.numerators[i] as i32;
            den[i] = self.denominators[i] as i32 * 2;
            i += 1;
        }
        Self::narrowed(num, den)
    }

    /// Dimensions of a product: exponents are added.
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8`/`u8` range; see [`SIDimensions::checked_plus`]. In a constant
    /// this is a compile error.
    pub const fn plus(self, other: Self) -> Self {
        match self.checked_plus(other) {
            Some(dims) => dims,
            None => panic!("SI dimension exponent overflow in product"),
        }
    }

    /// Dimensions of a quotient: exponents are subtracted.
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8`/`u8` range; see [`SIDimensions::checked_minus`].
    pub const fn minus(self, other: Self) -> Self {
        match self.checked_minus(other) {
            Some(dims) => dims,
            None => panic!("SI dimension exponent overflow in quotient"),
        }
    }

    /// Dimensions of a reciprocal: exponents are negated.
    ///
    /// # Panics
    ///
    /// Panics when an exponent is `i8::MIN`; see [`SIDimensions::checked_invert`].
    pub const fn invert(self) -> Self {
        match self.checked_invert() {
            Some(dims) => dims,
            None => panic!("SI dimension exponent overflow in reciprocal"),
        }
    }

    /// Dimensions of an integer power: exponents are multiplied by `power`.
    ///
    /// # Panics
    ///
    /// Panics when an exponent leaves the `i8` range; see [`SIDimensions::checked_pow`].
    pub const fn pow(self, power: i8) -> Self {
        match self.checked_pow(power) {
            Some(dims) => dims,
            None => panic!("SI dimension exponent overflow in power"),
        }
    }

    /// Dimensions of a square root: exponents are halved.
    ///
    /// # Panics
    ///
    /// Panics when a denominator leaves the `u8` range; see [`SIDimensions::checked_sqrt`].
    pub const fn sqrt(self) -> Self {
        match self.checked_sqrt() {
            Some(dims) => dims,
            None => panic!("SI dimension exponent overflow in square root"),
        }
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < DIMENSION_COUNT {
            if self.numerators[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when at least one exponent is not an integer.
    pub const fn is_fractional(&self) -> bool {
        let mut i = 0;
        while i < DIMENSION_COUNT {
            if self.denominators[i] != 1 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Exponent of base dimension `index` as `(numerator, denominator)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= DIMENSION_COUNT`.
    pub const fn exponent(&self, index: usize) -> (i8, u8) {
        (self.numerators[index], self.denominators[index])
    }

    fn parse_part(
        part: &str,
        sign: i32,
        num: &mut [i32; DIMENSION_COUNT],
        den: &mut [i32; DIMENSION_COUNT],
    ) -> Result<(), ValueError> {
        if part == "1" || part.is_empty() {
            return if part.is_empty() && sign < 0 {
                Err(ValueError::malformed("empty denominator in dimension string"))
            } else {
                Ok(())
            };
        }

        let bytes = part.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            if bytes[pos] == b'.' {
                pos += 1;
                continue;
            }

            let rest = &part[pos..];
            let index = PARSE_ORDER
                .iter()
                .copied()
                .find(|&i| rest.starts_with(BASE_ABBREVIATIONS[i]))
                .ok_or_else(|| {
                    ValueError::malformed(format!("unknown dimension at '{}' in '{}'", rest, part))
                })?;
            pos += BASE_ABBREVIATIONS[index].len();

            let (n, d, used) = Self::parse_exponent(&part[pos..])?;
            pos += used;

            // a/b + n/d
            let (a, b) = (num[index], den[index]);
            let overflow = || ValueError::malformed(format!("exponent out of range in '{}'", part));
            let sum = a
                .checked_mul(d)
                .zip(n.checked_mul(sign).and_then(|n| n.checked_mul(b)))
                .and_then(|(ad, nb)| ad.checked_add(nb))
                .ok_or_else(overflow)?;
            num[index] = sum;
            den[index] = b.checked_mul(d).ok_or_else(overflow)?;
        }
        Ok(())
    }

    /// Parse the exponent that follows a base abbreviation: `2`, `-1`, `^2`, `^-1`, `^(1/2)` or nothing.
    /// Returns `(numerator, denominator, bytes consumed)`.
    fn parse_exponent(s: &str) -> Result<(i32, i32, usize), ValueError> {
        let mut used = 0;
        let mut rest = s;
        if let Some(stripped) = rest.strip_prefix('^') {
            used += 1;
            rest = stripped;
            if let Some(inner) = rest.strip_prefix('(') {
                let close = inner
                    .find(')')
                    .ok_or_else(|| ValueError::malformed(format!("unclosed exponent in '{}'", s)))?;
                let (n, d) = inner[..close]
                    .split_once('/')
                    .ok_or_else(|| ValueError::malformed(format!("expected n/d exponent in '{}'", s)))?;
                let n: i32 = n
                    .trim()
                    .parse()
                    .map_err(|_| ValueError::malformed(format!("bad exponent numerator in '{}'", s)))?;
                let d: i32 = d
                    .trim()
                    .parse()
                    .map_err(|_| ValueError::malformed(format!("bad exponent denominator in '{}'", s)))?;
                if d <= 0 {
                    return Err(ValueError::malformed(format!(
                        "exponent denominator must be positive in '{}'",
                        s
                    )));
                }
                return Ok((n, d, used + close + 2));
            }
        }

        let mut len = 0;
        let bytes = rest.as_bytes();
        if bytes.first() == Some(&b'-') {
            len += 1;
        }
        let digits_start = len;
        while len < bytes.len() && bytes[len].is_ascii_digit() {
            len += 1;
        }

        if len == digits_start {
            if len > 0 || used > 0 {
                return Err(ValueError::malformed(format!(
                    "dangling exponent sign in '{}'",
                    s
                )));
            }
            return Ok((1, 1, 0));
        }

        let value: i32 = rest[..len]
            .parse()
            .map_err(|_| ValueError::malformed(format!("bad exponent in '{}'", s)))?;
        Ok((value, 1, used + len))
    }
}

/// Dimensions of a product, with exponent overflow reported as [`ValueError::DimensionOverflow`].
pub(crate) fn product(left: SIDimensions, right: SIDimensions) -> Result<SIDimensions, ValueError> {
    left.checked_plus(right)
        .ok_or_else(|| ValueError::dimension_overflow(format!("product of [{}] and [{}]", left, right)))
}

/// Dimensions of a quotient, with exponent overflow reported as [`ValueError::DimensionOverflow`].
pub(crate) fn quotient(left: SIDimensions, right: SIDimensions) -> Result<SIDimensions, ValueError> {
    left.checked_minus(right)
        .ok_or_else(|| ValueError::dimension_overflow(format!("quotient of [{}] and [{}]", left, right)))
}

impl Default for SIDimensions {
    fn default() -> Self {
        Self::NONE
    }
}

impl FromStr for SIDimensions {
    type Err = ValueError;

    /// Parse forms like `"kgm2/s3"`, `"kg.m2/s3"`, `"m/s"`, `"1"`, `"s-1"` and `"m^2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValueError::malformed("empty dimension string"));
        }

        let mut parts = s.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(ValueError::malformed(format!(
                "more than one '/' in dimension string '{}'",
                s
            )));
        }

        let mut num = [0i32; DIMENSION_COUNT];
        let mut den = [1i32; DIMENSION_COUNT];
        Self::parse_part(numerator, 1, &mut num, &mut den)?;
        if let Some(denominator) = denominator {
            Self::parse_part(denominator, -1, &mut num, &mut den)?;
        }

        Self::narrowed(num, den)
            .ok_or_else(|| ValueError::malformed(format!("exponent out of range in '{}'", s)))
    }
}

fn write_exponent(f: &mut fmt::Formatter<'_>, num: i32, den: u8) -> fmt::Result {
    match (num, den) {
        (1, 1) => Ok(()),
        (n, 1) => write!(f, "{}", n),
        (n, d) => write!(f, "^({}/{})", n, d),
    }
}

impl fmt::Display for SIDimensions {
    /// Divided form with `.` separators, e.g. `kg.m2/s3`; `1` when dimensionless.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }

        let positive: Vec<usize> = (0..DIMENSION_COUNT)
            .filter(|&i| self.numerators[i] > 0)
            .collect();
        let negative: Vec<usize> = (0..DIMENSION_COUNT)
            .filter(|&i| self.numerators[i] < 0)
            .collect();

        if positive.is_empty() {
            f.write_str("1")?;
        }
        for (k, &i) in positive.iter().enumerate() {
            if k > 0 {
                f.write_str(".")?;
            }
            f.write_str(BASE_ABBREVIATIONS[i])?;
            write_exponent(f, self.numerators[i] as i32, self.denominators[i])?;
        }

        if !negative.is_empty() {
            f.write_str("/")?;
            for (k, &i) in negative.iter().enumerate() {
                if k > 0 {
                    f.write_str(".")?;
                }
                f.write_str(BASE_ABBREVIATIONS[i])?;
                write_exponent(f, -(self.numerators[i] as i32), self.denominators[i])?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SIDimensions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SIDimensions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
