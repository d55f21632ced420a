//! Kind descriptors and their nature traits.
//!
//! A *kind* is a measurable quantity such as length or temperature. It is modeled as a zero-sized marker type
//! implementing [`Kind`], which carries the kind's name, SI-dimension vector, nature, standard unit and unit list as
//! associated constants. Kinds are usually declared with `#[derive(Kind)]`.
//!
//! The nature traits encode the absolute/relative lattice:
//!
//! - [`RelativeKind`]: differences and magnitudes (a duration, a length). They add, subtract, scale and multiply.
//! - [`AbsoluteKind`]: positions on a scale (a point in time, a position). Each names its relative counterpart.
//! - [`RelativeWithAbsolute`]: a relative kind that links back to an absolute kind, so `relative + absolute`
//!   yields an absolute value.

use crate::dimension::SIDimensions;
use crate::error::ValueResult;
use crate::unit::Unit;
use core::fmt::Debug;

/// Nature of a kind, as recorded in its descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindNature {
    /// A position on a scale; `relative` is the name of its relative counterpart.
    Absolute {
        /// Name of the relative counterpart kind.
        relative: &'static str,
    },
    /// A relative kind without an absolute counterpart.
    Relative,
    /// A relative kind whose absolute counterpart is named `absolute`.
    RelativeWithAbsolute {
        /// Name of the absolute counterpart kind.
        absolute: &'static str,
    },
}

impl KindNature {
    /// `true` for absolute kinds.
    pub const fn is_absolute(&self) -> bool {
        matches!(self, KindNature::Absolute { .. })
    }

    /// `true` for relative kinds, with or without an absolute counterpart.
    pub const fn is_relative(&self) -> bool {
        !self.is_absolute()
    }
}

/// Descriptor of a measurable kind.
///
/// # Invariants
///
/// - `STANDARD` is one of `UNITS` and its scale is the identity.
/// - Every unit in `UNITS` has dimension vector `DIMENSIONS`.
///
/// These are checked when the kind is registered with a [`Registry`](crate::Registry).
pub trait Kind: Copy + Debug + Send + Sync + 'static {
    /// Human-readable name.
    const NAME: &'static str;
    /// SI-dimension vector shared by every unit of the kind.
    const DIMENSIONS: SIDimensions;
    /// Absolute or relative, and the name of the counterpart if any.
    const NATURE: KindNature;
    /// The standard (SI) unit of the kind.
    const STANDARD: Unit<Self>;
    /// Every unit of the kind, the standard unit included.
    const UNITS: &'static [Unit<Self>];

    /// Look up a unit of this kind from its printed form.
    fn parse_unit(text: &str) -> ValueResult<Unit<Self>> {
        Unit::by_abbreviation(text)
    }
}

/// A kind whose values are differences or magnitudes.
pub trait RelativeKind: Kind {}

/// A kind whose values are positions on a scale.
pub trait AbsoluteKind: Kind {
    /// The kind of the difference between two positions.
    type Relative: RelativeKind;
}

/// A relative kind with a linked absolute counterpart.
pub trait RelativeWithAbsolute: RelativeKind {
    /// The absolute kind that this kind displaces.
    type Absolute: AbsoluteKind<Relative = Self>;
}

/// Pseudo-kind of values whose dimension vector is only known at run time.
///
/// Products and quotients of relative values are `SI` values: their unit is built with
/// [`Unit::from_dimensions`] and carries the derived dimension vector. `SI` is not a [`RelativeKind`], so the
/// compile-time additive operators do not apply to it; SI values use checked `plus`/`minus` instead and can be
/// resolved into a concrete kind through the [`Registry`](crate::Registry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SI;

impl Kind for SI {
    const NAME: &'static str = "SI";
    const DIMENSIONS: SIDimensions = SIDimensions::NONE;
    const NATURE: KindNature = KindNature::Relative;
    const STANDARD: Unit<Self> = Unit::from_dimensions(SIDimensions::NONE);
    const UNITS: &'static [Unit<Self>] = &[];

    /// SI units print as their dimension string, so parsing goes through [`SIDimensions`].
    fn parse_unit(text: &str) -> ValueResult<Unit<Self>> {
        text.parse().map(Unit::<SI>::from_dimensions)
    }
}

impl core::fmt::Display for SI {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(SI::NAME)
    }
}
