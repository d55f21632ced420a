//! Nature markers for the second type parameter of scalars, vectors and matrices.

use crate::kind::{AbsoluteKind, Kind, RelativeKind, SI};
use core::fmt::Debug;

/// Marker for absolute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Absolute;

/// Marker for relative values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Relative;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Absolute {}
    impl Sealed for super::Relative {}

    pub trait SealedAdmissible<N> {}
    impl<K: crate::kind::AbsoluteKind> SealedAdmissible<super::Absolute> for K {}
    impl<K: crate::kind::RelativeKind> SealedAdmissible<super::Relative> for K {}
    impl SealedAdmissible<super::Relative> for crate::kind::SI {}
}

/// Either [`Absolute`] or [`Relative`].
pub trait Nature: sealed::Sealed + Copy + Debug + Send + Sync + 'static {
    /// `"Absolute"` or `"Relative"`.
    const NAME: &'static str;
    /// `true` for [`Absolute`].
    const IS_ABSOLUTE: bool;
}

impl Nature for Absolute {
    const NAME: &'static str = "Absolute";
    const IS_ABSOLUTE: bool = true;
}

impl Nature for Relative {
    const NAME: &'static str = "Relative";
    const IS_ABSOLUTE: bool = false;
}

/// Kinds that may carry nature `N`: absolute kinds carry [`Absolute`], relative kinds and [`SI`] carry
/// [`Relative`]. Constructors of scalars, vectors and matrices require this bound, so an absolute length or a
/// relative position cannot be built.
pub trait Admissible<N: Nature>: Kind + sealed::SealedAdmissible<N> {}

impl<K: AbsoluteKind> Admissible<Absolute> for K {}
impl<K: RelativeKind> Admissible<Relative> for K {}
impl Admissible<Relative> for SI {}
