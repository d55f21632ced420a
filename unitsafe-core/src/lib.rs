//! Core engine for unit-safe scalars, vectors and matrices.
//!
//! `unitsafe-core` models physical values that carry both a number and a unit:
//!
//! - A *kind* (length, duration, temperature, …) is a zero-sized marker type implementing [`Kind`]; it lists the
//!   kind's units and its SI-dimension vector.
//! - A *unit* ([`Unit<K>`]) converts between display values and the kind's SI value through a [`Scale`].
//! - Values are [`Scalar<K, N>`], [`Vector<K, N>`] and [`Matrix<K, N>`], where `N` is [`Absolute`] or [`Relative`].
//!   Values are stored in SI; the unit only affects display.
//! - Vectors and matrices hold dense or sparse storage ([`VectorData`], [`MatrixData`]) behind a copy-on-write
//!   handle with an explicit [`Mutability`] state.
//!
//! Most users should depend on `unitsafe` (the facade crate).
//!
//! # What this crate solves
//!
//! - Additive arithmetic follows the absolute/relative lattice at compile time: `Absolute - Absolute = Relative`,
//!   `Absolute ± Relative = Absolute`, `Relative ± Relative = Relative`.
//! - Products and quotients derive their unit from the [`SIDimensions`] algebra and can be resolved back into a
//!   typed kind through the [`Registry`].
//! - Dense and sparse storage are interchangeable: values, cardinality, sums and equality do not depend on the
//!   representation.
//!
//! # Quick start
//!
//! ```rust
//! use unitsafe_core::kinds::{duration, position, speed::Speed};
//! use unitsafe_core::{AbsScalar, RelScalar};
//!
//! let start = AbsScalar::new(2.0, position::METER);
//! let end = AbsScalar::new(5.0, position::METER);
//! let travelled = end - start;
//! assert_eq!(travelled.si(), 3.0);
//!
//! let speed = (travelled / RelScalar::new(1.5, duration::SECOND)).as_kind::<Speed>().unwrap();
//! assert_eq!(speed.si(), 2.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use unitsafe_core::kinds::{duration, length};
//! use unitsafe_core::RelScalar;
//!
//! let _ = RelScalar::new(1.0, length::METER) + RelScalar::new(1.0, duration::SECOND);
//! ```
//!
//! ```compile_fail
//! use unitsafe_core::kinds::position;
//! use unitsafe_core::AbsScalar;
//!
//! let p = AbsScalar::new(1.0, position::METER);
//! let _ = p + p; // two positions cannot be added
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SIDimensions`], [`StorageType`] and scalars
//!   (`{"value": .., "unit": ".."}`).
//!
//! # Errors
//!
//! Fallible operations return [`ValueResult`]. Every [`ValueError`] is a contract violation reported at the point of
//! detection; nothing is retried.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod kind;
mod matrix;
mod mutability;
mod nature;
mod registry;
mod scalar;
mod scale;
mod unit;
mod vector;

pub mod storage;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{SIDimensions, BASE_ABBREVIATIONS, DIMENSION_COUNT};
pub use error::{Index, Shape, ValueError, ValueResult};
pub use kind::{AbsoluteKind, Kind, KindNature, RelativeKind, RelativeWithAbsolute, SI};
pub use matrix::{AbsMatrix, Matrix, RelMatrix};
pub use mutability::Mutability;
pub use nature::{Absolute, Admissible, Nature, Relative};
pub use registry::{KindEntry, Registry};
pub use scalar::{AbsScalar, RelScalar, Scalar};
pub use scale::Scale;
pub use storage::{MatrixData, StorageType, VectorData};
pub use unit::Unit;
pub use vector::{AbsVector, RelVector, Vector};

/// Derive macro for kind marker types.
///
/// It expands in terms of `crate::Kind`, `crate::Unit` and `crate::SIDimensions`, so it is intended for use inside
/// this crate (or crates exposing the same crate-root API).
pub use unitsafe_derive::Kind;

// ─────────────────────────────────────────────────────────────────────────────
// Built-in kinds
// ─────────────────────────────────────────────────────────────────────────────

pub mod kinds;
