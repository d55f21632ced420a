//! Unit-safe physical values: scalars, dense and sparse vectors and matrices.
//!
//! `unitsafe` is the user-facing crate in this workspace. It re-exports the full API from `unitsafe-core` plus the
//! built-in kinds (length, position, duration, temperature, …) at the crate root.
//!
//! Every value is stored in SI and tagged with a kind `K` and a nature `N`:
//!
//! - `Scalar<K, N>` holds one number.
//! - `Vector<K, N>` and `Matrix<K, N>` hold dense or sparse SI storage behind a copy-on-write handle.
//! - `N` is [`Absolute`] (a point on a scale, such as a position) or [`Relative`] (a difference, such as a length).
//!
//! # What this crate solves
//!
//! - Adding a position to a position, or a length to a duration, is a type error.
//! - Products and quotients of relative values carry their SI dimension vector and can be resolved back into a
//!   typed kind (`Length × Frequency` becomes `Speed`).
//! - Sparse and dense storage give the same answers; the choice only affects memory and speed.
//!
//! # What this crate does not try to solve
//!
//! - Linear algebra: matrix operations are element-wise.
//! - Exact arithmetic: values are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use unitsafe::{frequency, length, position, AbsScalar, RelScalar, Speed};
//!
//! let a = AbsScalar::new(5.0, position::METER);
//! let b = AbsScalar::new(2.0, position::METER);
//! assert_eq!((a - b).value(), 3.0);
//!
//! let distance = RelScalar::new(10.0, length::METER);
//! let rate = RelScalar::new(2.0, frequency::HERTZ);
//! let speed = (distance * rate).as_kind::<Speed>().unwrap();
//! assert_eq!(speed.to_string(), "20 m/s");
//! ```
//!
//! Vectors and matrices:
//!
//! ```rust
//! use unitsafe::{length, LengthVector, StorageType};
//!
//! let v = LengthVector::instantiate(&[0.0, 0.0, 3.0, 0.0], length::KILOMETER, StorageType::Sparse);
//! assert_eq!(v.cardinality(), 1);
//! assert_eq!(v.sum().in_unit(length::METER), 3000.0);
//!
//! let mut w = v.mutable();
//! w.set_value(0, 1.0).unwrap();
//! assert_eq!(v.get_value(0).unwrap(), 0.0);
//! assert_eq!(w.get_value(0).unwrap(), 1.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use unitsafe::{position, AbsScalar};
//!
//! let p = AbsScalar::new(1.0, position::METER);
//! let _ = p + p;
//! ```
//!
//! # Modules
//!
//! Each built-in kind has a module holding its unit constants (also re-exported at the crate root):
//!
//! - `unitsafe::length` / `unitsafe::position`
//! - `unitsafe::duration` / `unitsafe::time`
//! - `unitsafe::temperature` / `unitsafe::absolute_temperature`
//! - `unitsafe::angle` / `unitsafe::direction`
//! - `unitsafe::mass`, `unitsafe::speed`, `unitsafe::frequency`, `unitsafe::area`, `unitsafe::force`,
//!   `unitsafe::energy`, `unitsafe::dimensionless`
//!
//! # Feature flags
//!
//! - `serde`: scalars serialize as `{"value": <display value>, "unit": "<unit abbreviation>"}`.
//!
//! # Errors
//!
//! Fallible operations return `ValueResult<T>`; see [`ValueError`] for the failure kinds.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use unitsafe_core::*;

/// Derive macro used by `unitsafe-core` to define kind marker types.
///
/// This macro expands in terms of `crate::Kind`, `crate::Unit` and `crate::SIDimensions`, so it is intended for use
/// inside `unitsafe-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use unitsafe_derive::Kind;

pub use unitsafe_core::kinds::absolute_temperature;
pub use unitsafe_core::kinds::angle;
pub use unitsafe_core::kinds::area;
pub use unitsafe_core::kinds::dimensionless;
pub use unitsafe_core::kinds::direction;
pub use unitsafe_core::kinds::duration;
pub use unitsafe_core::kinds::energy;
pub use unitsafe_core::kinds::force;
pub use unitsafe_core::kinds::frequency;
pub use unitsafe_core::kinds::length;
pub use unitsafe_core::kinds::mass;
pub use unitsafe_core::kinds::position;
pub use unitsafe_core::kinds::speed;
pub use unitsafe_core::kinds::temperature;
pub use unitsafe_core::kinds::time;

pub use unitsafe_core::kinds::absolute_temperature::{
    AbsoluteTemperature, AbsoluteTemperatureMatrix, AbsoluteTemperatureVector,
};
pub use unitsafe_core::kinds::angle::{Angle, AngleMatrix, AngleVector};
pub use unitsafe_core::kinds::area::{Area, AreaMatrix, AreaVector};
pub use unitsafe_core::kinds::dimensionless::{Dimensionless, DimensionlessMatrix, DimensionlessVector};
pub use unitsafe_core::kinds::direction::{Direction, DirectionMatrix, DirectionVector};
pub use unitsafe_core::kinds::duration::{Duration, DurationMatrix, DurationVector};
pub use unitsafe_core::kinds::energy::{Energy, EnergyMatrix, EnergyVector};
pub use unitsafe_core::kinds::force::{Force, ForceMatrix, ForceVector};
pub use unitsafe_core::kinds::frequency::{Frequency, FrequencyMatrix, FrequencyVector};
pub use unitsafe_core::kinds::length::{Length, LengthMatrix, LengthVector};
pub use unitsafe_core::kinds::mass::{Mass, MassMatrix, MassVector};
pub use unitsafe_core::kinds::position::{Position, PositionMatrix, PositionVector};
pub use unitsafe_core::kinds::speed::{Speed, SpeedMatrix, SpeedVector};
pub use unitsafe_core::kinds::temperature::{Temperature, TemperatureMatrix, TemperatureVector};
pub use unitsafe_core::kinds::time::{Time, TimeMatrix, TimeVector};
