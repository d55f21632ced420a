//! Dense and sparse storage for vectors and matrices.
//!
//! Storage always holds SI values. [`VectorData`] and [`MatrixData`] are closed enums over a dense form (one
//! `f64` per logical cell) and a sparse form (sorted, unique indices of the non-zero cells and their values).
//! Switching between the two never changes a value, a cardinality or a sum; equality is logical, cell by cell.
//!
//! Pairwise results pick their representation from the operands:
//!
//! | operation        | result                                   |
//! |------------------|------------------------------------------|
//! | `plus`, `minus`  | sparse iff both operands are sparse      |
//! | `times`,`divide` | dense iff both operands are dense        |
//!
//! Values are always computed cell by cell over the logical shape, so `0 / 0` is `NaN` and `0 * inf` is `NaN`
//! even when both cells are implicit zeros of sparse storage.

mod kernels;
mod matrix_data;
mod vector_data;

pub use matrix_data::{DenseMatrixData, MatrixData, SparseMatrixData};
pub use vector_data::{DenseVectorData, SparseVectorData, VectorData};

use core::fmt;

/// Number of cells above which bulk loops run on the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Requested or actual storage representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageType {
    /// One cell per logical position.
    #[default]
    Dense,
    /// Non-zero cells only.
    Sparse,
}

impl StorageType {
    /// Representation of `plus`/`minus` results.
    pub(crate) const fn additive(left: Self, right: Self) -> Self {
        match (left, right) {
            (StorageType::Sparse, StorageType::Sparse) => StorageType::Sparse,
            _ => StorageType::Dense,
        }
    }

    /// Representation of `times`/`divide` results.
    pub(crate) const fn multiplicative(left: Self, right: Self) -> Self {
        match (left, right) {
            (StorageType::Dense, StorageType::Dense) => StorageType::Dense,
            _ => StorageType::Sparse,
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Dense => f.write_str("dense"),
            StorageType::Sparse => f.write_str("sparse"),
        }
    }
}
