//! Error types for value construction, storage access and unit resolution.
//!
//! Every failure in this crate is a programming-contract violation (wrong shape, bad index, writing to an
//! immutable value, an unregistered kind). They are reported synchronously through [`ValueResult`] and are never
//! retried internally.

use core::fmt;

/// Result type for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Logical shape of a vector or matrix, carried by shape and index errors for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A vector with the given number of cells.
    Vector(usize),
    /// A matrix with the given number of rows and columns.
    Matrix(usize, usize),
}

impl Shape {
    /// Total number of logical cells.
    pub const fn cells(&self) -> usize {
        match *self {
            Shape::Vector(n) => n,
            Shape::Matrix(rows, cols) => rows.saturating_mul(cols),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(n) => write!(f, "[{}]", n),
            Shape::Matrix(rows, cols) => write!(f, "[{}x{}]", rows, cols),
        }
    }
}

/// Position that was requested when an index check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// Linear index into a vector.
    Linear(usize),
    /// Row and column of a matrix cell.
    Cell(usize, usize),
    /// A whole matrix row.
    Row(usize),
    /// A whole matrix column.
    Column(usize),
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Linear(i) => write!(f, "{}", i),
            Index::Cell(r, c) => write!(f, "({}, {})", r, c),
            Index::Row(r) => write!(f, "row {}", r),
            Index::Column(c) => write!(f, "column {}", c),
        }
    }
}

/// Error type for value operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Operand sizes differ in a pairwise operation.
    #[error("Shape mismatch: {left} vs {right}")]
    ShapeMismatch {
        /// Shape of the receiver.
        left: Shape,
        /// Shape of the argument.
        right: Shape,
    },

    /// Row, column, or linear index outside `[0, size)`.
    #[error("Index out of range: {index} for shape {shape}")]
    IndexOutOfRange {
        /// The requested position.
        index: Index,
        /// Shape of the accessed value.
        shape: Shape,
    },

    /// A write was attempted on a value that is not mutable.
    #[error("Immutable mutation: cannot modify an immutable {what}")]
    ImmutableMutation {
        /// The kind of value that was written to.
        what: &'static str,
    },

    /// A diagonal-dependent operation was invoked on a non-square matrix.
    #[error("Non-square matrix: {rows}x{cols}")]
    NonSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// No registered kind matches the requested unit or dimension vector.
    #[error("Unresolvable unit: {what}")]
    UnresolvableUnit {
        /// Description of the unit, kind or dimension vector that failed to resolve.
        what: String,
    },

    /// Two SI-dimensioned values with different dimension vectors were combined.
    #[error("Incompatible units: {left} and {right}")]
    IncompatibleUnits {
        /// Unit of the receiver.
        left: String,
        /// Unit of the argument.
        right: String,
    },

    /// An SI-dimension exponent left the representable range in a product, quotient, power or root.
    #[error("Dimension overflow: {what}")]
    DimensionOverflow {
        /// The operation and operands that overflowed.
        what: String,
    },

    /// Empty, jagged, duplicated or otherwise malformed raw input.
    #[error("Malformed input: {reason}")]
    MalformedInput {
        /// What is wrong with the input.
        reason: String,
    },

    /// A kind or unit descriptor is inconsistent.
    #[error("Configuration error for kind {kind}: {reason}")]
    Configuration {
        /// Name of the offending kind.
        kind: &'static str,
        /// What is inconsistent.
        reason: String,
    },
}

impl ValueError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(left: Shape, right: Shape) -> Self {
        Self::ShapeMismatch { left, right }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: Index, shape: Shape) -> Self {
        Self::IndexOutOfRange { index, shape }
    }

    /// Create an immutable mutation error.
    pub fn immutable(what: &'static str) -> Self {
        Self::ImmutableMutation { what }
    }

    /// Create an unresolvable unit error.
    pub fn unresolvable(what: impl Into<String>) -> Self {
        Self::UnresolvableUnit { what: what.into() }
    }

    /// Create an incompatible units error.
    pub fn incompatible(left: impl ToString, right: impl ToString) -> Self {
        Self::IncompatibleUnits {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Create a dimension overflow error.
    pub fn dimension_overflow(what: impl Into<String>) -> Self {
        Self::DimensionOverflow { what: what.into() }
    }

    /// Create a malformed input error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            kind,
            reason: reason.into(),
        }
    }
}

/// Check that `index` addresses a cell of a vector of length `len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> ValueResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ValueError::index_out_of_range(
            Index::Linear(index),
            Shape::Vector(len),
        ))
    }
}

/// Check that `(row, col)` addresses a cell of a `rows x cols` matrix.
#[inline]
pub(crate) fn check_cell(row: usize, col: usize, rows: usize, cols: usize) -> ValueResult<()> {
    if row < rows && col < cols {
        Ok(())
    } else {
        Err(ValueError::index_out_of_range(
            Index::Cell(row, col),
            Shape::Matrix(rows, cols),
        ))
    }
}

/// Check that two shapes are identical.
#[inline]
pub(crate) fn check_shape(left: Shape, right: Shape) -> ValueResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(ValueError::shape_mismatch(left, right))
    }
}
