//! Two-dimensional storage, row-major.

use super::kernels;
use super::vector_data::{SparseVectorData, VectorData};
use super::StorageType;
use crate::error::{check_cell, check_shape, Index, Shape, ValueError, ValueResult};

/// Number of cells of a `rows x cols` matrix, or `MalformedInput` when it does not fit in `usize`.
///
/// Every constructor goes through this check, so `row * cols + col` on a built matrix cannot overflow.
pub(crate) fn cell_count(rows: usize, cols: usize) -> ValueResult<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| ValueError::malformed(format!("a {}x{} matrix has too many cells", rows, cols)))
}

/// Dense matrix payload: `rows * cols` SI values in row-major order.
#[derive(Clone, Debug, Default)]
pub struct DenseMatrixData {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrixData {
    /// Wrap row-major SI values; the length must be `rows * cols`.
    pub fn new(values: Vec<f64>, rows: usize, cols: usize) -> ValueResult<Self> {
        if values.len() != cell_count(rows, cols)? {
            return Err(ValueError::malformed(format!(
                "{} values do not fill a {}x{} matrix",
                values.len(),
                rows,
                cols
            )));
        }
        Ok(Self { values, rows, cols })
    }

    /// Row-major SI values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Sparse matrix payload: the non-zero cells, keyed by the linear index `row * cols + col`.
#[derive(Clone, Debug, Default)]
pub struct SparseMatrixData {
    indices: Vec<usize>,
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl SparseMatrixData {
    /// Build from `(row, col, SI value)` entries in any order. Zero values are dropped.
    pub fn from_entries(entries: &[(usize, usize, f64)], rows: usize, cols: usize) -> ValueResult<Self> {
        let cells = cell_count(rows, cols)?;
        for &(r, c, _) in entries {
            check_cell(r, c, rows, cols)?;
        }
        let linear = entries.iter().map(|&(r, c, v)| (r * cols + c, v)).collect();
        let (indices, values) = kernels::from_entries(linear, cells, |index| {
            ValueError::index_out_of_range(
                Index::Cell(index / cols.max(1), index % cols.max(1)),
                Shape::Matrix(rows, cols),
            )
        })?;
        Ok(Self {
            indices,
            values,
            rows,
            cols,
        })
    }

    fn from_parts(indices: Vec<usize>, values: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self {
            indices,
            values,
            rows,
            cols,
        }
    }

    /// Linear indices of the stored cells, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Values of the stored cells, never zero.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Storage of a matrix: dense or sparse SI values.
#[derive(Clone, Debug)]
pub enum MatrixData {
    /// One cell per logical position.
    Dense(DenseMatrixData),
    /// Non-zero cells only.
    Sparse(SparseMatrixData),
}

impl MatrixData {
    /// Dense storage of row-major SI values.
    pub fn dense(values: Vec<f64>, rows: usize, cols: usize) -> ValueResult<Self> {
        DenseMatrixData::new(values, rows, cols).map(MatrixData::Dense)
    }

    /// Sparse storage from `(row, col, SI value)` entries in any order.
    pub fn sparse(entries: &[(usize, usize, f64)], rows: usize, cols: usize) -> ValueResult<Self> {
        SparseMatrixData::from_entries(entries, rows, cols).map(MatrixData::Sparse)
    }

    /// Row-major SI values in the requested representation.
    pub fn from_values(values: Vec<f64>, rows: usize, cols: usize, storage: StorageType) -> ValueResult<Self> {
        let dense = DenseMatrixData::new(values, rows, cols)?;
        Ok(MatrixData::Dense(dense).into_storage(storage))
    }

    /// SI values given as rows, in the requested representation. Rows must be non-empty and of equal length.
    pub fn from_rows(rows: &[Vec<f64>], storage: StorageType) -> ValueResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(ValueError::malformed("matrix must have at least one row and one column"));
        }
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(ValueError::malformed(format!(
                "jagged matrix: row {} has {} columns, expected {}",
                r,
                row.len(),
                cols
            )));
        }
        Self::from_values(rows.concat(), rows.len(), cols, storage)
    }

    /// All-zero storage. Fails when `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize, storage: StorageType) -> ValueResult<Self> {
        let cells = cell_count(rows, cols)?;
        Ok(match storage {
            StorageType::Dense => MatrixData::Dense(DenseMatrixData {
                values: vec![0.0; cells],
                rows,
                cols,
            }),
            StorageType::Sparse => {
                MatrixData::Sparse(SparseMatrixData::from_parts(Vec::new(), Vec::new(), rows, cols))
            }
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        match self {
            MatrixData::Dense(d) => d.rows,
            MatrixData::Sparse(s) => s.rows,
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        match self {
            MatrixData::Dense(d) => d.cols,
            MatrixData::Sparse(s) => s.cols,
        }
    }

    /// Logical number of cells.
    pub fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Current representation.
    pub fn storage_type(&self) -> StorageType {
        match self {
            MatrixData::Dense(_) => StorageType::Dense,
            MatrixData::Sparse(_) => StorageType::Sparse,
        }
    }

    pub(crate) fn shape(&self) -> Shape {
        Shape::Matrix(self.rows(), self.cols())
    }

    fn linear_get(&self, index: usize) -> f64 {
        match self {
            MatrixData::Dense(d) => d.values[index],
            MatrixData::Sparse(s) => kernels::sparse_get(&s.indices, &s.values, index),
        }
    }

    /// SI value of cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> ValueResult<f64> {
        check_cell(row, col, self.rows(), self.cols())?;
        Ok(self.linear_get(row * self.cols() + col))
    }

    /// Overwrite cell `(row, col)` with an SI value.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> ValueResult<()> {
        check_cell(row, col, self.rows(), self.cols())?;
        let index = row * self.cols() + col;
        match self {
            MatrixData::Dense(d) => d.values[index] = value,
            MatrixData::Sparse(s) => kernels::sparse_set(&mut s.indices, &mut s.values, index, value),
        }
        Ok(())
    }

    /// Row `row` as vector storage in the same representation.
    pub fn row(&self, row: usize) -> ValueResult<VectorData> {
        if row >= self.rows() {
            return Err(ValueError::index_out_of_range(Index::Row(row), self.shape()));
        }
        let cols = self.cols();
        let (start, end) = (row * cols, (row + 1) * cols);
        Ok(match self {
            MatrixData::Dense(d) => VectorData::dense(d.values[start..end].to_vec()),
            MatrixData::Sparse(s) => {
                let from = s.indices.partition_point(|&i| i < start);
                let to = s.indices.partition_point(|&i| i < end);
                VectorData::Sparse(SparseVectorData::from_parts(
                    s.indices[from..to].iter().map(|i| i - start).collect(),
                    s.values[from..to].to_vec(),
                    cols,
                ))
            }
        })
    }

    /// Column `col` as vector storage in the same representation.
    pub fn column(&self, col: usize) -> ValueResult<VectorData> {
        if col >= self.cols() {
            return Err(ValueError::index_out_of_range(Index::Column(col), self.shape()));
        }
        let values = (0..self.rows())
            .map(|r| self.linear_get(r * self.cols() + col))
            .collect();
        Ok(VectorData::from_values(values, self.storage_type()))
    }

    /// The main diagonal as vector storage in the same representation. Fails on non-square matrices.
    pub fn diagonal(&self) -> ValueResult<VectorData> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows != cols {
            return Err(ValueError::NonSquare { rows, cols });
        }
        let values = (0..rows).map(|i| self.linear_get(i * cols + i)).collect();
        Ok(VectorData::from_values(values, self.storage_type()))
    }

    /// Sum of all cells.
    pub fn sum(&self) -> f64 {
        match self {
            MatrixData::Dense(d) => kernels::sum(&d.values),
            MatrixData::Sparse(s) => kernels::sum(&s.values),
        }
    }

    /// Number of non-zero cells.
    pub fn cardinality(&self) -> usize {
        match self {
            MatrixData::Dense(d) => kernels::count_non_zero(&d.values),
            MatrixData::Sparse(s) => s.values.len(),
        }
    }

    /// Every cell in row-major order.
    pub fn dense_values(&self) -> Vec<f64> {
        match self {
            MatrixData::Dense(d) => d.values.clone(),
            MatrixData::Sparse(s) => kernels::expand(&s.indices, &s.values, s.rows * s.cols),
        }
    }

    /// Every cell as a vector of rows.
    pub fn rows_values(&self) -> Vec<Vec<f64>> {
        let cols = self.cols();
        let values = self.dense_values();
        (0..self.rows())
            .map(|r| values[r * cols..(r + 1) * cols].to_vec())
            .collect()
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size()).map(move |i| self.linear_get(i))
    }

    /// Dense copy.
    pub fn to_dense(&self) -> Self {
        self.clone().into_storage(StorageType::Dense)
    }

    /// Sparse copy.
    pub fn to_sparse(&self) -> Self {
        self.clone().into_storage(StorageType::Sparse)
    }

    /// Convert into the requested representation.
    pub fn into_storage(self, storage: StorageType) -> Self {
        match (self, storage) {
            (MatrixData::Sparse(s), StorageType::Dense) => {
                log::trace!("densifying sparse {}x{} matrix", s.rows, s.cols);
                MatrixData::Dense(DenseMatrixData {
                    values: kernels::expand(&s.indices, &s.values, s.rows * s.cols),
                    rows: s.rows,
                    cols: s.cols,
                })
            }
            (MatrixData::Dense(d), StorageType::Sparse) => {
                let (indices, values) = kernels::compress(&d.values);
                MatrixData::Sparse(SparseMatrixData::from_parts(indices, values, d.rows, d.cols))
            }
            (same, _) => same,
        }
    }

    fn with_values(values: Vec<f64>, rows: usize, cols: usize, storage: StorageType) -> Self {
        MatrixData::Dense(DenseMatrixData { values, rows, cols }).into_storage(storage)
    }

    /// Cell-wise sum; sparse iff both operands are sparse.
    pub fn plus(&self, other: &Self) -> ValueResult<Self> {
        self.additive(other, |a, b| a + b)
    }

    /// Cell-wise difference; sparse iff both operands are sparse.
    pub fn minus(&self, other: &Self) -> ValueResult<Self> {
        self.additive(other, |a, b| a - b)
    }

    /// Cell-wise product; dense iff both operands are dense.
    pub fn times(&self, other: &Self) -> ValueResult<Self> {
        self.multiplicative(other, |a, b| a * b)
    }

    /// Cell-wise quotient; dense iff both operands are dense.
    pub fn divide(&self, other: &Self) -> ValueResult<Self> {
        self.multiplicative(other, |a, b| a / b)
    }

    fn additive<F>(&self, other: &Self, f: F) -> ValueResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        check_shape(self.shape(), other.shape())?;
        match (self, other) {
            (MatrixData::Sparse(a), MatrixData::Sparse(b)) => {
                let (indices, values) = kernels::merge(
                    (a.indices.as_slice(), a.values.as_slice()),
                    (b.indices.as_slice(), b.values.as_slice()),
                    f,
                );
                Ok(MatrixData::Sparse(SparseMatrixData::from_parts(
                    indices, values, a.rows, a.cols,
                )))
            }
            _ => {
                let storage = StorageType::additive(self.storage_type(), other.storage_type());
                Ok(self.zip_dense(other, f, storage))
            }
        }
    }

    fn multiplicative<F>(&self, other: &Self, f: F) -> ValueResult<Self>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        check_shape(self.shape(), other.shape())?;
        let storage = StorageType::multiplicative(self.storage_type(), other.storage_type());
        Ok(self.zip_dense(other, f, storage))
    }

    fn zip_dense<F>(&self, other: &Self, f: F, storage: StorageType) -> Self
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        let values = match (self, other) {
            (MatrixData::Dense(a), MatrixData::Dense(b)) => kernels::zip_map(&a.values, &b.values, f),
            _ => kernels::zip_map(&self.dense_values(), &other.dense_values(), f),
        };
        Self::with_values(values, self.rows(), self.cols(), storage)
    }

    /// Apply `f` to every cell in place, keeping the representation.
    ///
    /// Sparse payloads are densified first when `f(0) != 0`.
    pub fn assign<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            MatrixData::Dense(d) => kernels::map_in_place(&mut d.values, f),
            MatrixData::Sparse(s) if f(0.0) == 0.0 => {
                kernels::map_in_place(&mut s.values, f);
                kernels::prune(&mut s.indices, &mut s.values);
            }
            MatrixData::Sparse(s) => {
                log::trace!("densifying sparse {}x{} matrix for assign", s.rows, s.cols);
                let (rows, cols) = (s.rows, s.cols);
                let mut dense = kernels::expand(&s.indices, &s.values, rows * cols);
                kernels::map_in_place(&mut dense, f);
                *self = Self::with_values(dense, rows, cols, StorageType::Sparse);
            }
        }
    }

    /// Copy with `f` applied to every cell, in the same representation.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let mut copy = self.clone();
        copy.assign(f);
        copy
    }

    /// Add `other` cell-wise in place, keeping the representation.
    pub fn increment_by(&mut self, other: &Self) -> ValueResult<()> {
        let storage = self.storage_type();
        *self = self.plus(other)?.into_storage(storage);
        Ok(())
    }

    /// Subtract `other` cell-wise in place, keeping the representation.
    pub fn decrement_by(&mut self, other: &Self) -> ValueResult<()> {
        let storage = self.storage_type();
        *self = self.minus(other)?.into_storage(storage);
        Ok(())
    }

    /// Multiply by `other` cell-wise in place, keeping the representation.
    pub fn multiply_by(&mut self, other: &Self) -> ValueResult<()> {
        let storage = self.storage_type();
        *self = self.times(other)?.into_storage(storage);
        Ok(())
    }

    /// Divide by `other` cell-wise in place, keeping the representation.
    pub fn divide_by(&mut self, other: &Self) -> ValueResult<()> {
        let storage = self.storage_type();
        *self = self.divide(other)?.into_storage(storage);
        Ok(())
    }
}

impl PartialEq for MatrixData {
    /// Logical equality: same shape and the same value in every cell.
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        match (self, other) {
            (MatrixData::Dense(a), MatrixData::Dense(b)) => a.values == b.values,
            (MatrixData::Sparse(a), MatrixData::Sparse(b)) => {
                a.indices == b.indices && a.values == b.values
            }
            _ => self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}
