//! One-dimensional storage.

use super::kernels;
use super::StorageType;
use crate::error::{check_index, check_shape, Index, Shape, ValueError, ValueResult};

/// Dense vector payload: one SI value per cell.
#[derive(Clone, Debug, Default)]
pub struct DenseVectorData {
    values: Vec<f64>,
}

impl DenseVectorData {
    /// Wrap SI values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The SI values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Sparse vector payload: the non-zero cells of a vector of `size` cells.
#[derive(Clone, Debug, Default)]
pub struct SparseVectorData {
    indices: Vec<usize>,
    values: Vec<f64>,
    size: usize,
}

impl SparseVectorData {
    /// Build from `(index, SI value)` entries in any order. Zero values are dropped.
    pub fn from_entries(entries: &[(usize, f64)], size: usize) -> ValueResult<Self> {
        let (indices, values) = kernels::from_entries(entries.to_vec(), size, |index| {
            ValueError::index_out_of_range(Index::Linear(index), Shape::Vector(size))
        })?;
        Ok(Self {
            indices,
            values,
            size,
        })
    }

    pub(crate) fn from_parts(indices: Vec<usize>, values: Vec<f64>, size: usize) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(values.iter().all(|v| *v != 0.0));
        Self {
            indices,
            values,
            size,
        }
    }

    /// Indices of the stored cells, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Values of the stored cells, never zero.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Logical number of cells.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Storage of a vector: dense or sparse SI values.
///
/// ```rust
/// use unitsafe_core::{StorageType, VectorData};
///
/// let data = VectorData::from_values(vec![0.0, 0.0, 3.0, 0.0], StorageType::Sparse);
/// assert_eq!(data.cardinality(), 1);
/// assert_eq!(data.get(2).unwrap(), 3.0);
/// assert_eq!(data, data.to_dense());
/// ```
#[derive(Clone, Debug)]
pub enum VectorData {
    /// One cell per logical position.
    Dense(DenseVectorData),
    /// Non-zero cells only.
    Sparse(SparseVectorData),
}

impl VectorData {
    /// Dense storage of SI values.
    pub fn dense(values: Vec<f64>) -> Self {
        VectorData::Dense(DenseVectorData::new(values))
    }

    /// Sparse storage from `(index, SI value)` entries in any order.
    pub fn sparse(entries: &[(usize, f64)], size: usize) -> ValueResult<Self> {
        SparseVectorData::from_entries(entries, size).map(VectorData::Sparse)
    }

    /// SI values in the requested representation.
    pub fn from_values(values: Vec<f64>, storage: StorageType) -> Self {
        match storage {
            StorageType::Dense => Self::dense(values),
            StorageType::Sparse => {
                let size = values.len();
                let (indices, values) = kernels::compress(&values);
                VectorData::Sparse(SparseVectorData::from_parts(indices, values, size))
            }
        }
    }

    /// All-zero storage of `size` cells.
    pub fn zeros(size: usize, storage: StorageType) -> Self {
        match storage {
            StorageType::Dense => Self::dense(vec![0.0; size]),
            StorageType::Sparse => {
                VectorData::Sparse(SparseVectorData::from_parts(Vec::new(), Vec::new(), size))
            }
        }
    }

    /// Logical number of cells.
    pub fn size(&self) -> usize {
        match self {
            VectorData::Dense(d) => d.values.len(),
            VectorData::Sparse(s) => s.size,
        }
    }

    /// Current representation.
    pub fn storage_type(&self) -> StorageType {
        match self {
            VectorData::Dense(_) => StorageType::Dense,
            VectorData::Sparse(_) => StorageType::Sparse,
        }
    }

    pub(crate) fn shape(&self) -> Shape {
        Shape::Vector(self.size())
    }

    /// SI value of cell `index`.
    pub fn get(&self, index: usize) -> ValueResult<f64> {
        check_index(index, self.size())?;
        Ok(match self {
            VectorData::Dense(d) => d.values[index],
            VectorData::Sparse(s) => kernels::sparse_get(&s.indices, &s.values, index),
        })
    }

    /// Overwrite cell `index` with an SI value.
    pub fn set(&mut self, index: usize, value: f64) -> ValueResult<()> {
        check_index(index, self.size())?;
        match self {
            VectorData::Dense(d) => d.values[index] = value,
            VectorData::Sparse(s) => kernels::sparse_set(&mut s.indices, &mut s.values, index, value),
        }
        Ok(())
    }

    /// Sum of all cells.
    pub fn sum(&self) -> f64 {
        match self {
            VectorData::Dense(d) => kernels::sum(&d.values),
            VectorData::Sparse(s) => kernels::sum(&s.values),
        }
    }

    /// Number of non-zero cells.
    pub fn cardinality(&self) -> usize {
        match self {
            VectorData::Dense(d) => kernels::count_non_zero(&d.values),
            VectorData::Sparse(s) => s.values.len(),
        }
    }

    /// Every cell in index order.
    pub fn dense_values(&self) -> Vec<f64> {
        match self {
            VectorData::Dense(d) => d.values.clone(),
            VectorData::Sparse(s) => kernels::expand(&s.indices, &s.values, s.size),
        }
    }

    /// Iterate over every cell in index order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size()).map(move |i| match self {
            VectorData::Dense(d) => d.values[i],
            VectorData::Sparse(s) => kernels::sparse_get(&s.indices, &s.values, i),
        })
    }

    /// Dense copy.
    pub fn to_dense(&self) -> Self {
        self.to_storage(StorageType::Dense)
    }

    /// Sparse copy.
    pub fn to_sparse(&self) -> Self {
        self.to_storage(StorageType::Sparse)
    }

    /// Copy in the requested representation.
    pub fn to_storage(&self, storage: StorageType) -> Self {
        self.clone().into_storage(storage)
    }

    /// Convert into the requested representation.
    pub fn into_storage(self, storage: StorageType) -> Self {
        match (self, storage) {
            (VectorData::Sparse(s), StorageType::Dense) => {
                log::trace!("densifying sparse vector of {} cells", s.size);
                Self::dense(kernels::expand(&s.indices, &s.values, s.size))
            }
            (VectorData::Dense(d), StorageType::Sparse) => Self::from_values(d.values, StorageType::Sparse),
            (same, _) => same,
        }
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
            (VectorData::Sparse(a), VectorData::Sparse(b)) => {
                let (indices, values) = kernels::merge(
                    (a.indices.as_slice(), a.values.as_slice()),
                    (b.indices.as_slice(), b.values.as_slice()),
                    f,
                );
                Ok(VectorData::Sparse(SparseVectorData::from_parts(indices, values, a.size)))
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
            (VectorData::Dense(a), VectorData::Dense(b)) => kernels::zip_map(&a.values, &b.values, f),
            _ => kernels::zip_map(&self.dense_values(), &other.dense_values(), f),
        };
        Self::from_values(values, storage)
    }

    /// Apply `f` to every cell in place, keeping the representation.
    ///
    /// On sparse storage `f` only visits the stored cells when `f(0) == 0`; otherwise the payload is densified,
    /// mapped and compressed again.
    pub fn assign<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            VectorData::Dense(d) => kernels::map_in_place(&mut d.values, f),
            VectorData::Sparse(s) if f(0.0) == 0.0 => {
                kernels::map_in_place(&mut s.values, f);
                kernels::prune(&mut s.indices, &mut s.values);
            }
            VectorData::Sparse(s) => {
                log::trace!("densifying sparse vector of {} cells for assign", s.size);
                let mut dense = kernels::expand(&s.indices, &s.values, s.size);
                kernels::map_in_place(&mut dense, f);
                *self = Self::from_values(dense, StorageType::Sparse);
            }
        }
    }

    /// Copy with `f` applied to every cell, in the same representation.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            VectorData::Dense(d) => Self::dense(kernels::map(&d.values, f)),
            _ => {
                let mut copy = self.clone();
                copy.assign(f);
                copy
            }
        }
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

impl PartialEq for VectorData {
    /// Logical equality: same size and the same value in every cell.
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        match (self, other) {
            (VectorData::Dense(a), VectorData::Dense(b)) => a.values == b.values,
            (VectorData::Sparse(a), VectorData::Sparse(b)) => {
                a.indices == b.indices && a.values == b.values
            }
            _ => self.iter().zip(other.iter()).all(|(a, b)| a == b),
        }
    }
}

impl From<Vec<f64>> for VectorData {
    fn from(values: Vec<f64>) -> Self {
        Self::dense(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn both(values: &[f64]) -> [VectorData; 2] {
        [
            VectorData::from_values(values.to_vec(), StorageType::Dense),
            VectorData::from_values(values.to_vec(), StorageType::Sparse),
        ]
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Representation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sparse_payload_of_mostly_zero_vector() {
        let data = VectorData::from_values(vec![0.0, 0.0, 3.0, 0.0], StorageType::Sparse);
        match &data {
            VectorData::Sparse(s) => {
                assert_eq!(s.indices(), &[2]);
                assert_eq!(s.values(), &[3.0]);
                assert_eq!(s.size(), 4);
            }
            VectorData::Dense(_) => panic!("expected sparse storage"),
        }
        assert_eq!(data.cardinality(), 1);
        assert_eq!(data.dense_values(), vec![0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn conversion_preserves_values_cardinality_and_sum() {
        let values = [1.5, 0.0, -2.0, 0.0, 7.0];
        let [dense, sparse] = both(&values);
        assert_eq!(dense, sparse);
        assert_eq!(dense.cardinality(), sparse.cardinality());
        assert_abs_diff_eq!(dense.sum(), sparse.sum());
        assert_eq!(dense.to_sparse().to_dense(), dense);
        assert_eq!(sparse.to_dense().storage_type(), StorageType::Dense);
        assert_eq!(dense.to_sparse().storage_type(), StorageType::Sparse);
    }

    #[test]
    fn equality_is_logical() {
        let [dense, sparse] = both(&[1.0, 0.0]);
        assert_eq!(dense, sparse);
        assert_ne!(dense, VectorData::dense(vec![1.0, 0.0, 0.0]));
        assert_ne!(sparse, VectorData::dense(vec![1.0, 2.0]));
    }

    #[test]
    fn sparse_from_unordered_entries() {
        let data = VectorData::sparse(&[(3, 4.0), (1, 2.0)], 5).unwrap();
        assert_eq!(data.dense_values(), vec![0.0, 2.0, 0.0, 4.0, 0.0]);
        assert!(matches!(
            VectorData::sparse(&[(1, 1.0), (1, 3.0)], 5),
            Err(ValueError::MalformedInput { .. })
        ));
        assert!(matches!(
            VectorData::sparse(&[(5, 1.0)], 5),
            Err(ValueError::IndexOutOfRange { .. })
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn get_and_set_check_bounds() {
        for mut data in both(&[1.0, 0.0, 3.0]) {
            assert_eq!(data.get(2).unwrap(), 3.0);
            assert!(matches!(data.get(3), Err(ValueError::IndexOutOfRange { .. })));
            data.set(1, 5.0).unwrap();
            data.set(0, 0.0).unwrap();
            assert_eq!(data.dense_values(), vec![0.0, 5.0, 3.0]);
            assert!(data.set(3, 1.0).is_err());
            assert_eq!(data.cardinality(), 2);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn plus_minus_representation() {
        let [ad, asp] = both(&[1.0, 0.0, 2.0]);
        let [bd, bsp] = both(&[0.0, 0.0, 3.0]);
        assert_eq!(asp.plus(&bsp).unwrap().storage_type(), StorageType::Sparse);
        assert_eq!(asp.plus(&bd).unwrap().storage_type(), StorageType::Dense);
        assert_eq!(ad.minus(&bd).unwrap().storage_type(), StorageType::Dense);
        assert_eq!(ad.plus(&bsp).unwrap().dense_values(), vec![1.0, 0.0, 5.0]);
        assert_eq!(asp.minus(&asp).unwrap().cardinality(), 0);
    }

    #[test]
    fn times_divide_representation() {
        let [ad, asp] = both(&[1.0, 0.0, 2.0]);
        let [bd, bsp] = both(&[4.0, 0.0, 3.0]);
        assert_eq!(ad.times(&bd).unwrap().storage_type(), StorageType::Dense);
        assert_eq!(ad.times(&bsp).unwrap().storage_type(), StorageType::Sparse);
        assert_eq!(asp.divide(&bsp).unwrap().storage_type(), StorageType::Sparse);
        assert_eq!(asp.times(&bd).unwrap().dense_values(), vec![4.0, 0.0, 6.0]);
    }

    #[test]
    fn divide_keeps_nan_of_implicit_zeros() {
        let [_, asp] = both(&[1.0, 0.0, 2.0]);
        let [_, bsp] = both(&[1.0, 0.0, 4.0]);
        let q = asp.divide(&bsp).unwrap();
        assert_eq!(q.storage_type(), StorageType::Sparse);
        assert!(q.get(1).unwrap().is_nan());
        assert_eq!(q.get(2).unwrap(), 0.5);
        assert_eq!(q.cardinality(), 3);
    }

    #[test]
    fn shape_mismatch_carries_both_shapes() {
        let a = VectorData::dense(vec![1.0, 2.0, 3.0]);
        let b = VectorData::dense(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            a.plus(&b).unwrap_err(),
            ValueError::shape_mismatch(Shape::Vector(3), Shape::Vector(4))
        );
        assert!(a.times(&b).is_err());
    }

    #[test]
    fn plus_then_minus_restores() {
        for a in both(&[1.25, 0.0, -3.5, 8.0]) {
            for b in both(&[0.5, 2.0, 0.0, -1.0]) {
                let back = a.plus(&b).unwrap().minus(&b).unwrap();
                for (x, y) in back.iter().zip(a.iter()) {
                    assert_abs_diff_eq!(x, y, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn in_place_ops_keep_representation() {
        let [mut dense, mut sparse] = both(&[1.0, 0.0, 2.0]);
        let delta = VectorData::dense(vec![1.0, 1.0, 1.0]);
        sparse.increment_by(&delta).unwrap();
        assert_eq!(sparse.storage_type(), StorageType::Sparse);
        assert_eq!(sparse.dense_values(), vec![2.0, 1.0, 3.0]);
        dense.multiply_by(&VectorData::from_values(vec![2.0, 0.0, 2.0], StorageType::Sparse)).unwrap();
        assert_eq!(dense.storage_type(), StorageType::Dense);
        assert_eq!(dense.dense_values(), vec![2.0, 0.0, 4.0]);
        dense.decrement_by(&delta).unwrap();
        dense.divide_by(&VectorData::dense(vec![1.0, 1.0, 3.0])).unwrap();
        assert_eq!(dense.dense_values(), vec![1.0, -1.0, 1.0]);
    }

    #[test]
    fn assign_on_sparse_storage() {
        let mut data = VectorData::from_values(vec![0.0, 2.0, 0.0, 4.0], StorageType::Sparse);
        data.assign(|v| v / 2.0);
        assert_eq!(data.storage_type(), StorageType::Sparse);
        assert_eq!(data.cardinality(), 2);
        data.assign(|v| if v == 1.0 { 0.0 } else { v });
        assert_eq!(data.cardinality(), 1);
        data.assign(|v| v + 1.0);
        assert_eq!(data.storage_type(), StorageType::Sparse);
        assert_eq!(data.dense_values(), vec![1.0, 1.0, 1.0, 3.0]);
    }

    #[test]
    fn map_leaves_source_untouched() {
        let data = VectorData::dense(vec![1.0, 2.0]);
        let doubled = data.map(|v| v * 2.0);
        assert_eq!(doubled.dense_values(), vec![2.0, 4.0]);
        assert_eq!(data.dense_values(), vec![1.0, 2.0]);
    }

    #[test]
    fn zeros() {
        let data = VectorData::zeros(4, StorageType::Sparse);
        assert_eq!(data.size(), 4);
        assert_eq!(data.cardinality(), 0);
        assert_eq!(data, VectorData::zeros(4, StorageType::Dense));
    }
}
