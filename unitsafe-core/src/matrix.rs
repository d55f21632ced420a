//! Two-dimensional collections of values of a single kind.
//!
//! [`Matrix`] mirrors [`Vector`](crate::Vector): SI storage in [`MatrixData`], a display unit, a mutability flag and
//! the same absolute/relative operator lattice. Rows, columns and the diagonal are extracted as immutable vectors.

use crate::dimension::{self, SIDimensions};
use crate::error::{check_shape, ValueError, ValueResult};
use crate::kind::{AbsoluteKind, Kind, RelativeKind, RelativeWithAbsolute, SI};
use crate::mutability::{Mutability, Shared};
use crate::nature::{Absolute, Admissible, Nature, Relative};
use crate::registry::{KindEntry, Registry};
use crate::scalar::Scalar;
use crate::storage::{MatrixData, StorageType};
use crate::unit::Unit;
use crate::vector::Vector;
use core::fmt;
use core::marker::PhantomData;

const WHAT: &str = "matrix";

/// A matrix of values of kind `K` and nature `N`, stored row-major.
///
/// ```rust
/// use unitsafe_core::kinds::mass;
/// use unitsafe_core::{RelMatrix, StorageType, ValueError};
///
/// let m = RelMatrix::create(&[vec![1.0, 0.0], vec![0.0, 2.0]], mass::GRAM, StorageType::Sparse).unwrap();
/// assert_eq!(m.cardinality(), 2);
/// assert_eq!(m.get_si(1, 1).unwrap(), 0.002);
/// assert!(matches!(m.get(2, 0), Err(ValueError::IndexOutOfRange { .. })));
/// ```
#[derive(Debug)]
pub struct Matrix<K: Kind, N: Nature> {
    data: Shared<MatrixData>,
    unit: Unit<K>,
    _nature: PhantomData<N>,
}

/// A matrix of absolute values.
pub type AbsMatrix<K> = Matrix<K, Absolute>;
/// A matrix of relative values.
pub type RelMatrix<K> = Matrix<K, Relative>;

impl<K: Kind, N: Nature> Clone for Matrix<K, N> {
    /// The clone aliases the storage.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            unit: self.unit,
            _nature: PhantomData,
        }
    }
}

impl<K: Admissible<N>, N: Nature> Matrix<K, N> {
    fn wrap(data: Shared<MatrixData>, unit: Unit<K>) -> Self {
        Self {
            data,
            unit,
            _nature: PhantomData,
        }
    }

    /// An immutable `rows x cols` matrix of row-major `values` expressed in `unit`.
    pub fn instantiate(
        values: &[f64],
        rows: usize,
        cols: usize,
        unit: Unit<K>,
        storage: StorageType,
    ) -> ValueResult<Self> {
        let si = values.iter().map(|&v| unit.to_standard(v)).collect();
        Ok(Self::from_data(MatrixData::from_values(si, rows, cols, storage)?, unit))
    }

    /// An immutable matrix over pre-built SI storage.
    pub fn from_data(data: MatrixData, unit: Unit<K>) -> Self {
        Self::wrap(Shared::new(data, false), unit)
    }

    /// A matrix from rows of values expressed in `unit`; rejects empty and jagged input.
    pub fn create(rows: &[Vec<f64>], unit: Unit<K>, storage: StorageType) -> ValueResult<Self> {
        let display = MatrixData::from_rows(rows, StorageType::Dense)?;
        let si = display.map(|v| unit.to_standard(v)).into_storage(storage);
        Ok(Self::from_data(si, unit))
    }

    /// A `rows x cols` matrix from `(row, col, value)` entries in any order, values expressed in `unit`.
    ///
    /// Cells without an entry hold zero in `unit`.
    pub fn from_sparse(
        entries: &[(usize, usize, f64)],
        rows: usize,
        cols: usize,
        unit: Unit<K>,
        storage: StorageType,
    ) -> ValueResult<Self> {
        let display = MatrixData::sparse(entries, rows, cols)?;
        let si = display.map(|v| unit.to_standard(v)).into_storage(storage);
        Ok(Self::from_data(si, unit))
    }

    /// An immutable matrix of zero SI values. Fails with `MalformedInput` when `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize, unit: Unit<K>, storage: StorageType) -> ValueResult<Self> {
        Ok(Self::from_data(MatrixData::zeros(rows, cols, storage)?, unit))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.get().rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.get().cols()
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.data.get().size()
    }

    /// Current storage representation.
    pub fn storage_type(&self) -> StorageType {
        self.data.get().storage_type()
    }

    /// The underlying SI storage.
    pub fn data(&self) -> &MatrixData {
        self.data.get()
    }

    /// Display unit.
    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    /// SI-dimension vector of the cells.
    pub fn dimensions(&self) -> SIDimensions {
        self.unit.dimensions()
    }

    /// The same storage displayed in another unit.
    pub fn with_unit(&self, unit: Unit<K>) -> Self {
        Self::wrap(self.data.view(self.data.is_mutable()), unit)
    }

    /// Cell `(row, col)` as a scalar.
    pub fn get(&self, row: usize, col: usize) -> ValueResult<Scalar<K, N>> {
        Ok(Scalar::from_si(self.get_si(row, col)?, self.unit))
    }

    /// SI value of cell `(row, col)`.
    pub fn get_si(&self, row: usize, col: usize) -> ValueResult<f64> {
        self.data.get().get(row, col)
    }

    /// Value of cell `(row, col)` in the display unit.
    pub fn get_value(&self, row: usize, col: usize) -> ValueResult<f64> {
        self.get_in_unit(row, col, self.unit)
    }

    /// Value of cell `(row, col)` in `unit`.
    pub fn get_in_unit(&self, row: usize, col: usize, unit: Unit<K>) -> ValueResult<f64> {
        Ok(unit.from_standard(self.get_si(row, col)?))
    }

    /// Row `row` as an immutable vector.
    pub fn row(&self, row: usize) -> ValueResult<Vector<K, N>> {
        Ok(Vector::from_data(self.data.get().row(row)?, self.unit))
    }

    /// Column `col` as an immutable vector.
    pub fn column(&self, col: usize) -> ValueResult<Vector<K, N>> {
        Ok(Vector::from_data(self.data.get().column(col)?, self.unit))
    }

    /// The main diagonal as an immutable vector. Fails with [`ValueError::NonSquare`] on non-square matrices.
    pub fn diagonal(&self) -> ValueResult<Vector<K, N>> {
        Ok(Vector::from_data(self.data.get().diagonal()?, self.unit))
    }

    /// Every SI value, one `Vec` per row.
    ///
    /// This is the form handed to linear-algebra code.
    pub fn values_si(&self) -> Vec<Vec<f64>> {
        self.data.get().rows_values()
    }

    /// Every value in the display unit, one `Vec` per row.
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.values_in_unit(self.unit)
    }

    /// Every value in `unit`, one `Vec` per row.
    pub fn values_in_unit(&self, unit: Unit<K>) -> Vec<Vec<f64>> {
        let mut rows = self.values_si();
        for v in rows.iter_mut().flatten() {
            *v = unit.from_standard(*v);
        }
        rows
    }

    /// Number of non-zero SI values.
    pub fn cardinality(&self) -> usize {
        self.data.get().cardinality()
    }

    /// Sum of the SI values.
    pub fn sum_si(&self) -> f64 {
        self.data.get().sum()
    }

    /// Copy in dense storage, with the same mutability flag.
    pub fn to_dense(&self) -> Self {
        Self::wrap(Shared::new(self.data.get().to_dense(), self.data.is_mutable()), self.unit)
    }

    /// Copy in sparse storage, with the same mutability flag.
    pub fn to_sparse(&self) -> Self {
        Self::wrap(Shared::new(self.data.get().to_sparse(), self.data.is_mutable()), self.unit)
    }

    /// Current mutability state.
    pub fn mutability(&self) -> Mutability {
        self.data.state()
    }

    /// `true` unless the matrix is immutable.
    pub fn is_mutable(&self) -> bool {
        self.data.is_mutable()
    }

    /// A writable copy-on-write view on the same storage.
    pub fn mutable(&self) -> Self {
        Self::wrap(self.data.view(true), self.unit)
    }

    /// A read-only view on the same storage.
    pub fn immutable(&self) -> Self {
        Self::wrap(self.data.view(false), self.unit)
    }

    /// Overwrite cell `(row, col)` with a scalar.
    pub fn set(&mut self, row: usize, col: usize, value: Scalar<K, N>) -> ValueResult<()> {
        self.set_si(row, col, value.si())
    }

    /// Overwrite cell `(row, col)` with an SI value.
    pub fn set_si(&mut self, row: usize, col: usize, si: f64) -> ValueResult<()> {
        self.data.ensure_mutable(WHAT)?;
        self.data.get().get(row, col)?;
        self.data.get_mut(WHAT)?.set(row, col, si)
    }

    /// Overwrite cell `(row, col)` with a value in the display unit.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> ValueResult<()> {
        self.set_in_unit(row, col, value, self.unit)
    }

    /// Overwrite cell `(row, col)` with a value in `unit`.
    pub fn set_in_unit(&mut self, row: usize, col: usize, value: f64, unit: Unit<K>) -> ValueResult<()> {
        self.set_si(row, col, unit.to_standard(value))
    }

    /// Apply `f` to every value in the display unit, in place.
    pub fn assign<F>(&mut self, f: F) -> ValueResult<()>
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let unit = self.unit;
        self.assign_si(move |si| unit.to_standard(f(unit.from_standard(si))))
    }

    /// Apply `f` to every SI value, in place.
    pub fn assign_si<F>(&mut self, f: F) -> ValueResult<()>
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        self.data.get_mut(WHAT)?.assign(f);
        Ok(())
    }

    /// Absolute value of every display value, in place.
    pub fn abs(&mut self) -> ValueResult<()> {
        self.assign(f64::abs)
    }

    /// Round every display value up, in place.
    pub fn ceil(&mut self) -> ValueResult<()> {
        self.assign(f64::ceil)
    }

    /// Round every display value down, in place.
    pub fn floor(&mut self) -> ValueResult<()> {
        self.assign(f64::floor)
    }

    /// Round every display value to the nearest integer, ties to even, in place.
    pub fn rint(&mut self) -> ValueResult<()> {
        self.assign(f64::round_ties_even)
    }

    /// Negate every display value, in place.
    pub fn neg(&mut self) -> ValueResult<()> {
        self.assign(|v| -v)
    }

    fn combine_in_place(
        &mut self,
        other: &MatrixData,
        op: fn(&mut MatrixData, &MatrixData) -> ValueResult<()>,
    ) -> ValueResult<()> {
        self.data.ensure_mutable(WHAT)?;
        check_shape(self.data.get().shape(), other.shape())?;
        op(self.data.get_mut(WHAT)?, other)
    }
}

impl<K: Admissible<Relative>> Matrix<K, Relative> {
    /// Sum of the cells, in the display unit.
    pub fn sum(&self) -> Scalar<K, Relative> {
        Scalar::from_si(self.sum_si(), self.unit)
    }

    /// Every cell multiplied by `factor`.
    pub fn times_scalar(&self, factor: f64) -> Self {
        Self::from_data(self.data.get().map(|si| si * factor), self.unit)
    }

    /// Every cell divided by `divisor`.
    pub fn divide_scalar(&self, divisor: f64) -> Self {
        Self::from_data(self.data.get().map(|si| si / divisor), self.unit)
    }

    /// Cell-wise product with another relative matrix.
    pub fn times<K2: Admissible<Relative>>(
        &self,
        other: &Matrix<K2, Relative>,
    ) -> ValueResult<Matrix<SI, Relative>> {
        let data = self.data.get().times(other.data.get())?;
        let dims = dimension::product(self.dimensions(), other.dimensions())?;
        Ok(Matrix::from_data(data, Unit::from_dimensions(dims)))
    }

    /// Cell-wise quotient by another relative matrix.
    pub fn divide<K2: Admissible<Relative>>(
        &self,
        other: &Matrix<K2, Relative>,
    ) -> ValueResult<Matrix<SI, Relative>> {
        let data = self.data.get().divide(other.data.get())?;
        let dims = dimension::quotient(self.dimensions(), other.dimensions())?;
        Ok(Matrix::from_data(data, Unit::from_dimensions(dims)))
    }

    /// Every cell multiplied by a relative scalar.
    pub fn times_by<K2: Admissible<Relative>>(
        &self,
        factor: Scalar<K2, Relative>,
    ) -> ValueResult<Matrix<SI, Relative>> {
        let si = factor.si();
        let dims = dimension::product(self.dimensions(), factor.dimensions())?;
        Ok(Matrix::from_data(self.data.get().map(|v| v * si), Unit::from_dimensions(dims)))
    }

    /// Multiply every cell by `factor`, in place.
    pub fn multiply_by(&mut self, factor: f64) -> ValueResult<()> {
        self.assign_si(move |si| si * factor)
    }

    /// Divide every cell by `divisor`, in place.
    pub fn divide_by(&mut self, divisor: f64) -> ValueResult<()> {
        self.assign_si(move |si| si / divisor)
    }

    /// The same values with their dimension vector only known at run time.
    pub fn to_si(&self) -> Matrix<SI, Relative> {
        Matrix::from_data(self.data.get().clone(), Unit::from_dimensions(self.dimensions()))
    }
}

impl<K: RelativeKind> Matrix<K, Relative> {
    /// Cell-wise sum.
    pub fn plus(&self, other: &Self) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().plus(other.data.get())?, self.unit))
    }

    /// Cell-wise difference.
    pub fn minus(&self, other: &Self) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().minus(other.data.get())?, self.unit))
    }

    /// Add `other` cell-wise, in place.
    pub fn increment_by(&mut self, other: &Self) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), MatrixData::increment_by)
    }

    /// Subtract `other` cell-wise, in place.
    pub fn decrement_by(&mut self, other: &Self) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), MatrixData::decrement_by)
    }
}

impl<K: RelativeWithAbsolute> Matrix<K, Relative> {
    /// Displace every position of `other`; the result is displayed in the unit of `other`.
    pub fn plus_absolute(&self, other: &Matrix<K::Absolute, Absolute>) -> ValueResult<Matrix<K::Absolute, Absolute>> {
        let data = self.data.get().plus(other.data.get())?;
        Ok(Matrix::from_data(data, other.unit))
    }
}

impl<K: AbsoluteKind> Matrix<K, Absolute> {
    /// Cell-wise distance from `other`.
    pub fn minus(&self, other: &Self) -> ValueResult<Matrix<K::Relative, Relative>> {
        let data = self.data.get().minus(other.data.get())?;
        Ok(Matrix::from_data(data, self.unit.relative_unit()))
    }

    /// Every position displaced by the matching cell of `other`.
    pub fn plus(&self, other: &Matrix<K::Relative, Relative>) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().plus(other.data.get())?, self.unit))
    }

    /// Every position displaced backwards by the matching cell of `other`.
    pub fn minus_relative(&self, other: &Matrix<K::Relative, Relative>) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().minus(other.data.get())?, self.unit))
    }

    /// Displace every position in place.
    pub fn increment_by(&mut self, other: &Matrix<K::Relative, Relative>) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), MatrixData::increment_by)
    }

    /// Displace every position backwards in place.
    pub fn decrement_by(&mut self, other: &Matrix<K::Relative, Relative>) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), MatrixData::decrement_by)
    }
}

impl Matrix<SI, Relative> {
    fn check_dimensions(&self, other: &Self) -> ValueResult<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(ValueError::incompatible(self.unit, other.unit))
        }
    }

    /// Cell-wise sum of two matrices with the same dimension vector.
    pub fn plus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_data(self.data.get().plus(other.data.get())?, self.unit))
    }

    /// Cell-wise difference of two matrices with the same dimension vector.
    pub fn minus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_data(self.data.get().minus(other.data.get())?, self.unit))
    }

    /// Resolve into the relative kind `K`.
    pub fn as_kind<K: RelativeKind>(&self) -> ValueResult<Matrix<K, Relative>> {
        Registry::global().instantiate_matrix::<K>(self.data.get().clone(), &self.unit)
    }

    /// The registered kind whose dimension vector matches these values.
    pub fn resolve_kind(&self) -> ValueResult<KindEntry> {
        Registry::global().resolve(&self.dimensions())
    }
}

impl<K: Kind, N: Nature> PartialEq for Matrix<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.unit.dimensions() == other.unit.dimensions() && self.data.get() == other.data.get()
    }
}

impl<K: Kind, N: Nature> fmt::Display for Matrix<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.data.get().rows_values().iter().enumerate() {
            if r > 0 {
                f.write_str(" ")?;
            }
            f.write_str("[")?;
            for (c, si) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(&self.unit.from_standard(*si), f)?;
            }
            f.write_str("]")?;
        }
        write!(f, "] {}", self.unit)
    }
}
