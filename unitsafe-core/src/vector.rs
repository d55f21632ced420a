//! One-dimensional collections of values of a single kind.
//!
//! A [`Vector`] couples [`VectorData`] (SI values, dense or sparse) with a display unit and a mutability flag.
//! Constructors return immutable vectors; [`Vector::mutable`] opens a copy-on-write view for writing.
//!
//! ```rust
//! use unitsafe_core::kinds::length;
//! use unitsafe_core::{Mutability, RelVector, StorageType};
//!
//! let frozen = RelVector::instantiate(&[1.0, 2.0, 3.0], length::KILOMETER, StorageType::Dense);
//! let mut draft = frozen.mutable();
//! assert_eq!(draft.mutability(), Mutability::MutableShared);
//!
//! draft.set_value(0, 10.0).unwrap();
//! assert_eq!(draft.mutability(), Mutability::MutableExclusive);
//! assert_eq!(frozen.get_si(0).unwrap(), 1000.0);
//! assert_eq!(draft.get_si(0).unwrap(), 10_000.0);
//! ```

use crate::dimension::{self, SIDimensions};
use crate::error::{check_shape, ValueError, ValueResult};
use crate::kind::{AbsoluteKind, Kind, RelativeKind, RelativeWithAbsolute, SI};
use crate::mutability::{Mutability, Shared};
use crate::nature::{Absolute, Admissible, Nature, Relative};
use crate::registry::{KindEntry, Registry};
use crate::scalar::Scalar;
use crate::storage::{StorageType, VectorData};
use crate::unit::Unit;
use core::fmt;
use core::marker::PhantomData;

const WHAT: &str = "vector";

/// A vector of values of kind `K` and nature `N`.
#[derive(Debug)]
pub struct Vector<K: Kind, N: Nature> {
    data: Shared<VectorData>,
    unit: Unit<K>,
    _nature: PhantomData<N>,
}

/// A vector of absolute values.
pub type AbsVector<K> = Vector<K, Absolute>;
/// A vector of relative values.
pub type RelVector<K> = Vector<K, Relative>;

impl<K: Kind, N: Nature> Clone for Vector<K, N> {
    /// The clone aliases the storage; whichever side writes first copies it.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            unit: self.unit,
            _nature: PhantomData,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Admissible<N>, N: Nature> Vector<K, N> {
    fn wrap(data: Shared<VectorData>, unit: Unit<K>) -> Self {
        Self {
            data,
            unit,
            _nature: PhantomData,
        }
    }

    /// An immutable vector of `values` expressed in `unit`.
    pub fn instantiate(values: &[f64], unit: Unit<K>, storage: StorageType) -> Self {
        let si = values.iter().map(|&v| unit.to_standard(v)).collect();
        Self::from_data(VectorData::from_values(si, storage), unit)
    }

    /// An immutable vector over pre-built SI storage.
    pub fn from_data(data: VectorData, unit: Unit<K>) -> Self {
        Self::wrap(Shared::new(data, false), unit)
    }

    /// Like [`Vector::instantiate`], but rejects empty input.
    pub fn create(values: &[f64], unit: Unit<K>, storage: StorageType) -> ValueResult<Self> {
        if values.is_empty() {
            return Err(ValueError::malformed("cannot create an empty vector"));
        }
        Ok(Self::instantiate(values, unit, storage))
    }

    /// A vector of `size` cells from `(index, value)` entries in any order, values expressed in `unit`.
    ///
    /// Cells without an entry hold zero in `unit`, which is a non-zero SI value for offset units.
    pub fn from_sparse(
        entries: &[(usize, f64)],
        size: usize,
        unit: Unit<K>,
        storage: StorageType,
    ) -> ValueResult<Self> {
        let display = VectorData::sparse(entries, size)?;
        let si = display.map(|v| unit.to_standard(v)).into_storage(storage);
        Ok(Self::from_data(si, unit))
    }

    /// A vector of scalars, displayed in the unit of the first one.
    pub fn from_scalars(scalars: &[Scalar<K, N>], storage: StorageType) -> ValueResult<Self> {
        let first = scalars
            .first()
            .ok_or_else(|| ValueError::malformed("cannot create a vector from no scalars"))?;
        let si = scalars.iter().map(Scalar::si).collect();
        Ok(Self::from_data(VectorData::from_values(si, storage), first.unit()))
    }

    /// An immutable vector of `size` zero SI values.
    pub fn zeros(size: usize, unit: Unit<K>, storage: StorageType) -> Self {
        Self::from_data(VectorData::zeros(size, storage), unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.data.get().size()
    }

    /// Current storage representation.
    pub fn storage_type(&self) -> StorageType {
        self.data.get().storage_type()
    }

    /// The underlying SI storage.
    pub fn data(&self) -> &VectorData {
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

    /// The same storage displayed in another unit, with the same mutability flag.
    pub fn with_unit(&self, unit: Unit<K>) -> Self {
        Self::wrap(self.data.view(self.data.is_mutable()), unit)
    }

    /// Cell `index` as a scalar in the display unit.
    pub fn get(&self, index: usize) -> ValueResult<Scalar<K, N>> {
        Ok(Scalar::from_si(self.get_si(index)?, self.unit))
    }

    /// SI value of cell `index`.
    pub fn get_si(&self, index: usize) -> ValueResult<f64> {
        self.data.get().get(index)
    }

    /// Value of cell `index` in the display unit.
    pub fn get_value(&self, index: usize) -> ValueResult<f64> {
        self.get_in_unit(index, self.unit)
    }

    /// Value of cell `index` in `unit`.
    pub fn get_in_unit(&self, index: usize, unit: Unit<K>) -> ValueResult<f64> {
        Ok(unit.from_standard(self.get_si(index)?))
    }

    /// Every SI value in index order.
    pub fn values_si(&self) -> Vec<f64> {
        self.data.get().dense_values()
    }

    /// Every value in the display unit.
    pub fn values(&self) -> Vec<f64> {
        self.values_in_unit(self.unit)
    }

    /// Every value in `unit`.
    pub fn values_in_unit(&self, unit: Unit<K>) -> Vec<f64> {
        self.data.get().iter().map(|si| unit.from_standard(si)).collect()
    }

    /// Iterate over the cells as scalars.
    pub fn iter(&self) -> impl Iterator<Item = Scalar<K, N>> + '_ {
        let unit = self.unit;
        self.data.get().iter().map(move |si| Scalar::from_si(si, unit))
    }

    /// Every cell as a scalar.
    pub fn scalars(&self) -> Vec<Scalar<K, N>> {
        self.iter().collect()
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
        self.to_storage(StorageType::Dense)
    }

    /// Copy in sparse storage, with the same mutability flag.
    pub fn to_sparse(&self) -> Self {
        self.to_storage(StorageType::Sparse)
    }

    fn to_storage(&self, storage: StorageType) -> Self {
        let data = self.data.get().to_storage(storage);
        Self::wrap(Shared::new(data, self.data.is_mutable()), self.unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutability
    // ─────────────────────────────────────────────────────────────────────────

    /// Current mutability state.
    pub fn mutability(&self) -> Mutability {
        self.data.state()
    }

    /// `true` unless the vector is immutable.
    pub fn is_mutable(&self) -> bool {
        self.data.is_mutable()
    }

    /// A writable view on the same storage. The first write copies the storage.
    pub fn mutable(&self) -> Self {
        Self::wrap(self.data.view(true), self.unit)
    }

    /// A read-only view on the same storage. If `self` is mutable, its next write copies the storage.
    pub fn immutable(&self) -> Self {
        Self::wrap(self.data.view(false), self.unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrite cell `index` with a scalar.
    pub fn set(&mut self, index: usize, value: Scalar<K, N>) -> ValueResult<()> {
        self.set_si(index, value.si())
    }

    /// Overwrite cell `index` with an SI value.
    pub fn set_si(&mut self, index: usize, si: f64) -> ValueResult<()> {
        self.data.ensure_mutable(WHAT)?;
        self.data.get().get(index)?;
        self.data.get_mut(WHAT)?.set(index, si)
    }

    /// Overwrite cell `index` with a value in the display unit.
    pub fn set_value(&mut self, index: usize, value: f64) -> ValueResult<()> {
        self.set_in_unit(index, value, self.unit)
    }

    /// Overwrite cell `index` with a value in `unit`.
    pub fn set_in_unit(&mut self, index: usize, value: f64, unit: Unit<K>) -> ValueResult<()> {
        self.set_si(index, unit.to_standard(value))
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
        other: &VectorData,
        op: fn(&mut VectorData, &VectorData) -> ValueResult<()>,
    ) -> ValueResult<()> {
        self.data.ensure_mutable(WHAT)?;
        check_shape(self.data.get().shape(), other.shape())?;
        op(self.data.get_mut(WHAT)?, other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Relative vectors
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Admissible<Relative>> Vector<K, Relative> {
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

    /// Cell-wise product with another relative vector; the dimension vectors add.
    pub fn times<K2: Admissible<Relative>>(
        &self,
        other: &Vector<K2, Relative>,
    ) -> ValueResult<Vector<SI, Relative>> {
        let data = self.data.get().times(other.data.get())?;
        let dims = dimension::product(self.dimensions(), other.dimensions())?;
        Ok(Vector::from_data(data, Unit::from_dimensions(dims)))
    }

    /// Cell-wise quotient by another relative vector; the dimension vectors subtract.
    pub fn divide<K2: Admissible<Relative>>(
        &self,
        other: &Vector<K2, Relative>,
    ) -> ValueResult<Vector<SI, Relative>> {
        let data = self.data.get().divide(other.data.get())?;
        let dims = dimension::quotient(self.dimensions(), other.dimensions())?;
        Ok(Vector::from_data(data, Unit::from_dimensions(dims)))
    }

    /// Every cell multiplied by a relative scalar; the dimension vectors add.
    pub fn times_by<K2: Admissible<Relative>>(
        &self,
        factor: Scalar<K2, Relative>,
    ) -> ValueResult<Vector<SI, Relative>> {
        let si = factor.si();
        let dims = dimension::product(self.dimensions(), factor.dimensions())?;
        Ok(Vector::from_data(self.data.get().map(|v| v * si), Unit::from_dimensions(dims)))
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
    pub fn to_si(&self) -> Vector<SI, Relative> {
        Vector::wrap(
            Shared::new(self.data.get().clone(), false),
            Unit::from_dimensions(self.dimensions()),
        )
    }
}

impl<K: RelativeKind> Vector<K, Relative> {
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
        self.combine_in_place(other.data.get(), VectorData::increment_by)
    }

    /// Subtract `other` cell-wise, in place.
    pub fn decrement_by(&mut self, other: &Self) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), VectorData::decrement_by)
    }
}

impl<K: RelativeWithAbsolute> Vector<K, Relative> {
    /// Displace every position of `other`; the result is displayed in the unit of `other`.
    pub fn plus_absolute(&self, other: &Vector<K::Absolute, Absolute>) -> ValueResult<Vector<K::Absolute, Absolute>> {
        let data = self.data.get().plus(other.data.get())?;
        Ok(Vector::from_data(data, other.unit))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Absolute vectors
// ─────────────────────────────────────────────────────────────────────────────

impl<K: AbsoluteKind> Vector<K, Absolute> {
    /// Cell-wise distance from `other`, displayed in the relative counterpart of the display unit.
    pub fn minus(&self, other: &Self) -> ValueResult<Vector<K::Relative, Relative>> {
        let data = self.data.get().minus(other.data.get())?;
        Ok(Vector::from_data(data, self.unit.relative_unit()))
    }

    /// Every position displaced by the matching cell of `other`.
    pub fn plus(&self, other: &Vector<K::Relative, Relative>) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().plus(other.data.get())?, self.unit))
    }

    /// Every position displaced backwards by the matching cell of `other`.
    pub fn minus_relative(&self, other: &Vector<K::Relative, Relative>) -> ValueResult<Self> {
        Ok(Self::from_data(self.data.get().minus(other.data.get())?, self.unit))
    }

    /// Displace every position by the matching cell of `other`, in place.
    pub fn increment_by(&mut self, other: &Vector<K::Relative, Relative>) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), VectorData::increment_by)
    }

    /// Displace every position backwards by the matching cell of `other`, in place.
    pub fn decrement_by(&mut self, other: &Vector<K::Relative, Relative>) -> ValueResult<()> {
        self.combine_in_place(other.data.get(), VectorData::decrement_by)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI-dimensioned vectors
// ─────────────────────────────────────────────────────────────────────────────

impl Vector<SI, Relative> {
    fn check_dimensions(&self, other: &Self) -> ValueResult<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(ValueError::incompatible(self.unit, other.unit))
        }
    }

    /// Cell-wise sum of two vectors with the same dimension vector.
    pub fn plus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_data(self.data.get().plus(other.data.get())?, self.unit))
    }

    /// Cell-wise difference of two vectors with the same dimension vector.
    pub fn minus(&self, other: &Self) -> ValueResult<Self> {
        self.check_dimensions(other)?;
        Ok(Self::from_data(self.data.get().minus(other.data.get())?, self.unit))
    }

    /// Resolve into the relative kind `K`; see [`Scalar::as_kind`].
    pub fn as_kind<K: RelativeKind>(&self) -> ValueResult<Vector<K, Relative>> {
        Registry::global().instantiate_vector::<K>(self.data.get().clone(), &self.unit)
    }

    /// The registered kind whose dimension vector matches these values.
    pub fn resolve_kind(&self) -> ValueResult<KindEntry> {
        Registry::global().resolve(&self.dimensions())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison and formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind, N: Nature> PartialEq for Vector<K, N> {
    /// Same dimension vector and the same SI value in every cell, whatever the storage or display unit.
    fn eq(&self, other: &Self) -> bool {
        self.unit.dimensions() == other.unit.dimensions() && self.data.get() == other.data.get()
    }
}

impl<K: Kind, N: Nature> fmt::Display for Vector<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, si) in self.data.get().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(&self.unit.from_standard(si), f)?;
        }
        write!(f, "] {}", self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::absolute_temperature;
    use crate::kinds::length::{self, Length};
    use crate::kinds::position::{self, Position};
    use crate::kinds::speed::Speed;
    use crate::kinds::{duration, temperature, time};
    use approx::assert_abs_diff_eq;

    fn lengths(values: &[f64], storage: StorageType) -> RelVector<Length> {
        RelVector::instantiate(values, length::METER, storage)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn instantiate_converts_to_si() {
        let v = RelVector::instantiate(&[1.0, 0.5], length::KILOMETER, StorageType::Dense);
        assert_eq!(v.values_si(), vec![1000.0, 500.0]);
        assert_eq!(v.values(), vec![1.0, 0.5]);
        assert_eq!(v.values_in_unit(length::METER), vec![1000.0, 500.0]);
        assert_eq!(v.mutability(), Mutability::Immutable);
        assert_eq!(v.to_string(), "[1 0.5] km");
    }

    #[test]
    fn create_rejects_empty_input() {
        assert!(matches!(
            RelVector::create(&[], length::METER, StorageType::Dense),
            Err(ValueError::MalformedInput { .. })
        ));
        assert!(RelVector::<Length>::from_scalars(&[], StorageType::Dense).is_err());
    }

    #[test]
    fn from_sparse_entries_in_any_order() {
        let v = RelVector::from_sparse(&[(3, 2.0), (0, 1.0)], 5, length::KILOMETER, StorageType::Sparse).unwrap();
        assert_eq!(v.storage_type(), StorageType::Sparse);
        assert_eq!(v.values_si(), vec![1000.0, 0.0, 0.0, 2000.0, 0.0]);
        assert_eq!(v.cardinality(), 2);
    }

    #[test]
    fn from_sparse_offset_unit_fills_implicit_cells() {
        let v = AbsVector::from_sparse(
            &[(1, 100.0)],
            3,
            absolute_temperature::DEGREE_CELSIUS,
            StorageType::Sparse,
        )
        .unwrap();
        let si = v.values_si();
        assert_abs_diff_eq!(si[0], 273.15);
        assert_abs_diff_eq!(si[1], 373.15);
        assert_abs_diff_eq!(si[2], 273.15);
        assert_eq!(v.cardinality(), 3);
    }

    #[test]
    fn from_scalars_uses_first_unit() {
        let v = RelVector::from_scalars(
            &[
                Scalar::new(1.0, length::KILOMETER),
                Scalar::new(10.0, length::METER),
            ],
            StorageType::Dense,
        )
        .unwrap();
        assert_eq!(v.unit(), length::KILOMETER);
        assert_eq!(v.values(), vec![1.0, 0.01]);
        assert_eq!(v.get(1).unwrap(), Scalar::new(10.0, length::METER));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutability
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn writes_to_immutable_fail() {
        let mut v = lengths(&[1.0, 2.0], StorageType::Dense);
        assert_eq!(v.set_si(0, 5.0), Err(ValueError::immutable("vector")));
        assert!(v.assign(|x| x * 2.0).is_err());
        assert!(v.multiply_by(2.0).is_err());
        assert_eq!(v.values_si(), vec![1.0, 2.0]);
    }

    #[test]
    fn mutable_view_does_not_leak_writes() {
        for storage in [StorageType::Dense, StorageType::Sparse] {
            let a = lengths(&[1.0, 0.0, 3.0], storage);
            let mut b = a.mutable();
            assert_eq!(b.mutability(), Mutability::MutableShared);
            b.set_si(1, 7.0).unwrap();
            b.increment_by(&lengths(&[1.0, 1.0, 1.0], StorageType::Dense)).unwrap();
            assert_eq!(b.mutability(), Mutability::MutableExclusive);
            assert_eq!(a.values_si(), vec![1.0, 0.0, 3.0]);
            assert_eq!(b.values_si(), vec![2.0, 8.0, 4.0]);
            assert_eq!(b.storage_type(), storage);
        }
    }

    #[test]
    fn freezing_a_mutable_vector() {
        let mut m = lengths(&[1.0], StorageType::Dense).mutable();
        m.set_si(0, 2.0).unwrap();
        let frozen = m.immutable();
        assert_eq!(m.mutability(), Mutability::MutableShared);
        m.set_si(0, 3.0).unwrap();
        assert_eq!(frozen.get_si(0).unwrap(), 2.0);
        assert_eq!(m.get_si(0).unwrap(), 3.0);
    }

    #[test]
    fn set_checks_index_before_copying() {
        let a = lengths(&[1.0, 2.0, 3.0], StorageType::Dense);
        let mut b = a.mutable();
        assert!(matches!(b.set_si(3, 1.0), Err(ValueError::IndexOutOfRange { .. })));
        assert_eq!(b.mutability(), Mutability::MutableShared);
    }

    #[test]
    fn in_place_display_transforms() {
        let mut v = RelVector::instantiate(&[-1.5, 2.5], length::KILOMETER, StorageType::Dense).mutable();
        v.rint().unwrap();
        assert_eq!(v.values(), vec![-2.0, 2.0]);
        v.abs().unwrap();
        v.neg().unwrap();
        assert_eq!(v.values(), vec![-2.0, -2.0]);
        v.assign(|x| x / 4.0).unwrap();
        v.ceil().unwrap();
        assert_eq!(v.values(), vec![-0.0, -0.0]);
        v.assign(|x| x + 0.7).unwrap();
        v.floor().unwrap();
        assert_eq!(v.values(), vec![0.0, 0.0]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn plus_minus_restore_and_check_shape() {
        let v = lengths(&[1.0, 2.0, 3.0], StorageType::Dense);
        let w = lengths(&[0.5, 0.0, -1.0], StorageType::Sparse);
        let back = v.plus(&w).unwrap().minus(&w).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.mutability(), Mutability::Immutable);
        let short = lengths(&[1.0, 2.0], StorageType::Dense);
        assert!(matches!(v.plus(&short), Err(ValueError::ShapeMismatch { .. })));
    }

    #[test]
    fn absolute_relative_lattice() {
        let p = AbsVector::instantiate(&[5.0, 7.0], position::METER, StorageType::Dense);
        let q = AbsVector::instantiate(&[2.0, 1.0], position::METER, StorageType::Dense);
        let d: RelVector<Length> = p.minus(&q).unwrap();
        assert_eq!(d.values_si(), vec![3.0, 6.0]);
        let moved: AbsVector<Position> = p.minus_relative(&lengths(&[2.0, 2.0], StorageType::Dense)).unwrap();
        assert_eq!(moved.values_si(), vec![3.0, 5.0]);
        let back = d.plus_absolute(&q).unwrap();
        assert_eq!(back, p);
        assert_eq!(q.plus(&d).unwrap(), p);
    }

    #[test]
    fn absolute_in_place_displacement() {
        let mut t = AbsVector::instantiate(&[0.0, 60.0], time::SECOND, StorageType::Dense).mutable();
        let step = RelVector::instantiate(&[1.0, 1.0], duration::MINUTE, StorageType::Dense);
        t.increment_by(&step).unwrap();
        assert_eq!(t.values_si(), vec![60.0, 120.0]);
        t.decrement_by(&step.times_scalar(2.0)).unwrap();
        assert_eq!(t.values_si(), vec![-60.0, 0.0]);
    }

    #[test]
    fn absolute_temperature_difference() {
        let a = AbsVector::instantiate(&[20.0], absolute_temperature::DEGREE_CELSIUS, StorageType::Dense);
        let b = AbsVector::instantiate(&[5.0], absolute_temperature::DEGREE_CELSIUS, StorageType::Dense);
        let d = a.minus(&b).unwrap();
        assert_eq!(d.unit(), temperature::DEGREE_CELSIUS);
        assert_abs_diff_eq!(d.values()[0], 15.0, epsilon = 1e-9);
    }

    #[test]
    fn product_resolves_to_speed() {
        let distance = lengths(&[10.0, 0.0, 6.0], StorageType::Dense);
        let elapsed = RelVector::instantiate(&[2.0, 1.0, 3.0], duration::SECOND, StorageType::Dense);
        let ratio = distance.divide(&elapsed).unwrap();
        assert_eq!(ratio.dimensions(), SIDimensions::LENGTH.minus(SIDimensions::TIME));
        let speed: RelVector<Speed> = ratio.as_kind().unwrap();
        assert_eq!(speed.values_si(), vec![5.0, 0.0, 2.0]);
        assert_eq!(ratio.resolve_kind().unwrap().name, "Speed");
        assert!(matches!(
            distance.to_si().plus(&ratio),
            Err(ValueError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn multiplicative_ops_keep_nan() {
        let a = lengths(&[0.0, 1.0], StorageType::Sparse);
        let b = lengths(&[0.0, 2.0], StorageType::Sparse);
        let q = a.divide(&b).unwrap();
        assert!(q.get_si(0).unwrap().is_nan());
        assert_eq!(q.get_si(1).unwrap(), 0.5);
    }

    #[test]
    fn products_report_dimension_overflow() {
        let v = lengths(&[1.0, 2.0], StorageType::Sparse);
        let big = Scalar::new(1.0, length::METER).powi(100).unwrap();
        let scaled = v.times_by(big).unwrap();
        assert_eq!(scaled.dimensions().exponent(3), (101, 1));
        assert!(matches!(scaled.times(&scaled), Err(ValueError::DimensionOverflow { .. })));
        assert!(matches!(scaled.times_by(big), Err(ValueError::DimensionOverflow { .. })));
        let inverse = v.times_by(big.reciprocal().unwrap()).unwrap();
        assert!(matches!(scaled.divide(&inverse), Err(ValueError::DimensionOverflow { .. })));
    }

    #[test]
    fn scalar_scaling() {
        let v = lengths(&[1.0, 2.0], StorageType::Dense);
        assert_eq!(v.times_scalar(3.0).values_si(), vec![3.0, 6.0]);
        assert_eq!(v.divide_scalar(2.0).values_si(), vec![0.5, 1.0]);
        let work = v.times_by(Scalar::new(2.0, crate::kinds::force::NEWTON)).unwrap();
        assert_eq!(work.resolve_kind().unwrap().name, "Energy");
        let mut m = v.mutable();
        m.multiply_by(10.0).unwrap();
        m.divide_by(4.0).unwrap();
        assert_eq!(m.values_si(), vec![2.5, 5.0]);
        assert_eq!(m.sum().si(), 7.5);
    }

    #[test]
    fn storage_conversion_keeps_values() {
        let v = lengths(&[0.0, 0.0, 3.0, 0.0], StorageType::Dense);
        let s = v.to_sparse();
        assert_eq!(s.storage_type(), StorageType::Sparse);
        assert_eq!(s.cardinality(), 1);
        assert_eq!(s.to_dense().values_si(), vec![0.0, 0.0, 3.0, 0.0]);
        assert_eq!(s, v);
        assert_eq!(v.with_unit(length::KILOMETER), v);
    }
}
