//! Process-wide registry of kinds.
//!
//! The registry maps each kind type to a [`KindEntry`] and resolves SI-dimension vectors back to the unique
//! relative kind that carries them. That is how a product such as `length * frequency`, whose dimension vector is
//! only known at run time, becomes a typed speed again.
//!
//! [`Registry::global`] is initialized on first use with the built-in kinds. Additional kinds can be registered at
//! any time; resolutions are cached per dimension vector.

use crate::dimension::SIDimensions;
use crate::error::{ValueError, ValueResult};
use crate::kind::{Kind, KindNature, RelativeKind, SI};
use crate::matrix::Matrix;
use crate::nature::Relative;
use crate::scalar::Scalar;
use crate::storage::{MatrixData, VectorData};
use crate::unit::Unit;
use crate::vector::Vector;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    crate::kinds::register_builtin(&registry);
    registry
});

/// Descriptor of a registered kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindEntry {
    /// Kind name.
    pub name: &'static str,
    /// SI-dimension vector.
    pub dimensions: SIDimensions,
    /// Absolute or relative, with the counterpart name.
    pub nature: KindNature,
    /// Id of the standard unit.
    pub standard: &'static str,
}

impl KindEntry {
    fn of<K: Kind>() -> Self {
        Self {
            name: K::NAME,
            dimensions: K::DIMENSIONS,
            nature: K::NATURE,
            standard: K::STANDARD.id(),
        }
    }
}

/// Registry of kinds and dimension-vector resolutions.
#[derive(Debug, Default)]
pub struct Registry {
    kinds: RwLock<HashMap<TypeId, KindEntry>>,
    resolved: RwLock<HashMap<SIDimensions, KindEntry>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, holding the built-in kinds.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Register `K` after validating its descriptor.
    ///
    /// Registering a kind twice returns the existing entry. [`SI`] cannot be registered.
    pub fn register<K: Kind>(&self) -> ValueResult<KindEntry> {
        if let Some(entry) = self.kinds.read().get(&TypeId::of::<K>()) {
            return Ok(*entry);
        }
        validate::<K>()?;

        let entry = KindEntry::of::<K>();
        let mut kinds = self.kinds.write();
        let entry = *kinds.entry(TypeId::of::<K>()).or_insert(entry);
        // A new kind may make an earlier resolution ambiguous. The cache entry goes before the `kinds` lock is
        // released so that no resolution can observe the new kind set alongside the stale entry.
        self.resolved.write().remove(&entry.dimensions);
        drop(kinds);

        log::debug!("registered kind {} [{}]", entry.name, entry.dimensions);
        Ok(entry)
    }

    /// Entry of the registered kind `K`.
    pub fn entry<K: Kind>(&self) -> ValueResult<KindEntry> {
        self.kinds
            .read()
            .get(&TypeId::of::<K>())
            .copied()
            .ok_or_else(|| ValueError::unresolvable(format!("kind {} is not registered", K::NAME)))
    }

    /// `true` if `K` is registered.
    pub fn contains<K: Kind>(&self) -> bool {
        self.kinds.read().contains_key(&TypeId::of::<K>())
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.read().len()
    }

    /// `true` if no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.read().is_empty()
    }

    /// The unique registered relative kind with dimension vector `dimensions`.
    pub fn resolve(&self, dimensions: &SIDimensions) -> ValueResult<KindEntry> {
        if let Some(entry) = self.resolved.read().get(dimensions) {
            return Ok(*entry);
        }

        // Lock order is `kinds` then `resolved`, as in `register`. The cache is filled while the candidate set is
        // still pinned by the read guard.
        let kinds = self.kinds.read();
        let candidates: Vec<KindEntry> = kinds
            .values()
            .filter(|e| e.nature.is_relative() && e.dimensions == *dimensions)
            .copied()
            .collect();

        match candidates.as_slice() {
            [entry] => {
                self.resolved.write().insert(*dimensions, *entry);
                drop(kinds);
                log::debug!("resolved [{}] to kind {}", dimensions, entry.name);
                Ok(*entry)
            }
            [] => Err(ValueError::unresolvable(format!(
                "no relative kind with dimensions [{}]",
                dimensions
            ))),
            several => {
                let mut names: Vec<_> = several.iter().map(|e| e.name).collect();
                names.sort_unstable();
                Err(ValueError::unresolvable(format!(
                    "dimensions [{}] are ambiguous between {}",
                    dimensions,
                    names.join(", ")
                )))
            }
        }
    }

    fn check_instantiable<K: RelativeKind>(&self, unit: &Unit<SI>) -> ValueResult<()> {
        self.entry::<K>()?;
        if unit.dimensions() == K::DIMENSIONS {
            Ok(())
        } else {
            Err(ValueError::incompatible(unit, K::STANDARD))
        }
    }

    /// A scalar of kind `K` from an SI value, displayed in `K`'s standard unit.
    pub fn instantiate_scalar<K: RelativeKind>(&self, si: f64, unit: &Unit<SI>) -> ValueResult<Scalar<K, Relative>> {
        self.check_instantiable::<K>(unit)?;
        Ok(Scalar::from_si(si, K::STANDARD))
    }

    /// An immutable vector of kind `K` over SI storage, displayed in `K`'s standard unit.
    pub fn instantiate_vector<K: RelativeKind>(
        &self,
        data: VectorData,
        unit: &Unit<SI>,
    ) -> ValueResult<Vector<K, Relative>> {
        self.check_instantiable::<K>(unit)?;
        Ok(Vector::from_data(data, K::STANDARD))
    }

    /// An immutable matrix of kind `K` over SI storage, displayed in `K`'s standard unit.
    pub fn instantiate_matrix<K: RelativeKind>(
        &self,
        data: MatrixData,
        unit: &Unit<SI>,
    ) -> ValueResult<Matrix<K, Relative>> {
        self.check_instantiable::<K>(unit)?;
        Ok(Matrix::from_data(data, K::STANDARD))
    }
}

/// Check the invariants of a kind descriptor.
fn validate<K: Kind>() -> ValueResult<()> {
    let fail = |reason: String| Err(ValueError::configuration(K::NAME, reason));

    if TypeId::of::<K>() == TypeId::of::<SI>() {
        return fail("the SI pseudo-kind cannot be registered".into());
    }
    if !K::STANDARD.is_standard() {
        return fail(format!("standard unit {} is not identity-scaled", K::STANDARD.id()));
    }
    if !K::UNITS.iter().any(|u| *u == K::STANDARD) {
        return fail(format!("standard unit {} is missing from the unit list", K::STANDARD.id()));
    }

    let mut ids = HashSet::new();
    for unit in K::UNITS {
        if unit.dimensions() != K::DIMENSIONS {
            return fail(format!(
                "unit {} has dimensions [{}], expected [{}]",
                unit.id(),
                unit.dimensions(),
                K::DIMENSIONS
            ));
        }
        if !ids.insert(unit.id()) {
            return fail(format!("duplicate unit id {}", unit.id()));
        }
    }
    Ok(())
}
