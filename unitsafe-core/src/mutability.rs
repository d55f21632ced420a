//! Copy-on-write handle around vector and matrix storage.
//!
//! A value holds its storage behind an [`Arc`] plus a mutable flag. Whether a mutable value owns its storage
//! exclusively or still shares it with another view is read from the `Arc`'s reference count, so the
//! three-state protocol needs no extra bookkeeping:
//!
//! - [`Mutability::Immutable`]: every write fails with [`ValueError::ImmutableMutation`].
//! - [`Mutability::MutableShared`]: the next write deep-copies the storage first.
//! - [`Mutability::MutableExclusive`]: writes go straight to the storage.

use crate::error::{ValueError, ValueResult};
use std::sync::Arc;

/// Mutability state of a vector or matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Writes are rejected.
    Immutable,
    /// Writable, but the storage is still aliased; the first write copies it.
    MutableShared,
    /// Writable and the sole owner of its storage.
    MutableExclusive,
}

impl Mutability {
    /// `true` for both mutable states.
    pub const fn is_mutable(self) -> bool {
        !matches!(self, Mutability::Immutable)
    }
}

/// Storage shared between views, with a per-view mutable flag.
#[derive(Debug)]
pub(crate) struct Shared<D> {
    data: Arc<D>,
    mutable: bool,
}

impl<D: Clone> Shared<D> {
    pub(crate) fn new(data: D, mutable: bool) -> Self {
        Self {
            data: Arc::new(data),
            mutable,
        }
    }

    pub(crate) fn get(&self) -> &D {
        &self.data
    }

    pub(crate) fn state(&self) -> Mutability {
        match (self.mutable, Arc::strong_count(&self.data)) {
            (false, _) => Mutability::Immutable,
            (true, 1) => Mutability::MutableExclusive,
            (true, _) => Mutability::MutableShared,
        }
    }

    pub(crate) fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// A new view on the same storage with the given flag.
    pub(crate) fn view(&self, mutable: bool) -> Self {
        Self {
            data: Arc::clone(&self.data),
            mutable,
        }
    }

    pub(crate) fn ensure_mutable(&self, what: &'static str) -> ValueResult<()> {
        if self.mutable {
            Ok(())
        } else {
            Err(ValueError::immutable(what))
        }
    }

    /// Write access, splitting off a private copy if the storage is aliased.
    ///
    /// `what` names the value type in the error raised for immutable views.
    pub(crate) fn get_mut(&mut self, what: &'static str) -> ValueResult<&mut D> {
        self.ensure_mutable(what)?;
        if Arc::strong_count(&self.data) > 1 {
            log::trace!("copy-on-write: splitting shared {} storage", what);
        }
        Ok(Arc::make_mut(&mut self.data))
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<D> Clone for Shared<D> {
    /// Clones alias the storage; a mutable clone therefore starts out shared.
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            mutable: self.mutable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immutable_rejects_writes() {
        let mut shared = Shared::new(vec![1.0], false);
        assert_eq!(shared.state(), Mutability::Immutable);
        assert_eq!(
            shared.get_mut("vector").unwrap_err(),
            ValueError::immutable("vector")
        );
        assert!(shared.ensure_mutable("vector").is_err());
    }

    #[test]
    fn exclusive_writes_in_place() {
        let mut shared = Shared::new(vec![1.0], true);
        assert_eq!(shared.state(), Mutability::MutableExclusive);
        shared.get_mut("vector").unwrap()[0] = 2.0;
        assert_eq!(shared.get(), &vec![2.0]);
    }

    #[test]
    fn shared_view_copies_on_first_write() {
        let source = Shared::new(vec![1.0, 2.0], false);
        let mut view = source.view(true);
        assert_eq!(view.state(), Mutability::MutableShared);
        assert!(view.ptr_eq(&source));

        view.get_mut("vector").unwrap()[0] = 9.0;
        assert!(!view.ptr_eq(&source));
        assert_eq!(view.state(), Mutability::MutableExclusive);
        assert_eq!(source.get(), &vec![1.0, 2.0]);
        assert_eq!(view.get(), &vec![9.0, 2.0]);
    }

    #[test]
    fn freezing_makes_the_source_shared() {
        let mut source = Shared::new(vec![1.0], true);
        let frozen = source.view(false);
        assert_eq!(source.state(), Mutability::MutableShared);
        source.get_mut("vector").unwrap()[0] = 5.0;
        assert_eq!(frozen.get(), &vec![1.0]);
        assert_eq!(source.state(), Mutability::MutableExclusive);
    }
}
