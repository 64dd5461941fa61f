use crate::package_catalog::domain::{Catalog, PackageRecord};
use crate::ports::inbound::CatalogQueryPort;
use std::sync::{Arc, PoisonError, RwLock};

/// CatalogHandle - the single published reference to the current catalog
///
/// Consumers receive a clone of the handle instead of reaching for global
/// state. A rebuild constructs a complete catalog first and then swaps the
/// `Arc` under a short write lock, so a reader sees either the old or the
/// new catalog and never a half-built one. Snapshots taken before a swap
/// stay valid.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            current: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Returns the currently published catalog
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publishes `catalog`, returning the one it replaced
    pub fn replace(&self, catalog: Arc<Catalog>) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, catalog)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::default()))
    }
}

impl CatalogQueryPort for CatalogHandle {
    fn all_names(&self) -> Vec<String> {
        self.snapshot()
            .all_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn find(&self, name: &str) -> Option<PackageRecord> {
        self.snapshot().find(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.snapshot().contains(name)
    }
}
