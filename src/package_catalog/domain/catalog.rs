use super::PackageRecord;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that prevent a catalog from being built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate package name in status file: {name}\n\n💡 Hint: Each Package field must be unique; check the status file for repeated entries")]
    DuplicateName { name: String },
}

/// Catalog aggregate: the immutable, sorted and indexed package collection
///
/// Records are sorted by name (case-sensitive, byte order). The catalog is
/// never mutated after [`Catalog::build`]; a new status file produces a new
/// catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packages: Vec<PackageRecord>,
    names: HashSet<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Sorts the records by name and builds the name set and lookup index
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateName`] if two records share a name
    pub fn build(mut packages: Vec<PackageRecord>) -> Result<Self, CatalogError> {
        packages.sort_by(|a, b| a.name().cmp(b.name()));

        let mut names = HashSet::with_capacity(packages.len());
        let mut index = HashMap::with_capacity(packages.len());

        for (position, package) in packages.iter().enumerate() {
            if !names.insert(package.name().to_string()) {
                return Err(CatalogError::DuplicateName {
                    name: package.name().to_string(),
                });
            }
            index.insert(package.name().to_string(), position);
        }

        Ok(Self {
            packages,
            names,
            index,
        })
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name).map(|&position| &self.packages[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All package names in sorted order
    pub fn all_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name()).collect()
    }

    /// All packages in sorted order
    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of reverse-dependency edges across the catalog
    pub fn reverse_dependency_count(&self) -> usize {
        self.packages.iter().map(|p| p.reverse_depends().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_catalog::domain::PackageName;

    fn record(name: &str) -> PackageRecord {
        PackageRecord::new(PackageName::new(name.to_string()).unwrap())
    }

    #[test]
    fn test_build_sorts_by_name() {
        let catalog = Catalog::build(vec![record("zsh"), record("bash"), record("dash")]).unwrap();
        assert_eq!(catalog.all_names(), vec!["bash", "dash", "zsh"]);
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let catalog = Catalog::build(vec![record("b"), record("B"), record("a")]).unwrap();
        assert_eq!(catalog.all_names(), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_find_and_contains() {
        let catalog = Catalog::build(vec![record("bash"), record("dash")]).unwrap();

        assert_eq!(catalog.find("dash").unwrap().name(), "dash");
        assert!(catalog.find("Dash").is_none());
        assert!(catalog.find("fish").is_none());
        assert!(catalog.contains("bash"));
        assert!(!catalog.contains("BASH"));
    }

    #[test]
    fn test_find_returns_every_package() {
        let catalog =
            Catalog::build(vec![record("c"), record("a"), record("b"), record("d")]).unwrap();
        for package in catalog.packages() {
            assert_eq!(catalog.find(package.name()), Some(package));
        }
    }

    #[test]
    fn test_duplicate_name_fails() {
        let result = Catalog::build(vec![record("X"), record("Y"), record("X")]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateName {
                name: "X".to_string()
            }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::build(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.all_names().is_empty());
        assert!(!catalog.contains(""));
        assert_eq!(catalog.reverse_dependency_count(), 0);
    }

    #[test]
    fn test_duplicate_name_display() {
        let error = CatalogError::DuplicateName {
            name: "libc6".to_string(),
        };
        assert!(error.to_string().contains("Duplicate package name"));
        assert!(error.to_string().contains("libc6"));
    }
}
