//! Builder for constructing CatalogReadModel from domain objects

use super::catalog_read_model::{CatalogReadModel, IndexMetadataView};
use super::package_view::{DependencyGroupView, DependencyView, PackageView};
use crate::package_catalog::domain::{Catalog, IndexMetadata, PackageRecord};

/// Builder transforming the catalog into the render-ready read model
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    /// Builds a CatalogReadModel
    ///
    /// # Arguments
    /// * `catalog` - The built catalog
    /// * `metadata` - Index metadata (timestamp, tool info, source path)
    pub fn build(catalog: &Catalog, metadata: &IndexMetadata) -> CatalogReadModel {
        CatalogReadModel {
            metadata: Self::build_metadata(metadata),
            packages: catalog
                .packages()
                .iter()
                .map(|package| Self::build_package(package, catalog))
                .collect(),
        }
    }

    fn build_metadata(metadata: &IndexMetadata) -> IndexMetadataView {
        IndexMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            source_path: metadata.source_path().to_string(),
        }
    }

    /// Converts one record, marking each dependency alternative as
    /// installed when the catalog contains it
    pub fn build_package(package: &PackageRecord, catalog: &Catalog) -> PackageView {
        let depends = package
            .depends()
            .iter()
            .map(|group| DependencyGroupView {
                alternatives: group
                    .alternatives()
                    .iter()
                    .map(|dependency| DependencyView {
                        name: dependency.name().to_string(),
                        version_constraint: dependency.version_constraint().map(str::to_string),
                        architecture_qualifier: dependency
                            .architecture_qualifier()
                            .map(str::to_string),
                        installed: catalog.contains(dependency.name()),
                    })
                    .collect(),
            })
            .collect();

        PackageView {
            name: package.name().to_string(),
            version: package.version().map(str::to_string),
            architecture: package.architecture().map(str::to_string),
            section: package.section().map(str::to_string),
            maintainer: package.maintainer().map(str::to_string),
            synopsis: package.synopsis().map(str::to_string),
            description_paragraphs: package
                .description()
                .map(Self::split_paragraphs)
                .unwrap_or_default(),
            depends,
            reverse_depends: package
                .reverse_depends()
                .iter()
                .map(|name| name.as_str().to_string())
                .collect(),
        }
    }

    /// Paragraphs are separated by empty lines
    fn split_paragraphs(description: &str) -> Vec<String> {
        description
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_catalog::services::{ControlFileParser, RecordNormalizer};

    fn catalog(text: &str) -> Catalog {
        let parsed = ControlFileParser::parse(text);
        Catalog::build(RecordNormalizer::normalize(parsed.records).packages).unwrap()
    }

    fn metadata() -> IndexMetadata {
        IndexMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "dpkg-index".to_string(),
            "0.1.0".to_string(),
            "status".to_string(),
        )
    }

    #[test]
    fn test_build_metadata() {
        let model = CatalogReadModelBuilder::build(&Catalog::default(), &metadata());

        assert_eq!(model.metadata.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(model.metadata.tool_name, "dpkg-index");
        assert_eq!(model.metadata.source_path, "status");
        assert!(model.packages.is_empty());
    }

    #[test]
    fn test_build_packages_sorted_with_installed_flags() {
        let catalog = catalog(
            "Package: zsh\nVersion: 5.9\nDepends: libc6 (>= 2.34), zsh-common | missing\n\n\
             Package: libc6\n\nPackage: zsh-common\n",
        );
        let model = CatalogReadModelBuilder::build(&catalog, &metadata());

        assert_eq!(model.package_names(), vec!["libc6", "zsh", "zsh-common"]);

        let zsh = model.find_package("zsh").unwrap();
        assert_eq!(zsh.version.as_deref(), Some("5.9"));
        assert_eq!(zsh.depends.len(), 2);
        assert!(zsh.depends[0].alternatives[0].installed);
        assert_eq!(
            zsh.depends[0].alternatives[0].version_constraint.as_deref(),
            Some(">= 2.34")
        );
        assert!(zsh.depends[1].alternatives[0].installed);
        assert!(!zsh.depends[1].alternatives[1].installed);

        let libc = model.find_package("libc6").unwrap();
        assert_eq!(libc.reverse_depends, vec!["zsh".to_string()]);
    }

    #[test]
    fn test_build_dependency_architecture_qualifier() {
        let catalog = catalog(
            "Package: tool\nDepends: python3:any (>= 3.11), libc6\n\nPackage: python3\n",
        );
        let model = CatalogReadModelBuilder::build(&catalog, &metadata());

        let tool = model.find_package("tool").unwrap();
        let python = &tool.depends[0].alternatives[0];
        assert_eq!(python.name, "python3");
        assert_eq!(python.architecture_qualifier.as_deref(), Some("any"));
        assert_eq!(python.version_constraint.as_deref(), Some(">= 3.11"));
        assert!(python.installed);
        assert!(tool.depends[1].alternatives[0].architecture_qualifier.is_none());
    }

    #[test]
    fn test_description_paragraphs() {
        let catalog = catalog("Package: a\nDescription: short\n first\n line\n .\n second\n");
        let model = CatalogReadModelBuilder::build(&catalog, &metadata());

        let a = model.find_package("a").unwrap();
        assert_eq!(a.synopsis.as_deref(), Some("short"));
        assert_eq!(
            a.description_paragraphs,
            vec!["first\nline".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_find_package_not_found() {
        let model = CatalogReadModelBuilder::build(&catalog("Package: a\n"), &metadata());
        assert!(model.find_package("b").is_none());
        assert!(model.find_package("A").is_none());
    }
}
