use crate::application::read_models::{
    CatalogReadModel, DependencyGroupView, IndexMetadataView, PackageView,
};
use crate::ports::outbound::IndexFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct IndexDocument<'a> {
    metadata: Metadata<'a>,
    packages: Vec<Package<'a>>,
}

#[derive(Debug, Serialize)]
struct PackageDocument<'a> {
    metadata: Metadata<'a>,
    package: Package<'a>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Package<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    architecture: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maintainer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synopsis: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    description: Vec<&'a str>,
    depends: Vec<Vec<Dependency<'a>>>,
    #[serde(rename = "reverseDepends")]
    reverse_depends: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct Dependency<'a> {
    name: &'a str,
    #[serde(rename = "versionConstraint", skip_serializing_if = "Option::is_none")]
    version_constraint: Option<&'a str>,
    #[serde(rename = "architectureQualifier", skip_serializing_if = "Option::is_none")]
    architecture_qualifier: Option<&'a str>,
    installed: bool,
}

/// JsonFormatter adapter for a machine-readable catalog dump
///
/// `depends` is a list of groups; each group lists its `|` alternatives.
/// Version constraints and architecture qualifiers are always included.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &IndexMetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &metadata.timestamp,
            tool: Tool {
                name: &metadata.tool_name,
                version: &metadata.tool_version,
            },
            source: &metadata.source_path,
        }
    }

    fn build_package(package: &PackageView) -> Package<'_> {
        Package {
            name: &package.name,
            version: package.version.as_deref(),
            architecture: package.architecture.as_deref(),
            section: package.section.as_deref(),
            maintainer: package.maintainer.as_deref(),
            synopsis: package.synopsis.as_deref(),
            description: package
                .description_paragraphs
                .iter()
                .map(String::as_str)
                .collect(),
            depends: package.depends.iter().map(Self::build_group).collect(),
            reverse_depends: package.reverse_depends.iter().map(String::as_str).collect(),
        }
    }

    fn build_group(group: &DependencyGroupView) -> Vec<Dependency<'_>> {
        group
            .alternatives
            .iter()
            .map(|dependency| Dependency {
                name: &dependency.name,
                version_constraint: dependency.version_constraint.as_deref(),
                architecture_qualifier: dependency.architecture_qualifier.as_deref(),
                installed: dependency.installed,
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexFormatter for JsonFormatter {
    fn format_index(&self, model: &CatalogReadModel) -> Result<String> {
        let document = IndexDocument {
            metadata: Self::build_metadata(&model.metadata),
            packages: model.packages.iter().map(Self::build_package).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    fn format_package(&self, model: &CatalogReadModel, package: &PackageView) -> Result<String> {
        let document = PackageDocument {
            metadata: Self::build_metadata(&model.metadata),
            package: Self::build_package(package),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
