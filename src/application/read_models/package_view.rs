//! Package view structs for the read model
//!
//! These structs provide a flattened, render-ready view of one package.

/// View representation of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageView {
    pub name: String,
    pub version: Option<String>,
    pub architecture: Option<String>,
    pub section: Option<String>,
    pub maintainer: Option<String>,
    /// One-line summary
    pub synopsis: Option<String>,
    /// Extended description split into paragraphs
    pub description_paragraphs: Vec<String>,
    pub depends: Vec<DependencyGroupView>,
    /// Names of installed packages depending on this one, in status-file order
    pub reverse_depends: Vec<String>,
}

/// View representation of one `Depends` entry and its alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGroupView {
    pub alternatives: Vec<DependencyView>,
}

/// View representation of a single dependency alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyView {
    pub name: String,
    pub version_constraint: Option<String>,
    /// Architecture qualifier without the colon, e.g. `any`
    pub architecture_qualifier: Option<String>,
    /// Whether the dependency is present in the catalog (and can be linked)
    pub installed: bool,
}
