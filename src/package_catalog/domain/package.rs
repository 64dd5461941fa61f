use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a package name with validation
///
/// Names are compared case-sensitively, exactly as they appear in the
/// status file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Package name contains whitespace or control characters");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One alternative of a `Depends` entry, e.g. `libc6 (>= 2.34)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    version_constraint: Option<String>,
    architecture_qualifier: Option<String>,
}

impl Dependency {
    pub fn new(
        name: String,
        version_constraint: Option<String>,
        architecture_qualifier: Option<String>,
    ) -> Self {
        Self {
            name,
            version_constraint,
            architecture_qualifier,
        }
    }

    /// Bare package name, without version constraint or architecture qualifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constraint text without parentheses, e.g. `>= 2.34`
    pub fn version_constraint(&self) -> Option<&str> {
        self.version_constraint.as_deref()
    }

    /// Architecture qualifier without the colon, e.g. `any` for `python3:any`
    pub fn architecture_qualifier(&self) -> Option<&str> {
        self.architecture_qualifier.as_deref()
    }
}

/// One comma-separated entry of `Depends`: a list of `|` alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGroup {
    alternatives: Vec<Dependency>,
}

impl DependencyGroup {
    pub fn new(alternatives: Vec<Dependency>) -> Self {
        Self { alternatives }
    }

    pub fn alternatives(&self) -> &[Dependency] {
        &self.alternatives
    }
}

/// PackageRecord: a normalized package entry of the catalog
///
/// Only allow-listed fields survive normalization. `reverse_depends` is
/// derived from the `Depends` fields of the other records and never read
/// from the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: PackageName,
    version: Option<String>,
    architecture: Option<String>,
    section: Option<String>,
    maintainer: Option<String>,
    synopsis: Option<String>,
    description: Option<String>,
    depends: Vec<DependencyGroup>,
    reverse_depends: Vec<PackageName>,
}

impl PackageRecord {
    pub fn new(name: PackageName) -> Self {
        Self {
            name,
            version: None,
            architecture: None,
            section: None,
            maintainer: None,
            synopsis: None,
            description: None,
            depends: Vec::new(),
            reverse_depends: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_architecture(mut self, architecture: Option<String>) -> Self {
        self.architecture = architecture;
        self
    }

    pub fn with_section(mut self, section: Option<String>) -> Self {
        self.section = section;
        self
    }

    pub fn with_maintainer(mut self, maintainer: Option<String>) -> Self {
        self.maintainer = maintainer;
        self
    }

    pub fn with_description(mut self, synopsis: Option<String>, description: Option<String>) -> Self {
        self.synopsis = synopsis;
        self.description = description;
        self
    }

    pub fn with_depends(mut self, depends: Vec<DependencyGroup>) -> Self {
        self.depends = depends;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    /// First line of `Description`
    pub fn synopsis(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }

    /// Extended description; paragraphs are separated by an empty line
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn depends(&self) -> &[DependencyGroup] {
        &self.depends
    }

    /// Every dependency name across all groups and alternatives, in source
    /// order, each name once
    pub fn dependency_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for dependency in self.depends.iter().flat_map(|g| g.alternatives()) {
            if !names.contains(&dependency.name()) {
                names.push(dependency.name());
            }
        }
        names
    }

    pub fn reverse_depends(&self) -> &[PackageName] {
        &self.reverse_depends
    }

    /// Records `dependent` as a reverse dependency unless it is already present
    pub(crate) fn add_reverse_dependency(&mut self, dependent: PackageName) {
        if !self.reverse_depends.contains(&dependent) {
            self.reverse_depends.push(dependent);
        }
    }
}
