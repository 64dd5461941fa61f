/// FieldAllowList policy: the control fields that survive normalization
///
/// Everything else in a status record (Status, Installed-Size, Conffiles,
/// Replaces, ...) is dropped because no page displays it.
pub struct FieldAllowList;

impl FieldAllowList {
    pub const PACKAGE: &'static str = "Package";
    pub const VERSION: &'static str = "Version";
    pub const ARCHITECTURE: &'static str = "Architecture";
    pub const SECTION: &'static str = "Section";
    pub const MAINTAINER: &'static str = "Maintainer";
    pub const DESCRIPTION: &'static str = "Description";
    pub const DEPENDS: &'static str = "Depends";

    /// Allowed field names, in display order
    pub const FIELDS: [&'static str; 7] = [
        Self::PACKAGE,
        Self::VERSION,
        Self::ARCHITECTURE,
        Self::SECTION,
        Self::MAINTAINER,
        Self::DESCRIPTION,
        Self::DEPENDS,
    ];

    /// Returns true if the field is kept; matching is case-sensitive
    pub fn is_retained(field_name: &str) -> bool {
        Self::FIELDS.contains(&field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retained_fields() {
        for field in FieldAllowList::FIELDS {
            assert!(FieldAllowList::is_retained(field));
        }
    }

    #[test]
    fn test_dropped_fields() {
        assert!(!FieldAllowList::is_retained("Status"));
        assert!(!FieldAllowList::is_retained("Installed-Size"));
        assert!(!FieldAllowList::is_retained("Conffiles"));
        assert!(!FieldAllowList::is_retained("Pre-Depends"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!FieldAllowList::is_retained("package"));
        assert!(!FieldAllowList::is_retained("DEPENDS"));
    }
}
