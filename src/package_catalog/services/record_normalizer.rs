use super::DependsParser;
use crate::package_catalog::domain::{Diagnostic, PackageName, PackageRecord, RawRecord};
use crate::package_catalog::policies::FieldAllowList;
use std::collections::HashMap;

/// Output of [`RecordNormalizer::normalize`]
#[derive(Debug, Clone, Default)]
pub struct NormalizedRecords {
    /// Clean records in source order (not sorted)
    pub packages: Vec<PackageRecord>,
    /// Records that were dropped, in source order
    pub diagnostics: Vec<Diagnostic>,
}

/// RecordNormalizer service turning raw records into package records
///
/// Runs in two passes. Pass 1 cleans every record on its own. Pass 2 needs
/// the complete set of names from pass 1 to derive reverse dependencies,
/// so it only starts once pass 1 has produced all records.
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn normalize(raw_records: Vec<RawRecord>) -> NormalizedRecords {
        let mut diagnostics = Vec::new();
        let mut packages = Vec::with_capacity(raw_records.len());

        for (record_index, raw) in raw_records.iter().enumerate() {
            match Self::clean_record(record_index, raw) {
                Ok(package) => packages.push(package),
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }

        Self::link_reverse_dependencies(&mut packages);

        NormalizedRecords {
            packages,
            diagnostics,
        }
    }

    /// Pass 1: keep allow-listed fields and parse the structured ones
    ///
    /// A record without a non-empty `Package` field yields `MissingName`;
    /// one whose name fails validation yields `InvalidName`.
    fn clean_record(
        record_index: usize,
        raw: &RawRecord,
    ) -> std::result::Result<PackageRecord, Diagnostic> {
        let retained = Self::strip_unused_fields(raw);

        let name = retained
            .get(FieldAllowList::PACKAGE)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(Diagnostic::MissingName {
                record_index,
                line_number: raw.line_number(),
            })?;
        let name = PackageName::new(name.to_string()).map_err(|e| Diagnostic::InvalidName {
            record_index,
            line_number: raw.line_number(),
            reason: e.to_string(),
        })?;

        let field = |field_name: &str| {
            retained
                .get(field_name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let (synopsis, description) = retained
            .get(FieldAllowList::DESCRIPTION)
            .map(Self::split_description)
            .unwrap_or_default();

        let depends = retained
            .get(FieldAllowList::DEPENDS)
            .map(DependsParser::parse)
            .unwrap_or_default();

        Ok(PackageRecord::new(name)
            .with_version(field(FieldAllowList::VERSION))
            .with_architecture(field(FieldAllowList::ARCHITECTURE))
            .with_section(field(FieldAllowList::SECTION))
            .with_maintainer(field(FieldAllowList::MAINTAINER))
            .with_description(synopsis, description)
            .with_depends(depends))
    }

    /// Copy of `raw` holding only the fields of [`FieldAllowList`]
    fn strip_unused_fields(raw: &RawRecord) -> RawRecord {
        let mut retained = RawRecord::new(raw.line_number());
        for (name, value) in raw
            .fields()
            .filter(|(name, _)| FieldAllowList::is_retained(name))
        {
            retained.insert(name, value.to_string());
        }
        retained
    }

    /// Splits `Description` into the synopsis line and the extended text
    ///
    /// A continuation line consisting of a single `.` is an empty line in
    /// the extended description.
    fn split_description(value: &str) -> (Option<String>, Option<String>) {
        let mut lines = value.lines();

        let synopsis = lines
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string);

        let extended = lines
            .map(|line| if line.trim() == "." { "" } else { line.trim_end() })
            .collect::<Vec<_>>()
            .join("\n");
        let extended = extended.trim_matches('\n');

        (
            synopsis,
            (!extended.is_empty()).then(|| extended.to_string()),
        )
    }

    /// Pass 2: add every record's name to the reverse dependencies of the
    /// packages it depends on
    ///
    /// Dependents are visited in source order, so each reverse-dependency
    /// list is in source order too. Names that are not in the set of
    /// records are skipped. When a name is duplicated, the first record
    /// with that name receives the links; the catalog rejects duplicates
    /// afterwards anyway.
    fn link_reverse_dependencies(packages: &mut [PackageRecord]) {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(packages.len());
        for (position, package) in packages.iter().enumerate() {
            positions
                .entry(package.name().to_string())
                .or_insert(position);
        }

        let mut links: Vec<(usize, PackageName)> = Vec::new();
        for package in packages.iter() {
            for dependency in package.dependency_names() {
                if let Some(&target) = positions.get(dependency) {
                    links.push((target, package.package_name().clone()));
                }
            }
        }

        for (target, dependent) in links {
            packages[target].add_reverse_dependency(dependent);
        }
    }
}
