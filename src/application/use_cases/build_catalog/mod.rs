use crate::application::catalog_handle::CatalogHandle;
use crate::application::dto::{CatalogRequest, CatalogResponse};
use crate::package_catalog::domain::{Catalog, Diagnostic, PackageRecord, RawRecord};
use crate::package_catalog::services::{
    ControlFileParser, IndexMetadataGenerator, NormalizedRecords, ParsedControlFile,
    RecordNormalizer,
};
use crate::ports::outbound::{ProgressReporter, StatusFileReader};
use crate::shared::error::IndexError;
use crate::shared::Result;
use std::sync::Arc;

/// Number of build stages reported through the progress reporter
const BUILD_STAGES: usize = 4;

/// Diagnostics beyond this count are summarized instead of listed
const MAX_REPORTED_DIAGNOSTICS: usize = 20;

/// BuildCatalogUseCase - Core use case turning a status file into a catalog
///
/// This use case orchestrates reader → parser → normalizer → catalog using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - StatusFileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildCatalogUseCase<SR, PR> {
    status_file_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> BuildCatalogUseCase<SR, PR>
where
    SR: StatusFileReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildCatalogUseCase with injected dependencies
    pub fn new(status_file_reader: SR, progress_reporter: PR) -> Self {
        Self {
            status_file_reader,
            progress_reporter,
        }
    }

    /// Executes the catalog build
    ///
    /// # Returns
    /// CatalogResponse containing the catalog, metadata and diagnostics
    ///
    /// # Errors
    /// Returns an error if:
    /// - The status file cannot be read
    /// - Records were found but none has a usable Package field
    /// - Two records share a package name
    pub fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse> {
        // Step 1: Read the status file
        let content = self.read_and_report_status_file(&request)?;

        // Step 2: Parse control-file records
        let parsed = self.parse_and_report(&content, &request);
        let raw_count = parsed.records.len();

        // Step 3: Normalize and derive reverse dependencies
        let normalized = self.normalize_and_report(parsed.records);

        let diagnostics: Vec<Diagnostic> = parsed
            .diagnostics
            .into_iter()
            .chain(normalized.diagnostics)
            .collect();
        self.report_diagnostics(&diagnostics);

        if raw_count > 0 && normalized.packages.is_empty() {
            return Err(IndexError::NoUsableRecords {
                path: request.status_path.clone(),
                dropped: raw_count,
            }
            .into());
        }

        // Step 4: Sort and index
        let catalog = self.build_and_report_catalog(normalized.packages)?;

        let metadata = IndexMetadataGenerator::generate_default_metadata(
            &request.status_path.display().to_string(),
        );

        Ok(CatalogResponse::new(Arc::new(catalog), metadata, diagnostics))
    }

    /// Builds a catalog from `request` and publishes it through `handle`
    ///
    /// The new catalog replaces the old one only after it is fully built;
    /// on error the previously published catalog stays in place.
    pub fn rebuild(&self, handle: &CatalogHandle, request: CatalogRequest) -> Result<CatalogResponse> {
        let response = self.execute(request)?;
        handle.replace(Arc::clone(&response.catalog));
        Ok(response)
    }

    fn read_and_report_status_file(&self, request: &CatalogRequest) -> Result<Vec<u8>> {
        self.progress_reporter.report(&format!(
            "📖 Loading dpkg status file: {}",
            request.status_path.display()
        ));
        self.progress_reporter
            .report_progress(1, BUILD_STAGES, Some("reading status file"));

        self.status_file_reader
            .read_status_file(&request.status_path)
    }

    fn parse_and_report(&self, content: &[u8], request: &CatalogRequest) -> ParsedControlFile {
        self.progress_reporter
            .report_progress(2, BUILD_STAGES, Some("parsing records"));

        let parsed = ControlFileParser::parse_bytes(content);
        if parsed.non_text {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is not a text file; treating it as an empty database.",
                request.status_path.display()
            ));
        }
        parsed
    }

    fn normalize_and_report(&self, records: Vec<RawRecord>) -> NormalizedRecords {
        self.progress_reporter
            .report_progress(3, BUILD_STAGES, Some("linking reverse dependencies"));

        RecordNormalizer::normalize(records)
    }

    fn build_and_report_catalog(&self, packages: Vec<PackageRecord>) -> Result<Catalog> {
        self.progress_reporter
            .report_progress(4, BUILD_STAGES, Some("indexing packages"));

        let catalog = Catalog::build(packages)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Indexed {} package(s) with {} reverse-dependency link(s)",
            catalog.len(),
            catalog.reverse_dependency_count()
        ));

        Ok(catalog)
    }

    fn report_diagnostics(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics.iter().take(MAX_REPORTED_DIAGNOSTICS) {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", diagnostic));
        }

        if diagnostics.len() > MAX_REPORTED_DIAGNOSTICS {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} more problem(s) not shown",
                diagnostics.len() - MAX_REPORTED_DIAGNOSTICS
            ));
        }
    }
}
