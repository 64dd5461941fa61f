use crate::adapters::outbound::formatters::{HtmlFormatter, HtmlOptions, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::IndexFormatter;

/// Factory for creating index formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `html_options` - Page options; ignored by the JSON formatter
    ///
    /// # Examples
    /// ```
    /// use dpkg_index::adapters::outbound::formatters::HtmlOptions;
    /// use dpkg_index::application::dto::OutputFormat;
    /// use dpkg_index::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html, HtmlOptions::default());
    /// ```
    pub fn create(format: OutputFormat, html_options: HtmlOptions) -> Box<dyn IndexFormatter> {
        match format {
            OutputFormat::Html => Box::new(HtmlFormatter::with_options(html_options)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dpkg_index::application::dto::OutputFormat;
    /// use dpkg_index::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Generating HTML output...",
            OutputFormat::Json => "📝 Generating JSON output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogReadModelBuilder;
    use crate::package_catalog::domain::{Catalog, IndexMetadata};

    fn empty_model() -> crate::application::read_models::CatalogReadModel {
        let metadata = IndexMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "dpkg-index".to_string(),
            "0.1.0".to_string(),
            "status".to_string(),
        );
        CatalogReadModelBuilder::build(&Catalog::default(), &metadata)
    }

    #[test]
    fn test_create_html_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Html, HtmlOptions::default());
        let output = formatter.format_index(&empty_model()).unwrap();
        assert!(output.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_create_html_formatter_passes_options() {
        let options = HtmlOptions {
            title: "Mirror".to_string(),
            ..HtmlOptions::default()
        };
        let formatter = FormatterFactory::create(OutputFormat::Html, options);
        let output = formatter.format_index(&empty_model()).unwrap();
        assert!(output.contains("<title>Mirror</title>"));
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json, HtmlOptions::default());
        let output = formatter.format_index(&empty_model()).unwrap();
        assert!(output.starts_with('{'));
    }

    #[test]
    fn test_progress_message_html() {
        let message = FormatterFactory::progress_message(OutputFormat::Html);
        assert_eq!(message, "📝 Generating HTML output...");
    }

    #[test]
    fn test_progress_message_json() {
        let message = FormatterFactory::progress_message(OutputFormat::Json);
        assert_eq!(message, "📝 Generating JSON output...");
    }
}
