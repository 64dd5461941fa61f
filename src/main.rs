use dpkg_index::adapters::outbound::console::StderrProgressReporter;
use dpkg_index::adapters::outbound::filesystem::FileSystemReader;
use dpkg_index::adapters::outbound::formatters::{HtmlOptions, DEFAULT_TITLE};
use dpkg_index::application::catalog_handle::CatalogHandle;
use dpkg_index::application::dto::{CatalogRequest, OutputFormat, DEFAULT_STATUS_PATH};
use dpkg_index::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dpkg_index::application::read_models::CatalogReadModelBuilder;
use dpkg_index::application::use_cases::BuildCatalogUseCase;
use dpkg_index::cli::Args;
use dpkg_index::config::{self, ConfigFile};
use dpkg_index::ports::inbound::CatalogQueryPort;
use dpkg_index::shared::error::{ExitCode, IndexError};
use dpkg_index::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let exit_code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::Success
                }
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(exit_code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Load config: explicit path, or auto-discovered in the working directory
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let status_file_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildCatalogUseCase::new(status_file_reader, progress_reporter);

    // Build and publish the catalog
    let handle = CatalogHandle::default();
    let response = use_case.rebuild(&handle, CatalogRequest::new(settings.status_path.clone()))?;

    if let Some(name) = &args.package {
        if !handle.contains(name) {
            return Err(IndexError::PackageNotFound { name: name.clone() }.into());
        }
    }

    let catalog = handle.snapshot();
    let model = CatalogReadModelBuilder::build(&catalog, &response.metadata);

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format, settings.html_options);
    let formatted_output = match args.package.as_deref().and_then(|n| model.find_package(n)) {
        Some(package) => formatter.format_package(&model, package)?,
        None => formatter.format_index(&model)?,
    };

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit_path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<IndexError>()
        .map(IndexError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

/// Effective settings: command-line flags override the config file,
/// which overrides the built-in defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    status_path: PathBuf,
    format: OutputFormat,
    html_options: HtmlOptions,
}

impl Settings {
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let status_path = args
            .status
            .clone()
            .or_else(|| config.and_then(|c| c.status_file.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_PATH));

        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();

        let html_options = HtmlOptions {
            title: config
                .and_then(|c| c.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            heading: config.and_then(|c| c.heading.clone()),
            link_prefix: config
                .and_then(|c| c.link_prefix.clone())
                .unwrap_or_default(),
            show_version_constraints: config
                .and_then(|c| c.show_version_constraints)
                .unwrap_or(false),
        };

        Self {
            status_path,
            format,
            html_options,
        }
    }
}
