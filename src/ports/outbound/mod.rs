/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, output).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod status_file_reader;

pub use formatter::IndexFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use status_file_reader::StatusFileReader;
