/// Formatter adapters for the HTML and JSON outputs
mod html_formatter;
mod json_formatter;

pub use html_formatter::{HtmlFormatter, HtmlOptions, DEFAULT_TITLE};
pub use json_formatter::JsonFormatter;
