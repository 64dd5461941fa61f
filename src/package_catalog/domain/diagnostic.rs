use std::fmt;
use thiserror::Error;

/// Why a control-file line could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line has no `:` field delimiter
    MissingColon,
    /// The text before `:` is empty
    EmptyFieldName,
    /// The field name contains whitespace
    InvalidFieldName,
    /// An indented line appears before any field of its record
    OrphanContinuation,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingColon => write!(f, "missing ':' delimiter"),
            MalformedReason::EmptyFieldName => write!(f, "empty field name"),
            MalformedReason::InvalidFieldName => write!(f, "field name contains whitespace"),
            MalformedReason::OrphanContinuation => {
                write!(f, "continuation line without a preceding field")
            }
        }
    }
}

/// Recoverable problems found while parsing and normalizing.
///
/// Diagnostics never abort the pipeline: the offending line or record is
/// skipped and reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("line {line_number}: {reason}, line skipped: {content:?}")]
    MalformedLine {
        line_number: usize,
        content: String,
        reason: MalformedReason,
    },

    #[error("record #{record_index} (line {line_number}) has no usable Package field, record dropped")]
    MissingName {
        record_index: usize,
        line_number: usize,
    },

    #[error("record #{record_index} (line {line_number}) has an invalid Package name: {reason}, record dropped")]
    InvalidName {
        record_index: usize,
        line_number: usize,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let diagnostic = Diagnostic::MalformedLine {
            line_number: 7,
            content: "garbage".to_string(),
            reason: MalformedReason::MissingColon,
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 7: missing ':' delimiter, line skipped: \"garbage\""
        );
    }

    #[test]
    fn test_missing_name_display() {
        let diagnostic = Diagnostic::MissingName {
            record_index: 2,
            line_number: 15,
        };
        assert!(diagnostic.to_string().contains("record #2 (line 15)"));
        assert!(diagnostic.to_string().contains("record dropped"));
    }

    #[test]
    fn test_invalid_name_display() {
        let diagnostic = Diagnostic::InvalidName {
            record_index: 0,
            line_number: 1,
            reason: "Package name contains whitespace or control characters".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "record #0 (line 1) has an invalid Package name: \
             Package name contains whitespace or control characters, record dropped"
        );
    }
}
