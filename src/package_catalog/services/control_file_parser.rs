use crate::package_catalog::domain::{Diagnostic, MalformedReason, RawRecord};

/// Result of parsing a control file
///
/// Parsing never fails: lines that cannot be understood are skipped and
/// listed in `diagnostics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedControlFile {
    /// Records in source order
    pub records: Vec<RawRecord>,
    /// Skipped lines, in source order
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the input was not text (invalid UTF-8 or NUL bytes)
    pub non_text: bool,
}

/// ControlFileParser service for the Debian control-file format
///
/// Records are separated by blank lines. Each line is either `Field: value`
/// or a continuation (leading space or tab) of the previous field.
pub struct ControlFileParser;

impl ControlFileParser {
    /// Parses raw bytes, treating anything that is not text as empty input
    pub fn parse_bytes(content: &[u8]) -> ParsedControlFile {
        match std::str::from_utf8(content) {
            Ok(text) if !text.contains('\0') => Self::parse(text),
            _ => ParsedControlFile {
                non_text: true,
                ..ParsedControlFile::default()
            },
        }
    }

    /// Parses control-file text into raw records
    ///
    /// # Arguments
    /// * `content` - The full text of the control file
    ///
    /// # Returns
    /// The records in file order plus a diagnostic for every skipped line
    pub fn parse(content: &str) -> ParsedControlFile {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut records = Vec::new();
        let mut diagnostics = Vec::new();
        let mut current: Option<RawRecord> = None;
        // Position of the field that a continuation line extends
        let mut last_field: Option<usize> = None;

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            if line.trim().is_empty() {
                records.extend(current.take());
                last_field = None;
                continue;
            }

            if line.starts_with([' ', '\t']) {
                match (current.as_mut(), last_field) {
                    (Some(record), Some(position)) => record.append_line(position, &line[1..]),
                    _ => diagnostics.push(Self::malformed(
                        line_number,
                        line,
                        MalformedReason::OrphanContinuation,
                    )),
                }
                continue;
            }

            match Self::split_field(line) {
                Ok((name, value)) => {
                    let record = current.get_or_insert_with(|| RawRecord::new(line_number));
                    last_field = Some(record.insert(name, value.to_string()));
                }
                Err(reason) => {
                    diagnostics.push(Self::malformed(line_number, line, reason));
                    last_field = None;
                }
            }
        }

        records.extend(current);

        ParsedControlFile {
            records,
            diagnostics,
            non_text: false,
        }
    }

    /// Splits `Field: value` at the first colon
    fn split_field(line: &str) -> Result<(&str, &str), MalformedReason> {
        let (name, value) = line
            .split_once(':')
            .ok_or(MalformedReason::MissingColon)?;

        if name.is_empty() {
            return Err(MalformedReason::EmptyFieldName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(MalformedReason::InvalidFieldName);
        }

        Ok((name, value.trim()))
    }

    fn malformed(line_number: usize, line: &str, reason: MalformedReason) -> Diagnostic {
        Diagnostic::MalformedLine {
            line_number,
            content: line.to_string(),
            reason,
        }
    }
}
