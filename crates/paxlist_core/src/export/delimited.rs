//! `name;identifier` text serialization.
//!
//! # Invariants
//! - One record per line, `\n` separated, no header, no trailing newline.
//! - Field order is `name;identifier`; fields are never quoted, so `;` inside
//!   a name is written verbatim.
//! - Line breaks inside a name are collapsed to a single space.

use crate::export::ExportError;
use crate::model::passenger::PassengerRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;

/// Field separator of the exported text.
pub const FIELD_SEPARATOR: u8 = b';';

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid line break regex"));

/// Serializes records as delimited text.
///
/// # Errors
/// - `ExportError::EmptyList` for an empty list, which aborts the export.
/// - `ExportError::Encode` when the writer fails.
pub fn to_delimited_text(records: &[PassengerRecord]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyList);
    }

    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        let name = LINE_BREAK_RE.replace_all(&record.name, " ");
        writer.write_record([&*name, record.identifier.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|err| ExportError::Encode(err.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
