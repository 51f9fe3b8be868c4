//! Export file payload shared by download and share paths.

use crate::export::delimited::to_delimited_text;
use crate::export::ExportError;
use crate::model::passenger::PassengerRecord;

/// Fixed file name of every export.
pub const EXPORT_FILE_NAME: &str = "passageiros.csv";
/// MIME type announced for the export.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// In-memory export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportFile {
    /// Wraps already serialized text with the fixed name and MIME type.
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            contents: contents.into(),
        }
    }

    /// Builds the export for `records`.
    ///
    /// Fails with `ExportError::EmptyList` when there is nothing to export.
    pub fn from_records(records: &[PassengerRecord]) -> Result<Self, ExportError> {
        to_delimited_text(records).map(Self::new)
    }

    pub fn len_bytes(&self) -> usize {
        self.contents.len()
    }
}
