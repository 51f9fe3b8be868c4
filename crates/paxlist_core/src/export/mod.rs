//! Passenger list export.
//!
//! # Responsibility
//! - Serialize the list into `name;identifier` text.
//! - Deliver it as a downloaded file or through the platform share port.
//!
//! # Invariants
//! - Exports of an empty list are aborted, never written as empty files.
//! - File name and MIME type are fixed (`passageiros.csv`, `text/csv`).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod delimited;
pub mod deliver;
pub mod file;

pub use delimited::to_delimited_text;
pub use deliver::{download, share};
pub use file::{ExportFile, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

/// Title attached to share requests.
pub const SHARE_TITLE: &str = "Passenger list";

/// Export failures, each mapped to one user notice.
#[derive(Debug)]
pub enum ExportError {
    /// Nothing to export.
    EmptyList,
    /// Serializing the records failed.
    Encode(String),
    /// Writing the download file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Host platform cannot share files.
    ShareUnsupported,
    /// Host platform rejected or aborted the share.
    ShareFailed(String),
}

impl ExportError {
    /// Transient user-facing notice for this failure.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::EmptyList => "The passenger list is empty.",
            Self::Encode(_) => "Could not generate the passenger file.",
            Self::Io { .. } => "Could not save the passenger file.",
            Self::ShareUnsupported => "Your device does not support direct sharing.",
            Self::ShareFailed(_) => "Sharing was cancelled or failed.",
        }
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList => write!(f, "export aborted: passenger list is empty"),
            Self::Encode(reason) => write!(f, "failed to encode export: {reason}"),
            Self::Io { path, source } => {
                write!(f, "failed to write export `{}`: {source}", path.display())
            }
            Self::ShareUnsupported => write!(f, "file sharing is not supported"),
            Self::ShareFailed(reason) => write!(f, "share failed: {reason}"),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Encode(value.to_string())
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
