//! Native share capability port.
//!
//! # Invariants
//! - Callers must check `supports_file_share` before calling `share`.
//! - A missing capability is a normal branch, not an error of the port.

use crate::export::file::ExportFile;

/// Payload handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Title shown by the share sheet.
    pub title: String,
    pub file: ExportFile,
}

/// Host platform share mechanism.
pub trait SharePort {
    /// Whether the platform can share this file.
    fn supports_file_share(&self, file: &ExportFile) -> bool;

    /// Hands the request to the platform and blocks until it completes.
    ///
    /// `Err` carries the platform rejection reason (user dismissal included).
    fn share(&self, request: &ShareRequest) -> Result<(), String>;
}

/// Port for hosts without any file-sharing capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFileShare;

impl SharePort for NoFileShare {
    fn supports_file_share(&self, _file: &ExportFile) -> bool {
        false
    }

    fn share(&self, _request: &ShareRequest) -> Result<(), String> {
        Err("file sharing is not available on this platform".to_string())
    }
}
