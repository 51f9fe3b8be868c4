//! Download and share delivery of export files.
//!
//! # Invariants
//! - `share` never calls `SharePort::share` when the capability is missing.
//! - Log events carry sizes only, never file contents.

use crate::export::file::ExportFile;
use crate::export::{ExportError, SHARE_TITLE};
use crate::platform::share::{SharePort, ShareRequest};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Writes `file` into `dir` under its fixed name and returns the written path.
///
/// An existing file with the same name is overwritten.
///
/// # Errors
/// - `ExportError::Io` when `dir` is missing or not writable.
pub fn download(file: &ExportFile, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(&file.file_name);
    std::fs::write(&path, file.contents.as_bytes()).map_err(|source| {
        warn!(
            "event=export_download module=export status=error error_code=write_failed error={}",
            source
        );
        ExportError::Io {
            path: path.clone(),
            source,
        }
    })?;

    info!(
        "event=export_download module=export status=ok mime={} bytes={}",
        file.mime_type,
        file.len_bytes()
    );
    Ok(path)
}

/// Hands `file` to the platform share mechanism when it is supported.
///
/// # Errors
/// - `ExportError::ShareUnsupported` when the port lacks file sharing.
/// - `ExportError::ShareFailed` when the platform rejects the request.
pub fn share(file: &ExportFile, port: &dyn SharePort) -> Result<(), ExportError> {
    if !port.supports_file_share(file) {
        info!("event=export_share module=export status=unsupported");
        return Err(ExportError::ShareUnsupported);
    }

    let request = ShareRequest {
        title: SHARE_TITLE.to_string(),
        file: file.clone(),
    };
    port.share(&request).map_err(|reason| {
        warn!("event=export_share module=export status=error error_code=share_rejected");
        ExportError::ShareFailed(reason)
    })?;

    info!(
        "event=export_share module=export status=ok bytes={}",
        file.len_bytes()
    );
    Ok(())
}
