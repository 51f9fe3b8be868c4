//! FFI use-case API for the Flutter passenger form.
//!
//! # Responsibility
//! - Expose the passenger form operations to Dart via FRB.
//! - Hold one in-process session, the equivalent of the page state.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures come back as envelopes carrying a user-facing `message`.
//! - Confirmation and the share sheet are shown by Dart; Rust receives the
//!   outcome (`confirmed`, `can_share_files`) as plain arguments.

use log::info;
use once_cell::sync::Lazy;
use paxlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ExportError, ExportFile, PassengerRecord, PassengerService, PresetAnswer, SaveOutcome,
    SharePort, ShareRequest,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

static SESSION: Lazy<Mutex<PassengerService>> =
    Lazy::new(|| Mutex::new(PassengerService::in_memory()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One row of the rendered passenger list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerItem {
    pub id: u64,
    pub name: String,
    /// Digits-only CPF.
    pub identifier: String,
    /// CPF formatted as `000.000.000-00`.
    pub display_identifier: String,
}

/// Everything the form page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name_input: String,
    pub identifier_input: String,
    pub editing_id: Option<u64>,
    /// "Add passenger" or "Save changes".
    pub submit_label: String,
    pub items: Vec<PassengerItem>,
}

/// Result envelope for list actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Affected passenger, when there is one.
    pub passenger_id: Option<u64>,
    /// Notice to show; empty when nothing should be shown.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, passenger_id: Option<u64>) -> Self {
        Self {
            ok: true,
            passenger_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            passenger_id: None,
            message: message.into(),
        }
    }
}

/// Result envelope for export actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub ok: bool,
    /// Written export file, for download or for the Dart share sheet.
    pub path: Option<String>,
    pub file_name: String,
    pub mime_type: String,
    /// Share sheet title, set by `export_prepare_share`.
    pub share_title: Option<String>,
    pub message: String,
}

impl ExportResponse {
    fn failure(err: &ExportError) -> Self {
        Self {
            ok: false,
            path: None,
            file_name: paxlist_core::EXPORT_FILE_NAME.to_string(),
            mime_type: paxlist_core::EXPORT_MIME_TYPE.to_string(),
            share_title: None,
            // Empty list aborts silently.
            message: match err {
                ExportError::EmptyList => String::new(),
                other => other.notice().to_string(),
            },
        }
    }
}

/// Returns the current form and list.
#[flutter_rust_bridge::frb(sync)]
pub fn form_snapshot() -> FormSnapshot {
    snapshot_of(&session())
}

/// Binds the two text inputs.
#[flutter_rust_bridge::frb(sync)]
pub fn form_set_inputs(name: String, identifier: String) -> FormSnapshot {
    let mut service = session();
    service.set_name_input(name);
    service.set_identifier_input(identifier);
    snapshot_of(&service)
}

/// Saves the bound inputs (create or update).
#[flutter_rust_bridge::frb(sync)]
pub fn passenger_save() -> ActionResponse {
    save_in(&mut session())
}

/// Deletes one passenger; unknown ids succeed as a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn passenger_remove(id: u64) -> ActionResponse {
    let removed = session().remove(id);
    ActionResponse::success(String::new(), removed.then_some(id))
}

/// Loads one passenger into the form for editing.
#[flutter_rust_bridge::frb(sync)]
pub fn passenger_begin_edit(id: u64) -> ActionResponse {
    if session().begin_edit(id) {
        ActionResponse::success(String::new(), Some(id))
    } else {
        ActionResponse::failure(format!("passenger not found: {id}"))
    }
}

/// Leaves edit mode and clears the inputs.
#[flutter_rust_bridge::frb(sync)]
pub fn passenger_cancel_edit() -> FormSnapshot {
    let mut service = session();
    service.cancel_edit();
    snapshot_of(&service)
}

/// Empties the list when Dart's confirmation dialog answered yes.
#[flutter_rust_bridge::frb(sync)]
pub fn passenger_clear(confirmed: bool) -> ActionResponse {
    if session().clear(&PresetAnswer(confirmed)) {
        ActionResponse::success("List cleared.", None)
    } else {
        ActionResponse::success(String::new(), None)
    }
}

/// Returns the delimited export text, or `None` for an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn export_text() -> Option<String> {
    session().export_file().ok().map(|file| file.contents)
}

/// Writes the export file into `dir` (the app download directory).
#[flutter_rust_bridge::frb(sync)]
pub fn export_download(dir: String) -> ExportResponse {
    download_in(&session(), PathBuf::from(dir))
}

/// Stages the export for Dart's share sheet.
///
/// `can_share_files` is the platform capability check done by Dart. When it
/// is false the response carries the not-supported notice and nothing is
/// written.
#[flutter_rust_bridge::frb(sync)]
pub fn export_prepare_share(dir: String, can_share_files: bool) -> ExportResponse {
    prepare_share_in(&session(), PathBuf::from(dir), can_share_files)
}

fn session() -> MutexGuard<'static, PassengerService> {
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn snapshot_of(service: &PassengerService) -> FormSnapshot {
    let form = service.form();
    FormSnapshot {
        name_input: form.name_input.clone(),
        identifier_input: form.identifier_input.clone(),
        editing_id: form.editing_id,
        submit_label: service.submit_label().to_string(),
        items: service.records().iter().map(to_item).collect(),
    }
}

fn to_item(record: &PassengerRecord) -> PassengerItem {
    PassengerItem {
        id: record.id,
        name: record.name.clone(),
        identifier: record.identifier.clone(),
        display_identifier: record.display_identifier(),
    }
}

fn save_in(service: &mut PassengerService) -> ActionResponse {
    match service.save_form() {
        Ok(SaveOutcome::Created(id)) => ActionResponse::success("Passenger added.", Some(id)),
        Ok(SaveOutcome::Updated(id)) => ActionResponse::success("Changes saved.", Some(id)),
        Err(err) => ActionResponse::failure(err.notice()),
    }
}

fn download_in(service: &PassengerService, dir: PathBuf) -> ExportResponse {
    match service.download_to(&dir) {
        Ok(path) => ExportResponse {
            ok: true,
            path: Some(path.display().to_string()),
            file_name: paxlist_core::EXPORT_FILE_NAME.to_string(),
            mime_type: paxlist_core::EXPORT_MIME_TYPE.to_string(),
            share_title: None,
            message: "File saved.".to_string(),
        },
        Err(err) => ExportResponse::failure(&err),
    }
}

fn prepare_share_in(
    service: &PassengerService,
    dir: PathBuf,
    can_share_files: bool,
) -> ExportResponse {
    let port = StagedShare {
        can_share_files,
        dir,
        staged: RefCell::new(None),
    };
    match service.share_with(&port) {
        Ok(()) => port.into_response(),
        Err(err) => ExportResponse::failure(&err),
    }
}

/// Share port that writes the file for Dart to pick up.
struct StagedShare {
    can_share_files: bool,
    dir: PathBuf,
    staged: RefCell<Option<(PathBuf, ShareRequest)>>,
}

impl StagedShare {
    fn into_response(self) -> ExportResponse {
        match self.staged.into_inner() {
            Some((path, request)) => ExportResponse {
                ok: true,
                path: Some(path.display().to_string()),
                file_name: request.file.file_name,
                mime_type: request.file.mime_type,
                share_title: Some(request.title),
                message: String::new(),
            },
            None => ExportResponse::failure(&ExportError::ShareFailed(
                "share request was not staged".to_string(),
            )),
        }
    }
}

impl SharePort for StagedShare {
    fn supports_file_share(&self, _file: &ExportFile) -> bool {
        self.can_share_files
    }

    fn share(&self, request: &ShareRequest) -> Result<(), String> {
        let path =
            paxlist_core::download(&request.file, &self.dir).map_err(|err| err.to_string())?;
        info!("event=share_staged module=ffi status=ok");
        self.staged.replace(Some((path, request.clone())));
        Ok(())
    }
}
