//! Core domain logic for the passenger list.
//! This crate is the single source of truth for business invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod platform;
pub mod repo;
pub mod service;
pub mod validation;

pub use export::{
    download, share, to_delimited_text, ExportError, ExportFile, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE, SHARE_TITLE,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::form::{FormState, SUBMIT_LABEL_ADD, SUBMIT_LABEL_UPDATE};
pub use model::passenger::{PassengerId, PassengerRecord, PassengerValidationError};
pub use platform::confirm::{ConfirmPrompt, PresetAnswer};
pub use platform::share::{NoFileShare, SharePort, ShareRequest};
pub use repo::passenger_repo::{
    InMemoryPassengerRepository, PassengerRepository, RepoError, RepoResult,
};
pub use service::passenger_service::{
    FormError, PassengerService, SaveOutcome, CLEAR_CONFIRM_MESSAGE,
};
pub use validation::cpf::{
    check_identifier, format_identifier, normalize_identifier, validate_identifier,
    IdentifierError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
