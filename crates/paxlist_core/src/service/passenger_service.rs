//! Passenger form use-case service.
//!
//! # Responsibility
//! - Own the transient form state and route every list mutation through the
//!   repository contract.
//! - Turn recoverable failures into values carrying a user notice.
//!
//! # Invariants
//! - A failed save leaves both the list and the form inputs untouched.
//! - A successful save clears both inputs and leaves edit mode.
//! - `editing_id` always refers to a record present in the list.
//! - Log events are metadata-only; names and identifiers are never logged.

use crate::export::{self, ExportError, ExportFile};
use crate::model::form::FormState;
use crate::model::passenger::{PassengerId, PassengerRecord};
use crate::platform::confirm::ConfirmPrompt;
use crate::platform::share::SharePort;
use crate::repo::passenger_repo::{InMemoryPassengerRepository, PassengerRepository, RepoError};
use crate::validation::cpf::{check_identifier, normalize_identifier, IdentifierError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Question asked before emptying the list.
pub const CLEAR_CONFIRM_MESSAGE: &str = "Clear the whole list?";

/// Recoverable save failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Name or identifier input is blank.
    MissingInput,
    /// Identifier failed the CPF rules.
    InvalidIdentifier(IdentifierError),
    /// Repository rejected the write.
    Repo(RepoError),
}

impl FormError {
    /// Transient user-facing notice for this failure.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::MissingInput => "Fill in name and CPF",
            Self::InvalidIdentifier(_) => "Invalid CPF! Enter a real, valid CPF.",
            Self::Repo(_) => "The passenger could not be saved.",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::InvalidIdentifier(_) => "invalid_identifier",
            Self::Repo(_) => "repo_rejected",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => write!(f, "name and identifier are required"),
            Self::InvalidIdentifier(err) => write!(f, "invalid identifier: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingInput => None,
            Self::InvalidIdentifier(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for FormError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(PassengerId),
    Updated(PassengerId),
}

impl SaveOutcome {
    pub fn id(self) -> PassengerId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

/// Passenger list facade combining repository and form state.
#[derive(Debug, Default)]
pub struct PassengerService<R: PassengerRepository = InMemoryPassengerRepository> {
    repo: R,
    form: FormState,
}

impl PassengerService<InMemoryPassengerRepository> {
    /// Creates a service over a fresh in-memory list.
    pub fn in_memory() -> Self {
        Self::new(InMemoryPassengerRepository::new())
    }
}

impl<R: PassengerRepository> PassengerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            form: FormState::default(),
        }
    }

    pub fn records(&self) -> &[PassengerRecord] {
        self.repo.list()
    }

    pub fn record(&self, id: PassengerId) -> Option<&PassengerRecord> {
        self.repo.get(id)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    /// Label of the submit action for the current mode.
    pub fn submit_label(&self) -> &'static str {
        self.form.submit_label()
    }

    pub fn set_name_input(&mut self, value: impl Into<String>) {
        self.form.name_input = value.into();
    }

    pub fn set_identifier_input(&mut self, value: impl Into<String>) {
        self.form.identifier_input = value.into();
    }

    /// Binds both inputs and saves them.
    pub fn save(
        &mut self,
        name: impl Into<String>,
        identifier_raw: impl Into<String>,
    ) -> Result<SaveOutcome, FormError> {
        self.set_name_input(name);
        self.set_identifier_input(identifier_raw);
        self.save_form()
    }

    /// Saves the current form inputs.
    ///
    /// # Contract
    /// - Blank name or identifier -> `FormError::MissingInput`.
    /// - Identifier failing CPF rules -> `FormError::InvalidIdentifier`.
    /// - Edit mode replaces the edited record in place and keeps its id.
    /// - Otherwise a new record is appended.
    pub fn save_form(&mut self) -> Result<SaveOutcome, FormError> {
        let result = self.try_save_form();
        match &result {
            Ok(SaveOutcome::Created(_)) => info!(
                "event=passenger_save module=service status=ok mode=create count={}",
                self.repo.len()
            ),
            Ok(SaveOutcome::Updated(_)) => info!(
                "event=passenger_save module=service status=ok mode=update count={}",
                self.repo.len()
            ),
            Err(err) => warn!(
                "event=passenger_save module=service status=rejected error_code={}",
                err.code()
            ),
        }
        result
    }

    fn try_save_form(&mut self) -> Result<SaveOutcome, FormError> {
        let name = self.form.name_input.trim();
        let identifier_raw = self.form.identifier_input.trim();
        if name.is_empty() || identifier_raw.is_empty() {
            return Err(FormError::MissingInput);
        }

        let identifier = normalize_identifier(identifier_raw);
        check_identifier(&identifier).map_err(FormError::InvalidIdentifier)?;

        let outcome = match self.form.editing_id {
            Some(id) => {
                self.repo.replace(id, name, &identifier)?;
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::Created(self.repo.insert(name, &identifier)?),
        };

        self.form.reset();
        Ok(outcome)
    }

    /// Removes one record; unknown ids are a no-op.
    ///
    /// Removing the record being edited leaves edit mode but keeps the inputs.
    pub fn remove(&mut self, id: PassengerId) -> bool {
        let removed = self.repo.remove(id);
        if removed && self.form.editing_id == Some(id) {
            self.form.editing_id = None;
        }
        info!(
            "event=passenger_remove module=service status={} count={}",
            if removed { "ok" } else { "noop" },
            self.repo.len()
        );
        removed
    }

    /// Loads one record into the form and enters edit mode.
    ///
    /// Returns `false` without touching the form when `id` is unknown.
    pub fn begin_edit(&mut self, id: PassengerId) -> bool {
        let Some(record) = self.repo.get(id) else {
            return false;
        };

        self.form.name_input = record.name.clone();
        self.form.identifier_input = record.identifier.clone();
        self.form.editing_id = Some(id);
        true
    }

    /// Leaves edit mode and clears the inputs.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Empties the list after an explicit confirmation.
    ///
    /// Declining is a silent no-op. Returns whether the list was cleared.
    pub fn clear(&mut self, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(CLEAR_CONFIRM_MESSAGE) {
            info!("event=passenger_clear module=service status=declined");
            return false;
        }

        let dropped = self.repo.len();
        self.repo.clear();
        self.form.editing_id = None;
        info!(
            "event=passenger_clear module=service status=ok dropped={}",
            dropped
        );
        true
    }

    /// Builds the export file for the current list.
    pub fn export_file(&self) -> Result<ExportFile, ExportError> {
        ExportFile::from_records(self.repo.list())
    }

    /// Writes the export into `dir`; see [`export::download`].
    pub fn download_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let file = self.export_file()?;
        export::download(&file, dir)
    }

    /// Shares the export through `port`; see [`export::share`].
    pub fn share_with(&self, port: &dyn SharePort) -> Result<(), ExportError> {
        let file = self.export_file()?;
        export::share(&file, port)
    }
}
