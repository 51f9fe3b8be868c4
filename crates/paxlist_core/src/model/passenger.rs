//! Passenger domain model.
//!
//! # Responsibility
//! - Define the record kept in the passenger list.
//! - Provide the display projection used by list views.
//!
//! # Invariants
//! - `id` is unique for the lifetime of the store that generated it.
//! - `identifier` holds exactly 11 ASCII digits.
//! - `name` is trimmed and non-empty.

use crate::validation::cpf::{check_identifier, format_identifier, IdentifierError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-scoped passenger identifier.
///
/// Generated by the repository, starting at 1 and never reused.
pub type PassengerId = u64;

/// Field-level validation failures for a passenger write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// Identifier still carries non-digit characters.
    UnnormalizedIdentifier,
    /// Identifier is not a valid 11-digit CPF.
    Identifier(IdentifierError),
}

impl Display for PassengerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "passenger name must not be empty"),
            Self::UnnormalizedIdentifier => {
                write!(f, "passenger identifier must contain digits only")
            }
            Self::Identifier(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PassengerValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyName | Self::UnnormalizedIdentifier => None,
            Self::Identifier(err) => Some(err),
        }
    }
}

/// Checks the fields a record must satisfy before it is stored.
///
/// `identifier` must already be normalized (digits only).
pub fn validate_fields(name: &str, identifier: &str) -> Result<(), PassengerValidationError> {
    if name.trim().is_empty() {
        return Err(PassengerValidationError::EmptyName);
    }
    if !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PassengerValidationError::UnnormalizedIdentifier);
    }
    check_identifier(identifier).map_err(PassengerValidationError::Identifier)
}

/// One entry of the passenger list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub id: PassengerId,
    /// Trimmed passenger name.
    pub name: String,
    /// Digits-only CPF.
    pub identifier: String,
}

impl PassengerRecord {
    pub fn new(id: PassengerId, name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    /// Re-checks stored fields against the record invariants.
    pub fn validate(&self) -> Result<(), PassengerValidationError> {
        validate_fields(&self.name, &self.identifier)
    }

    /// Identifier rendered as `000.000.000-00`, falling back to raw digits.
    pub fn display_identifier(&self) -> String {
        format_identifier(&self.identifier).unwrap_or_else(|| self.identifier.clone())
    }
}
