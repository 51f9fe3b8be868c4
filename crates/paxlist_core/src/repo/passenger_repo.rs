//! Passenger repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered passenger list and id generation.
//! - Keep list mutation rules in one place, independent of any UI.
//!
//! # Invariants
//! - Write paths call `validate_fields` before mutating the list.
//! - Ids start at 1, increase monotonically and are never reused, even after
//!   `clear`.
//! - `replace` keeps the record id and list position.

use crate::model::passenger::{
    validate_fields, PassengerId, PassengerRecord, PassengerValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for passenger list writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(PassengerValidationError),
    NotFound(PassengerId),
    IdsExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "passenger not found: {id}"),
            Self::IdsExhausted => write!(f, "passenger id space exhausted"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdsExhausted => None,
        }
    }
}

impl From<PassengerValidationError> for RepoError {
    fn from(value: PassengerValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the passenger list.
pub trait PassengerRepository {
    /// Appends a record and returns its freshly generated id.
    fn insert(&mut self, name: &str, identifier: &str) -> RepoResult<PassengerId>;
    /// Replaces name and identifier of an existing record in place.
    fn replace(&mut self, id: PassengerId, name: &str, identifier: &str) -> RepoResult<()>;
    /// Removes a record. Returns `false` when `id` is unknown.
    fn remove(&mut self, id: PassengerId) -> bool;
    fn get(&self, id: PassengerId) -> Option<&PassengerRecord>;
    /// All records in list order.
    fn list(&self) -> &[PassengerRecord];
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Vec-backed passenger repository.
#[derive(Debug, Clone)]
pub struct InMemoryPassengerRepository {
    records: Vec<PassengerRecord>,
    next_id: PassengerId,
}

impl Default for InMemoryPassengerRepository {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryPassengerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> RepoResult<PassengerId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RepoError::IdsExhausted)?;
        Ok(id)
    }

    fn position(&self, id: PassengerId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl PassengerRepository for InMemoryPassengerRepository {
    fn insert(&mut self, name: &str, identifier: &str) -> RepoResult<PassengerId> {
        validate_fields(name, identifier)?;

        let id = self.allocate_id()?;
        self.records.push(PassengerRecord::new(id, name.trim(), identifier));
        Ok(id)
    }

    fn replace(&mut self, id: PassengerId, name: &str, identifier: &str) -> RepoResult<()> {
        validate_fields(name, identifier)?;

        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let record = &mut self.records[index];
        record.name = name.trim().to_string();
        record.identifier = identifier.to_string();
        Ok(())
    }

    fn remove(&mut self, id: PassengerId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    fn get(&self, id: PassengerId) -> Option<&PassengerRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn list(&self) -> &[PassengerRecord] {
        &self.records
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryPassengerRepository, PassengerRepository, RepoError};
    use crate::model::passenger::PassengerValidationError;

    const VALID: &str = "52998224725";

    #[test]
    fn ids_start_at_one_and_survive_clear() {
        let mut repo = InMemoryPassengerRepository::new();
        assert_eq!(repo.insert("Ana", VALID).unwrap(), 1);
        assert_eq!(repo.insert("Bruno", VALID).unwrap(), 2);

        repo.clear();
        assert!(repo.is_empty());
        assert_eq!(repo.insert("Carla", VALID).unwrap(), 3);
    }

    #[test]
    fn insert_rejects_unnormalized_identifier() {
        let mut repo = InMemoryPassengerRepository::new();
        let err = repo.insert("Ana", "529.982.247-25").unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(PassengerValidationError::UnnormalizedIdentifier)
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn replace_unknown_id_returns_not_found() {
        let mut repo = InMemoryPassengerRepository::new();
        let err = repo.replace(42, "Ana", VALID).unwrap_err();
        assert_eq!(err, RepoError::NotFound(42));
    }

    #[test]
    fn insert_stores_trimmed_name() {
        let mut repo = InMemoryPassengerRepository::new();
        let id = repo.insert("  Ana Souza ", VALID).unwrap();
        assert_eq!(repo.get(id).unwrap().name, "Ana Souza");
    }
}
