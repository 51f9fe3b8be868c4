//! Transient form state for the passenger editor.
//!
//! # Invariants
//! - `editing_id` is `Some` only while an existing record is being edited.
//! - The state is never persisted.

use crate::model::passenger::PassengerId;
use serde::{Deserialize, Serialize};

/// Submit button label when creating a record.
pub const SUBMIT_LABEL_ADD: &str = "Add passenger";
/// Submit button label while editing a record.
pub const SUBMIT_LABEL_UPDATE: &str = "Save changes";

/// Current form inputs and edit-mode marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name_input: String,
    pub identifier_input: String,
    pub editing_id: Option<PassengerId>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            SUBMIT_LABEL_UPDATE
        } else {
            SUBMIT_LABEL_ADD
        }
    }

    /// Clears both inputs, keeping the edit marker.
    pub fn clear_inputs(&mut self) {
        self.name_input.clear();
        self.identifier_input.clear();
    }

    /// Returns to the empty, non-editing state.
    pub fn reset(&mut self) {
        self.clear_inputs();
        self.editing_id = None;
    }
}
