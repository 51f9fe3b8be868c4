//! Domain model for the passenger list.
//!
//! # Responsibility
//! - Define the canonical record and the transient form state.
//!
//! # Invariants
//! - Every record is identified by a store-generated `PassengerId`.
//! - Edit mode is an explicit `Option`, never a sentinel id.

pub mod form;
pub mod passenger;
