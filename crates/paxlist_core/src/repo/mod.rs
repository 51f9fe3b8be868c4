//! Repository layer for the passenger list.
//!
//! # Responsibility
//! - Define the list access contract used by the service layer.
//! - Keep storage details (currently an in-memory `Vec`) behind that contract.
//!
//! # Invariants
//! - Repository writes must enforce `validate_fields` before mutation.
//! - Repository APIs return semantic errors (`NotFound`) instead of panicking.

pub mod passenger_repo;
