//! Input validation rules.
//!
//! # Responsibility
//! - Hold deterministic, side-effect-free checks used before any store write.

pub mod cpf;
