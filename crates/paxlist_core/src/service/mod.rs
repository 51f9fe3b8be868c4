//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI/FFI layers decoupled from list storage details.

pub mod passenger_service;
