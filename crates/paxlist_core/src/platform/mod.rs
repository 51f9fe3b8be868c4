//! Ports to host-platform interactions.
//!
//! # Responsibility
//! - Abstract blocking dialogs and the native share sheet as injectable
//!   traits, so core flows stay testable without a real UI.

pub mod confirm;
pub mod share;
