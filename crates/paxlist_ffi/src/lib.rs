//! Flutter bridge for the passenger form.
//!
//! Bindings are generated from `api` by `flutter_rust_bridge_codegen`.

pub mod api;
