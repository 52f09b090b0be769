//! Domain primitives shared by the store, service, and HTTP layers.
//!
//! This crate has no I/O and no internal dependencies so every other crate
//! in the workspace can depend on it.

pub mod asset_kind;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
