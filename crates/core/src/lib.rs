//! Domain rules for the article desk.
//!
//! This crate has no I/O and no internal dependencies so the store, the
//! image uploader and the HTTP layer can all share the same rules.

pub mod article;
pub mod error;
pub mod table;
pub mod types;
