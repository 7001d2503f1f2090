//! Typed documents and DTOs.

pub mod article;
pub mod project;

/// Collection holding article documents.
pub const ARTICLES: &str = "articles";

/// Collection holding project documents (owned by another system).
pub const PROJECTS: &str = "projects";
