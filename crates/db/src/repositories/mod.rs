//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&dyn DocumentStore` as the first argument.

pub mod article_repo;
pub mod project_repo;

pub use article_repo::ArticleRepo;
pub use project_repo::ProjectRepo;
