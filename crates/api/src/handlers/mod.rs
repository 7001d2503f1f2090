pub mod article;
pub mod project;
