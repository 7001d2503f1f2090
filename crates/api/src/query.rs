//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?status=` filter for article listings. An empty value means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}

impl StatusFilterParams {
    pub fn filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// `?confirm=true` gate for destructive operations.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}
