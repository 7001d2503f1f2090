//! Article status, display rules and write-time validation.
//!
//! Status values are stored as their names (`"Draft"`, `"Published"`,
//! `"Archived"`). Stored documents may still carry arbitrary strings written
//! before the enum was enforced, so the display helpers take `&str`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of an article. Any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    /// All statuses in the order the status selector lists them.
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Draft,
        ArticleStatus::Published,
        ArticleStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Published => "Published",
            ArticleStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = CoreError;

    /// Exact, case-sensitive match on the status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid article status '{s}'. Valid statuses: Draft, Published, Archived"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Display rules
// ---------------------------------------------------------------------------

pub const BADGE_PUBLISHED: &str = "badge bg-success";
pub const BADGE_ARCHIVED: &str = "badge bg-secondary";
pub const BADGE_DRAFT: &str = "badge bg-warning";

/// Number of description characters shown in a table row.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Badge class for a stored status value.
///
/// Unknown strings fall back to the draft (warning) style.
pub fn badge_class(status: &str) -> &'static str {
    match status {
        "Published" => BADGE_PUBLISHED,
        "Archived" => BADGE_ARCHIVED,
        _ => BADGE_DRAFT,
    }
}

/// First 50 characters of `description` followed by `"..."`.
///
/// The ellipsis is appended even when nothing was cut off.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();
    preview.push_str("...");
    preview
}

// ---------------------------------------------------------------------------
// Write-time rules
// ---------------------------------------------------------------------------

pub const PROJECT_REQUIRED_MESSAGE: &str = "Please select a project!";
pub const PUBLISH_SUCCESS_MESSAGE: &str = "Article Published Successfully!";
pub const DELETE_CONFIRM_PROMPT: &str = "Delete this article?";

/// Reject a submission that has no project selected.
pub fn validate_project_selection(project_id: Option<&str>) -> Result<&str, CoreError> {
    match project_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(CoreError::Validation(PROJECT_REQUIRED_MESSAGE.into())),
    }
}

/// Where the article photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource<'a> {
    /// An uploaded file must be sent to the image host first.
    Upload,
    /// A URL typed into the form, stored verbatim.
    Url(&'a str),
    None,
}

/// Pick the photo source for a submission. A file always wins over a URL;
/// a blank URL counts as absent.
pub fn resolve_photo_source(has_file: bool, typed_url: Option<&str>) -> PhotoSource<'_> {
    if has_file {
        return PhotoSource::Upload;
    }
    match typed_url {
        Some(url) if !url.trim().is_empty() => PhotoSource::Url(url),
        _ => PhotoSource::None,
    }
}
