//! Article table view model and its `<tbody>` markup.
//!
//! The table is always in exactly one of three states: a list of rows, a
//! single "empty" message row, or a single error row.

use serde::Serialize;

use crate::article::{badge_class, truncate_description, ArticleStatus};

/// Column count of the article table; message rows span all of them.
pub const TABLE_COLUMNS: usize = 7;

/// Project cell text until the project title is known.
pub const PROJECT_PLACEHOLDER: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No articles yet";
pub const RENDER_ERROR_MESSAGE: &str = "Error loading articles";
pub const FILTER_ERROR_MESSAGE: &str = "Error filtering articles";
pub const NO_IMAGE_LABEL: &str = "No Image";

/// Message shown when a status filter matches nothing.
pub fn filtered_empty_message(status: &str) -> String {
    format!("No articles with status: {status}")
}

/// One rendered article row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub id: String,
    pub project_title: String,
    pub article_type: String,
    pub description_preview: String,
    pub photo_url: Option<String>,
    pub status: String,
    pub badge_class: &'static str,
}

impl ArticleRow {
    /// Build a row with the project cell still at its placeholder.
    ///
    /// A blank photo URL counts as no photo.
    pub fn new(
        id: impl Into<String>,
        article_type: impl Into<String>,
        description: &str,
        photo_url: Option<String>,
        status: impl Into<String>,
    ) -> Self {
        let status = status.into();
        Self {
            id: id.into(),
            project_title: PROJECT_PLACEHOLDER.to_string(),
            article_type: article_type.into(),
            description_preview: truncate_description(description),
            photo_url: photo_url.filter(|url| !url.trim().is_empty()),
            badge_class: badge_class(&status),
            status,
        }
    }

    /// Patch in the resolved project title.
    pub fn set_project_title(&mut self, title: impl Into<String>) {
        self.project_title = title.into();
    }

    fn to_html(&self, out: &mut String) {
        let id = escape_html(&self.id);
        let photo = match &self.photo_url {
            Some(url) => format!(
                r#"<img src="{}" width="40" height="40" style="border-radius:4px; object-fit:cover;">"#,
                escape_html(url)
            ),
            None => NO_IMAGE_LABEL.to_string(),
        };

        let mut options = String::new();
        for status in ArticleStatus::ALL {
            let selected = if self.status == status.as_str() {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{s}"{selected}>{s}</option>"#,
                s = status.as_str()
            ));
        }

        out.push_str("<tr>");
        out.push_str(&format!(
            r#"<td id="project-{id}">{}</td>"#,
            escape_html(&self.project_title)
        ));
        out.push_str(&format!("<td>{}</td>", escape_html(&self.article_type)));
        out.push_str(&format!(
            "<td><small>{}</small></td>",
            escape_html(&self.description_preview)
        ));
        out.push_str(&format!(r#"<td class="text-center">{photo}</td>"#));
        out.push_str(&format!(
            r#"<td class="text-center"><span class="{}">{}</span></td>"#,
            self.badge_class,
            escape_html(&self.status)
        ));
        out.push_str(&format!(
            r#"<td class="text-center"><select class="form-select form-select-sm" onchange="updateArticleStatus('{id}', this.value)">{options}</select></td>"#
        ));
        out.push_str(&format!(
            r#"<td class="text-center"><button class="btn btn-sm btn-outline-danger" onclick="deleteArticle('{id}')">Delete</button></td>"#
        ));
        out.push_str("</tr>");
    }
}

/// State of the rendered article table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ArticleTable {
    Rows { rows: Vec<ArticleRow> },
    Empty { message: String },
    Error { message: String },
}

impl ArticleTable {
    /// Rows when there are any, otherwise the given empty message.
    pub fn from_rows(rows: Vec<ArticleRow>, empty_message: impl Into<String>) -> Self {
        if rows.is_empty() {
            ArticleTable::Empty {
                message: empty_message.into(),
            }
        } else {
            ArticleTable::Rows { rows }
        }
    }

    /// Visible article rows (zero for the message states).
    pub fn rows(&self) -> &[ArticleRow] {
        match self {
            ArticleTable::Rows { rows } => rows,
            _ => &[],
        }
    }

    /// Render the table body markup.
    pub fn to_html(&self) -> String {
        match self {
            ArticleTable::Rows { rows } => {
                let mut out = String::new();
                for row in rows {
                    row.to_html(&mut out);
                }
                out
            }
            ArticleTable::Empty { message } => format!(
                r#"<tr><td colspan="{TABLE_COLUMNS}" class="text-center text-muted py-4">{}</td></tr>"#,
                escape_html(message)
            ),
            ArticleTable::Error { message } => format!(
                r#"<tr><td colspan="{TABLE_COLUMNS}" class="text-center text-danger">{}</td></tr>"#,
                escape_html(message)
            ),
        }
    }
}

/// Escape text for interpolation into HTML content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
