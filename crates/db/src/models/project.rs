//! Project document model. Projects are owned elsewhere; this side only reads them.

use folio_core::types::DocId;
use serde::{Deserialize, Serialize};

use crate::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    #[serde(default)]
    pub title: String,
}

/// A project document with its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: DocId,
    pub title: String,
}

impl TryFrom<Document> for Project {
    type Error = serde_json::Error;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let fields: ProjectFields = serde_json::from_value(doc.data)?;
        Ok(Project {
            id: doc.id,
            title: fields.title,
        })
    }
}
