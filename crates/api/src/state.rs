use std::sync::Arc;

use folio_db::DocumentStore;
use folio_imgbb::ImageHost;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store holding `articles` and `projects`.
    pub store: Arc<dyn DocumentStore>,
    /// Image host used for article photo uploads.
    pub image_host: Arc<dyn ImageHost>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
