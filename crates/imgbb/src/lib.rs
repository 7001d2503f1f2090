//! Image hosting for article photos.
//!
//! - [`ImageHost`] -- the upload seam the article writer depends on.
//! - [`client::ImgbbClient`] -- the ImgBB implementation.
//! - [`config::ImgbbConfig`] -- endpoint and API key, loaded from the environment.

pub mod client;
pub mod config;

use async_trait::async_trait;

pub use client::ImgbbClient;
pub use config::ImgbbConfig;

/// User-facing message for any failed upload.
pub const UPLOAD_FAILED_MESSAGE: &str = "ImgBB Upload Failed. Check your API Key.";

/// A binary image to upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Errors from the image host.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered with a non-2xx status.
    #[error("Image host returned HTTP {0}")]
    HttpStatus(u16),

    /// The host answered 2xx but without a usable URL.
    #[error("Malformed image host response: {0}")]
    MalformedResponse(String),
}

/// Uploads an image and returns its public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<String, UploadError>;
}
