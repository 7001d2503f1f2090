//! HTTP client for the ImgBB upload endpoint.
//!
//! Sends `POST {base_url}/1/upload?key=...` with a multipart `image` part and
//! reads the hosted URL from `data.url` in the JSON response. Every non-2xx
//! answer is treated as a failed upload; there is no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::ImgbbConfig;
use crate::{ImageHost, ImageUpload, UploadError};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: Option<String>,
}

/// ImgBB upload client.
pub struct ImgbbClient {
    client: reqwest::Client,
    config: ImgbbConfig,
}

impl ImgbbClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: ImgbbConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn upload_url(&self) -> String {
        format!("{}/1/upload", self.config.base_url)
    }
}

#[async_trait]
impl ImageHost for ImgbbClient {
    async fn upload(&self, image: ImageUpload) -> Result<String, UploadError> {
        let size = image.bytes.len();
        let mut part = Part::bytes(image.bytes).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.upload_url())
            .query(&[("key", self.config.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                file_name = %image.file_name,
                "Image upload rejected"
            );
            return Err(UploadError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let url = parse_upload_response(&body)?;
        tracing::info!(file_name = %image.file_name, size, %url, "Image uploaded");
        Ok(url)
    }
}

/// Extract `data.url` from an upload response body.
pub fn parse_upload_response(body: &str) -> Result<String, UploadError> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    parsed
        .data
        .and_then(|data| data.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| UploadError::MalformedResponse("missing data.url".into()))
}
