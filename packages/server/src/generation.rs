use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use thiserror::Error;

use crate::config::GenerationConfig;

/// Multipart field names of the upstream generation contract.
const USER_IMAGE_FIELD: &str = "user_image";
const REFERENCE_FIELD: &str = "garment_image_url";
const PRODUCT_TYPE_FIELD: &str = "product_type";

/// A usable result image from one generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedImage {
    /// A reference returned inside a structured response body.
    Url(String),
    /// A raw image body, to be exposed through a locally served reference.
    Binary { bytes: Vec<u8>, content_type: String },
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation endpoint returned status {0}")]
    Status(u16),
}

/// The seam between the personalization orchestrator and the upstream
/// endpoint. One call per reference image; `Ok(None)` means the endpoint
/// answered successfully but produced nothing usable.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        user_image: &[u8],
        reference_url: &str,
        product_type: &str,
    ) -> Result<Option<GeneratedImage>, GenerationError>;
}

/// reqwest-backed client for the external generation endpoint.
pub struct HttpGenerator {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl HttpGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(
        &self,
        user_image: &[u8],
        reference_url: &str,
        product_type: &str,
    ) -> Result<Option<GeneratedImage>, GenerationError> {
        // The try-on capture zone only admits JPEG photos.
        let photo = Part::bytes(user_image.to_vec())
            .file_name("photo.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .part(USER_IMAGE_FIELD, photo)
            .text(REFERENCE_FIELD, reference_url.to_string())
            .text(PRODUCT_TYPE_FIELD, product_type.to_string());

        let res = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("image/") {
            let bytes = res.bytes().await?;
            return Ok(Some(GeneratedImage::Binary {
                bytes: bytes.to_vec(),
                content_type,
            }));
        }

        let body: Value = res.json().await?;
        Ok(extract_image_ref(&body, &self.config.result_fields).map(GeneratedImage::Url))
    }
}

/// Pull the result image reference out of a structured response body.
///
/// Fields are tried in priority order; the first non-empty string wins.
pub fn extract_image_ref(body: &Value, fields: &[String]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(String::from)
}
