use thiserror::Error;

/// Where an upload came from.
#[derive(Debug, Clone)]
pub enum UploadSource {
    File {
        filename: Option<String>,
        /// Media type declared by the client, if any.
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
    Url(String),
}

/// What a capture zone accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptPolicy {
    /// Any `image/*` media type.
    AnyImage,
    /// The try-on photo zone: JPEG only.
    JpegOnly,
}

/// A normalized, accepted upload.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedImage {
    File {
        bytes: Vec<u8>,
        content_type: String,
    },
    /// A pasted URL, kept verbatim after trimming. Carries no raw binary.
    Remote { url: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("only image files are accepted (got {0})")]
    NotAnImage(String),
    #[error("a JPEG photo is required (got {0})")]
    JpegRequired(String),
    #[error("file has no recognizable media type")]
    UnknownMediaType,
}

/// Validate and normalize an upload source.
///
/// Returns `Ok(None)` for inputs that are ignored without error: a pasted URL
/// that is empty after trimming. Rejections leave any previously held payload
/// untouched; replacement is the caller's concern.
pub fn capture(
    source: UploadSource,
    policy: AcceptPolicy,
) -> Result<Option<CapturedImage>, UploadError> {
    match source {
        UploadSource::File {
            filename,
            content_type,
            bytes,
        } => {
            let content_type = match content_type {
                Some(ct) if !ct.trim().is_empty() => ct,
                _ => filename
                    .as_deref()
                    .and_then(|name| mime_guess::from_path(name).first())
                    .map(|m| m.to_string())
                    .ok_or(UploadError::UnknownMediaType)?,
            };

            if !content_type.starts_with("image/") {
                return Err(UploadError::NotAnImage(content_type));
            }
            if policy == AcceptPolicy::JpegOnly && content_type != "image/jpeg" {
                return Err(UploadError::JpegRequired(content_type));
            }

            Ok(Some(CapturedImage::File {
                bytes,
                content_type,
            }))
        }
        UploadSource::Url(url) => {
            let url = url.trim();
            if url.is_empty() {
                return Ok(None);
            }
            Ok(Some(CapturedImage::Remote {
                url: url.to_string(),
            }))
        }
    }
}
