use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::upload::{AcceptPolicy, CapturedImage, UploadSource, capture};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::models::upload::UploadResponse;
use crate::state::AppState;
use crate::uploads::{PreviewRef, StoredUpload};

pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(16 * 1024 * 1024) // 16 MB
}

/// What the captured payload is for; selects the accept policy.
fn policy_for_purpose(purpose: &str) -> Result<AcceptPolicy, AppError> {
    match purpose {
        "preview" => Ok(AcceptPolicy::AnyImage),
        "try_on" => Ok(AcceptPolicy::JpegOnly),
        other => Err(AppError::Validation(format!(
            "purpose must be 'preview' or 'try_on', got '{other}'"
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Uploads",
    operation_id = "createUpload",
    summary = "Capture an upload payload",
    description = "Captures a single image from a multipart `file` field or a pasted `url` field. \
        The optional `purpose` field selects the accept policy: `preview` (any image, default) or \
        `try_on` (JPEG only, retains the raw binary for submission). The optional `replaces` field \
        names a prior capture id; its payload is discarded wholesale once the new one is accepted. \
        A URL that is empty after trimming is ignored without error (204).",
    request_body(content_type = "multipart/form-data", description = "file or url, with optional purpose and replaces"),
    responses(
        (status = 201, description = "Payload captured", body = UploadResponse),
        (status = 204, description = "Blank URL ignored; held state unchanged"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn create_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut source: Option<UploadSource> = None;
    let mut purpose = "preview".to_string();
    let mut replaces: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().map(|s| s.to_string());
                let content_type = field.content_type().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?;
                source = Some(UploadSource::File {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("url") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read url: {e}")))?;
                source = Some(UploadSource::Url(text));
            }
            Some("purpose") => {
                purpose = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read purpose: {e}")))?;
            }
            Some("replaces") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read replaces: {e}")))?;
                replaces = Some(
                    Uuid::parse_str(text.trim())
                        .map_err(|_| AppError::Validation("Invalid replaces id".into()))?,
                );
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let source =
        source.ok_or_else(|| AppError::Validation("Missing 'file' or 'url' field".into()))?;
    let policy = policy_for_purpose(&purpose)?;

    // Rejections return here, leaving any held payload untouched.
    let Some(captured) = capture(source, policy)? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let entry = match captured {
        CapturedImage::File {
            bytes,
            content_type,
        } => {
            let media_id = state.media.insert(bytes.clone(), content_type);
            StoredUpload {
                preview: PreviewRef::Stored(media_id),
                raw: Some(bytes),
            }
        }
        CapturedImage::Remote { url } => StoredUpload {
            preview: PreviewRef::Remote(url),
            raw: None,
        },
    };

    // Wholesale replacement: the prior payload and its stored preview go away
    // only after the new capture has been accepted.
    if let Some(old_id) = replaces {
        discard(&state, old_id);
    }

    let submittable = entry.raw.is_some();
    let preview_url = entry.preview_url();
    let id = state.uploads.insert(entry);

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id,
            preview_url,
            submittable,
        }),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Uploads",
    operation_id = "deleteUpload",
    summary = "Clear a captured payload",
    description = "Resets the capture to 'no payload'. Idempotent; clearing an absent id is still 204.",
    params(("id" = String, Path, description = "Capture id (UUID)")),
    responses(
        (status = 204, description = "Payload cleared"),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    discard(&state, id);
    StatusCode::NO_CONTENT
}

/// Drop a payload and release its stored preview, if any.
fn discard(state: &AppState, id: Uuid) {
    if let Some(old) = state.uploads.remove(id)
        && let PreviewRef::Stored(media_id) = old.preview
    {
        state.media.remove(media_id);
    }
}
