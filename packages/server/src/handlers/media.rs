use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Locally-resolvable reference for a stored media object.
pub fn media_path(id: Uuid) -> String {
    format!("/api/v1/media/{id}")
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Media",
    operation_id = "getMedia",
    summary = "Serve a stored media object",
    description = "Streams the bytes of an upload preview or a generated image. \
        Objects are transient, in-memory only, and gone after a restart.",
    params(("id" = String, Path, description = "Media object id (UUID)")),
    responses(
        (status = 200, description = "Media content"),
        (status = 404, description = "Media object not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn serve_media(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let object = state.media.get(id)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, object.content_type)
        .header(header::CONTENT_LENGTH, object.bytes.len().to_string())
        .header(header::CACHE_CONTROL, "private, max-age=3600")
        .body(Body::from(object.bytes))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))
}
