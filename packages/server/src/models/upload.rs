use serde::Serialize;
use uuid::Uuid;

/// Response DTO for an accepted upload.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    /// Capture id; pass as `upload_id` when requesting a try-on, or as
    /// `replaces` when uploading a replacement.
    pub id: Uuid,
    /// Displayable reference for the captured image.
    pub preview_url: String,
    /// Whether the payload carries the raw binary the try-on flow requires
    /// (file captures only; pasted URLs are preview-only).
    pub submittable: bool,
}
