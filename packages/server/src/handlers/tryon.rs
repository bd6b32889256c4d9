use axum::Json;
use axum::extract::State;
use common::catalog::find_product;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::tryon::{TryOnRequest, TryOnResponse};
use crate::personalize;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Try-On",
    operation_id = "tryOn",
    summary = "Run a personalization batch for a product",
    description = "Submits the held photo together with each of the product's detail images to the \
        generation endpoint, one independent request per image, and waits for all of them to settle. \
        Individual failures resolve their slot to empty without aborting the batch; the response \
        reports the aggregate outcome. A payload captured from a pasted URL cannot be submitted \
        (no raw binary). No retries and no cancellation once requests are in flight.",
    request_body = TryOnRequest,
    responses(
        (status = 200, description = "Settled result slots, index-aligned with the product's detail images", body = TryOnResponse),
        (status = 400, description = "Missing or unsubmittable photo payload (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(product_number = %payload.product_number))]
pub async fn try_on(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TryOnRequest>,
) -> Result<Json<TryOnResponse>, AppError> {
    // Pre-flight checks fail once, before any generation request is issued.
    let upload = state
        .uploads
        .get(payload.upload_id)
        .ok_or_else(|| AppError::Validation("Upload a photo before generating".into()))?;
    let user_image = upload
        .raw
        .ok_or_else(|| AppError::Validation("Attach a photo file before generating".into()))?;

    let catalog = state.catalogs.get(payload.domain);
    let product = find_product(
        catalog,
        &payload.category,
        &payload.product_number,
        payload.product,
    )
    .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    let product_type = payload
        .product_type
        .unwrap_or_else(|| product.category.clone());

    let outcome = personalize::run(
        state.generator.as_ref(),
        &state.media,
        &user_image,
        &product.detail.images,
        &product_type,
    )
    .await;

    info!(
        succeeded = outcome.succeeded,
        total = outcome.slots.len(),
        product_type = %product_type,
        "Personalization run settled"
    );

    Ok(Json(TryOnResponse::from_outcome(outcome)))
}
