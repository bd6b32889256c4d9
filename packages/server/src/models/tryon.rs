use common::catalog::{Domain, Product};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::personalize::TryOnOutcome;

/// Request DTO for a personalization run.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct TryOnRequest {
    pub domain: Domain,
    /// Category key of the product being personalized.
    #[schema(example = "mens_shirts")]
    pub category: String,
    #[schema(example = "FA-MS-001")]
    pub product_number: String,
    /// Product record carried forward from a listing response. When present
    /// it is trusted as-is and the catalog scan is skipped.
    pub product: Option<Product>,
    /// Capture id of the photo payload to submit.
    pub upload_id: Uuid,
    /// Tag forwarded to the generation endpoint. Defaults to the product's
    /// category tag.
    pub product_type: Option<String>,
}

/// One positional entry of a personalization run, aligned 1:1 with the
/// product's detail image list.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TryOnSlot {
    /// Resolved image reference, or null when this slot's request produced
    /// nothing usable.
    pub image_url: Option<String>,
}

/// Response DTO for a personalization run.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TryOnResponse {
    /// Exactly one slot per product detail image, in the same order.
    pub slots: Vec<TryOnSlot>,
    #[schema(example = 2)]
    pub succeeded: usize,
    #[schema(example = 3)]
    pub total: usize,
    /// Aggregate outcome line, e.g. "Generated 2 of 3 images".
    pub message: String,
}

impl TryOnResponse {
    pub fn from_outcome(outcome: TryOnOutcome) -> Self {
        let total = outcome.slots.len();
        let succeeded = outcome.succeeded;
        let message = if total == 0 {
            "No product images available".to_string()
        } else if succeeded == 0 {
            "No images were generated".to_string()
        } else {
            format!("Generated {succeeded} of {total} images")
        };

        Self {
            slots: outcome
                .slots
                .into_iter()
                .map(|image_url| TryOnSlot { image_url })
                .collect(),
            succeeded,
            total,
            message,
        }
    }
}
