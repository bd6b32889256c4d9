use axum::Json;
use axum::extract::{Path, State};
use common::catalog::{Domain, find_product};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::catalog::{CatalogResponse, CategoryGroupResponse, ProductResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/{domain}",
    tag = "Catalog",
    operation_id = "getCatalog",
    summary = "Browse a storefront catalog",
    description = "Returns the domain's category groups in presentation order. \
        An absent or malformed dataset is served as an empty catalog, never an error.",
    params(("domain" = String, Path, description = "Storefront domain: `home_goods` or `fashion`")),
    responses(
        (status = 200, description = "Category groups", body = CatalogResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(domain): Path<Domain>,
) -> Json<CatalogResponse> {
    let catalog = state.catalogs.get(domain);
    let categories = catalog
        .ordered_groups(domain)
        .into_iter()
        .map(|(key, group)| CategoryGroupResponse::new(key, group))
        .collect();

    Json(CatalogResponse { domain, categories })
}

#[utoipa::path(
    get,
    path = "/{domain}/{category}/{product_number}",
    tag = "Catalog",
    operation_id = "getProduct",
    summary = "Get a product by category and identifier",
    description = "Scans the category's product list for a matching identifier. \
        A miss is a representable state rendered as 404, with back-navigation left to the client.",
    params(
        ("domain" = String, Path, description = "Storefront domain: `home_goods` or `fashion`"),
        ("category" = String, Path, description = "Category key"),
        ("product_number" = String, Path, description = "Product identifier within the category"),
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductResponse),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(category = %category, product_number = %product_number))]
pub async fn get_product(
    State(state): State<AppState>,
    Path((domain, category, product_number)): Path<(Domain, String, String)>,
) -> Result<Json<ProductResponse>, AppError> {
    let catalog = state.catalogs.get(domain);
    let product = find_product(catalog, &category, &product_number, None)
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    Ok(Json(ProductResponse::from(&product)))
}
