use common::catalog::{CategoryGroup, Domain, Product};
use serde::Serialize;

/// Response DTO for one product.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    /// Category tag.
    #[schema(example = "sofa")]
    pub category: String,
    /// Identifier, unique within its category.
    #[schema(example = "HG-SOF-001")]
    pub product_number: String,
    #[schema(example = "Harbor Three-Seat Sofa")]
    pub product_name: String,
    pub thumbnail_url: String,
    /// Ordered detail images; try-on slots align to this list by index.
    pub images: Vec<String>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            category: product.category.clone(),
            product_number: product.product_number.clone(),
            product_name: product.product_name.clone(),
            thumbnail_url: product.thumbnail_url.clone(),
            images: product.detail.images.clone(),
        }
    }
}

/// One catalog tab in presentation order.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryGroupResponse {
    /// Category key used in detail routes.
    #[schema(example = "sofa")]
    pub key: String,
    #[schema(example = "Sofa")]
    pub category_name: String,
    pub products: Vec<ProductResponse>,
}

impl CategoryGroupResponse {
    pub fn new(key: &str, group: &CategoryGroup) -> Self {
        Self {
            key: key.to_string(),
            category_name: group.category_name.clone(),
            products: group.products.iter().map(ProductResponse::from).collect(),
        }
    }
}

/// Response DTO for a storefront catalog.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CatalogResponse {
    pub domain: Domain,
    pub categories: Vec<CategoryGroupResponse>,
}
