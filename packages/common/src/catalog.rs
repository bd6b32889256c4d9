use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bundled datasets, one per storefront domain.
const HOME_GOODS_DATA: &str = include_str!("../data/home_goods.json");
const FASHION_DATA: &str = include_str!("../data/fashion.json");

/// Tab order for the home goods storefront.
const HOME_GOODS_TABS: &[&str] = &["bed", "sofa", "armchair"];

/// Tab order for the fashion storefront.
const FASHION_TABS: &[&str] = &["mens_shirts", "womens_wear", "shoes"];

/// A storefront domain, each backed by its own bundled dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    HomeGoods,
    Fashion,
}

impl Domain {
    /// Category keys in the order the storefront presents them.
    pub fn tab_order(&self) -> &'static [&'static str] {
        match self {
            Domain::HomeGoods => HOME_GOODS_TABS,
            Domain::Fashion => FASHION_TABS,
        }
    }
}

/// A single catalog product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    /// Category tag, e.g. `sofa` or `mens_shirts`.
    pub category: String,
    /// Identifier, unique within its category (not globally).
    pub product_number: String,
    pub product_name: String,
    pub thumbnail_url: String,
    pub detail: ProductDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDetail {
    /// Ordered reference images; personalization results align to this list by index.
    pub images: Vec<String>,
}

/// One catalog tab: display name plus its ordered product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryGroup {
    pub category_name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: BTreeMap<String, CategoryGroup>,
}

/// A loaded product catalog: category key -> group.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: BTreeMap<String, CategoryGroup>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// A malformed document yields an empty catalog rather than an error, so
    /// callers can always render an empty state.
    pub fn parse(raw: &str) -> Self {
        let doc = match serde_json::from_str::<CatalogDocument>(raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Malformed catalog dataset, loading as empty");
                CatalogDocument::default()
            }
        };
        Self {
            categories: doc.categories,
        }
    }

    pub fn get(&self, category_key: &str) -> Option<&CategoryGroup> {
        self.categories.get(category_key)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.categories.values().map(|g| g.products.len()).sum()
    }

    /// Category keys and groups in presentation order: the domain's tab order
    /// first, then any remaining keys.
    pub fn ordered_groups(&self, domain: Domain) -> Vec<(&str, &CategoryGroup)> {
        let tabs = domain.tab_order();
        let mut groups: Vec<(&str, &CategoryGroup)> = tabs
            .iter()
            .filter_map(|&key| self.categories.get(key).map(|g| (key, g)))
            .collect();
        for (key, group) in &self.categories {
            if !tabs.contains(&key.as_str()) {
                groups.push((key.as_str(), group));
            }
        }
        groups
    }
}

/// Both storefront catalogs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    home_goods: Catalog,
    fashion: Catalog,
}

impl CatalogSet {
    pub fn load() -> Self {
        Self {
            home_goods: Catalog::parse(HOME_GOODS_DATA),
            fashion: Catalog::parse(FASHION_DATA),
        }
    }

    pub fn get(&self, domain: Domain) -> &Catalog {
        match domain {
            Domain::HomeGoods => &self.home_goods,
            Domain::Fashion => &self.fashion,
        }
    }
}

/// Resolve a product for a detail or try-on request.
///
/// A `carried` product (handed forward from a listing response) is returned
/// as-is without checking it against the catalog; the caller is trusted to
/// have obtained it from the same store. Otherwise the category's product
/// list is scanned for a matching identifier. `None` is a representable
/// "not found" state, not an error.
pub fn find_product(
    catalog: &Catalog,
    category_key: &str,
    product_number: &str,
    carried: Option<Product>,
) -> Option<Product> {
    if let Some(product) = carried {
        return Some(product);
    }
    catalog
        .get(category_key)?
        .products
        .iter()
        .find(|p| p.product_number == product_number)
        .cloned()
}
