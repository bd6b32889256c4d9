pub mod catalog;
pub mod media;
pub mod upload;

pub use catalog::{Catalog, CatalogSet, CategoryGroup, Domain, Product, find_product};
