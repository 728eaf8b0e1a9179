//! Catalog store: the static, read-only set of phones.
//!
//! The catalog is loaded once at startup, either from the dataset compiled
//! into the binary or from an external JSON file, and never mutated after.
//! All query functions borrow from it.

pub mod product;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::instrument;

use phone_city_core::ProductId;

pub use product::{
    Battery, Cameras, Connectivity, Dimensions, Feature, Memory, Processor, Product, Screen,
};

use crate::query::sort::{SortKey, sort_products};

/// Dataset bundled with the crate.
const BUNDLED_DATASET: &str = include_str!("../../data/phones.json");

/// Default number of phones in the home page showcases.
pub const DEFAULT_SHOWCASE_LIMIT: usize = 8;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or does not match the product shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// The in-memory product catalog.
///
/// Keeps products in dataset order (which is the tie-break order for every
/// query) plus an id index for lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Load the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` on malformed JSON and
    /// `CatalogError::DuplicateId` on repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_json`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(products = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    /// All products in dataset order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Materialize a persisted id list into products, keeping the list order.
    ///
    /// Ids that are no longer in the catalog are skipped without error.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<&Product>
    where
        I: IntoIterator<Item = &'a ProductId>,
    {
        ids.into_iter().filter_map(|id| self.get(id.as_str())).collect()
    }

    /// The most popular phones, highest score first.
    #[must_use]
    pub fn popular(&self, limit: usize) -> Vec<&Product> {
        self.showcase(SortKey::Popularity, limit)
    }

    /// The most recently released phones, newest first.
    #[must_use]
    pub fn newest(&self, limit: usize) -> Vec<&Product> {
        self.showcase(SortKey::Newest, limit)
    }

    fn showcase(&self, key: SortKey, limit: usize) -> Vec<&Product> {
        let mut products = sort_products(self.products.iter().collect(), key);
        products.truncate(limit);
        products
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::product::fixtures::phone;
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("iphone-15-pro").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![phone("a", "X", 1), phone("a", "Y", 2)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_get_missing_is_none() {
        let catalog = Catalog::new(vec![phone("a", "X", 1)]).unwrap();
        assert!(catalog.get("zzz").is_none());
    }

    #[test]
    fn test_resolve_drops_missing_and_keeps_order() {
        let catalog =
            Catalog::new(vec![phone("a", "X", 1), phone("b", "X", 2), phone("c", "X", 3)]).unwrap();
        let ids = [
            ProductId::new("c"),
            ProductId::new("gone"),
            ProductId::new("a"),
        ];

        let resolved: Vec<&str> = catalog
            .resolve(&ids)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(resolved, ["c", "a"]);
    }

    #[test]
    fn test_popular_and_newest() {
        let mut a = phone("a", "X", 1);
        a.popularity = 10.0;
        a.release_year = 2024;
        let mut b = phone("b", "X", 1);
        b.popularity = 90.0;
        b.release_year = 2021;
        let mut c = phone("c", "X", 1);
        c.popularity = 50.0;
        c.release_year = 2024;
        let catalog = Catalog::new(vec![a, b, c]).unwrap();

        let popular: Vec<&str> = catalog.popular(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(popular, ["b", "c"]);

        // a and c tie on year; catalog order wins
        let newest: Vec<&str> = catalog.newest(8).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(newest, ["a", "c", "b"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
