//! Integration tests for Phone City.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p phone-city-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_page` - Query-string driven search/filter/sort over the bundled catalog
//! - `persisted_sets` - Identity scoping and on-disk persistence of the three sets
//! - `compare_flow` - Compare-list to comparison table
//!
//! Every test runs against a fresh temporary data directory; nothing touches
//! the working directory.

use std::sync::Arc;

use secrecy::SecretString;
use tempfile::TempDir;

use phone_city_storefront::Storefront;
use phone_city_storefront::catalog::{Catalog, Product};
use phone_city_storefront::config::StorefrontConfig;
use phone_city_storefront::persist::{FileStore, SharedStore};

/// A storefront rooted in a temporary data directory.
pub struct TestContext {
    pub dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StorefrontConfig::with_data_dir(dir.path().join("data"));
        Self { dir, config }
    }

    /// Open (or reopen) the storefront over this context's data directory.
    ///
    /// # Panics
    ///
    /// Panics if the storefront cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open(&self) -> Storefront {
        Storefront::open(&self.config).expect("Failed to open storefront")
    }

    /// A handle to the same file store the storefront writes to.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn store(&self) -> SharedStore {
        Arc::new(FileStore::open(&self.config.data_dir).expect("Failed to open file store"))
    }

    /// Raw stored value under `key`, parsed as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the key is unreadable or not JSON.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn stored_json(&self, key: &str) -> Option<serde_json::Value> {
        self.store()
            .get(key)
            .expect("Failed to read store")
            .map(|raw| serde_json::from_str(&raw).expect("Stored value is not JSON"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The bundled catalog.
///
/// # Panics
///
/// Panics if the bundled dataset does not load.
#[must_use]
#[allow(clippy::expect_used)]
pub fn bundled_catalog() -> Catalog {
    Catalog::bundled().expect("Bundled catalog should load")
}

/// Ids of `products`, in order.
#[must_use]
pub fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

/// Wrap a password for the account API.
#[must_use]
pub fn secret(password: &str) -> SecretString {
    SecretString::from(password.to_owned())
}
