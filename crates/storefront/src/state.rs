//! The storefront service bundle.
//!
//! Owns the catalog, the storage medium, the account service and the three
//! persisted sets. Every identity change goes through here so the sets are
//! rebound before the call returns; a mutation issued afterwards always lands
//! in the new identity's namespace.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::instrument;

use phone_city_core::{Identity, ProductId};

use crate::auth::{AuthService, User};
use crate::catalog::{Catalog, Product};
use crate::compare::ComparisonTable;
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::persist::{Cart, CompareList, Favorites, FileStore, IdentityScoped, SharedStore};
use crate::query::similar_to;

/// Catalog, account and persisted sets for one client.
pub struct Storefront {
    catalog: Arc<Catalog>,
    auth: AuthService,
    favorites: Favorites,
    compare: CompareList,
    cart: Cart,
    buy_url: String,
}

impl Storefront {
    /// Open the storefront described by `config`: load the catalog, open the
    /// file store, restore any saved session and load its sets.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the data directory
    /// cannot be created.
    #[instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::bundled()?,
        };
        let store: SharedStore = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_store(
            Arc::new(catalog),
            store,
            config.buy_url.clone(),
        ))
    }

    /// Assemble a storefront over an existing catalog and store.
    #[must_use]
    pub fn with_store(catalog: Arc<Catalog>, store: SharedStore, buy_url: String) -> Self {
        let mut auth = AuthService::new(Arc::clone(&store));
        auth.restore();
        let identity = auth.identity();
        tracing::debug!(%identity, products = catalog.len(), "Storefront ready");

        Self {
            catalog,
            favorites: Favorites::open(Arc::clone(&store), identity.clone()),
            compare: CompareList::open(Arc::clone(&store), identity.clone()),
            cart: Cart::open(store, identity),
            auth,
            buy_url,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        self.auth.identity()
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    #[must_use]
    pub const fn compare(&self) -> &CompareList {
        &self.compare
    }

    pub fn compare_mut(&mut self) -> &mut CompareList {
        &mut self.compare
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Link behind the "Купить" button.
    #[must_use]
    pub fn buy_url(&self) -> &str {
        &self.buy_url
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Sign in and rebind the persisted sets to the account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the credentials are rejected; identity and sets
    /// are then unchanged.
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<User> {
        let user = self.auth.login(email, password)?;
        self.propagate_identity();
        Ok(user)
    }

    /// Register, sign in and rebind the persisted sets to the new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if registration is rejected.
    pub fn register(&mut self, name: &str, email: &str, password: &SecretString) -> Result<User> {
        let user = self.auth.register(name, email, password)?;
        self.propagate_identity();
        Ok(user)
    }

    /// Sign out and rebind the persisted sets to the guest namespace.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.auth.logout();
        self.propagate_identity();
        user
    }

    fn propagate_identity(&mut self) {
        let identity = self.auth.identity();
        self.favorites.switch_identity(&identity);
        self.compare.switch_identity(&identity);
        self.cart.switch_identity(&identity);
        tracing::info!(%identity, "Identity changed");
    }

    // =========================================================================
    // Materialized views
    // =========================================================================

    /// Look up a product, failing with `ProductNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if no product has this id.
    pub fn product(&self, id: &str) -> Result<&Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_owned()))
    }

    /// Favorite products still in the catalog, in favorites order.
    #[must_use]
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.catalog.resolve(self.favorites.ids())
    }

    /// The comparison table for the current compare-list.
    #[must_use]
    pub fn comparison(&self) -> ComparisonTable<'_> {
        ComparisonTable::new(self.catalog.resolve(self.compare.ids()))
    }

    /// Phones similar to `id`, for its detail page.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if no product has this id.
    pub fn similar(&self, id: &str, limit: usize) -> Result<Vec<&Product>> {
        let product = self.product(id)?;
        Ok(similar_to(self.catalog.all(), product, limit))
    }

    /// Add a product to the compare-list after checking it exists.
    ///
    /// Returns the id evicted to make room, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if no product has this id.
    pub fn add_to_compare(&mut self, id: &str) -> Result<Option<ProductId>> {
        let id = self.product(id)?.id.clone();
        Ok(self.compare.add(&id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::phone;
    use crate::config::DEFAULT_BUY_URL;
    use crate::persist::MemoryStore;

    fn storefront(store: SharedStore) -> Storefront {
        let catalog = Catalog::new(vec![
            phone("a", "X", 10_000),
            phone("b", "Y", 20_000),
            phone("c", "X", 30_000),
        ])
        .unwrap();
        Storefront::with_store(Arc::new(catalog), store, DEFAULT_BUY_URL.to_string())
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    #[test]
    fn test_login_rebinds_sets() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut sf = storefront(Arc::clone(&store));
        sf.favorites_mut().toggle(&ProductId::new("a"));

        sf.register("A", "a@b.kg", &secret("123456")).unwrap();
        assert!(sf.favorites().is_empty());
        assert!(matches!(sf.identity(), Identity::User(_)));

        sf.favorites_mut().toggle(&ProductId::new("b"));
        sf.logout();
        assert_eq!(sf.favorites().ids(), [ProductId::new("a")]);

        sf.login("a@b.kg", &secret("123456")).unwrap();
        assert_eq!(sf.favorites().ids(), [ProductId::new("b")]);
    }

    #[test]
    fn test_failed_login_keeps_identity() {
        let mut sf = storefront(Arc::new(MemoryStore::new()));
        sf.cart_mut().add(&ProductId::new("a"), 1);

        assert!(sf.login("a@b.kg", &secret("nope!!")).is_err());
        assert_eq!(sf.identity(), Identity::Guest);
        assert_eq!(sf.cart().total_items(), 1);
    }

    #[test]
    fn test_session_restored_on_reopen() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let mut sf = storefront(Arc::clone(&store));
        sf.register("A", "a@b.kg", &secret("123456")).unwrap();
        sf.cart_mut().add(&ProductId::new("c"), 2);

        let reopened = storefront(store);
        assert!(reopened.auth().is_authenticated());
        assert_eq!(reopened.cart().total_items(), 2);
    }

    #[test]
    fn test_comparison_drops_missing_ids() {
        let mut sf = storefront(Arc::new(MemoryStore::new()));
        sf.add_to_compare("a").unwrap();
        sf.compare_mut().add(&ProductId::new("gone"));
        sf.add_to_compare("b").unwrap();

        let table = sf.comparison();
        let ids: Vec<&str> = table.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(table.row("brand").unwrap().differs);
    }

    #[test]
    fn test_unknown_product() {
        let mut sf = storefront(Arc::new(MemoryStore::new()));
        assert!(matches!(
            sf.add_to_compare("zzz"),
            Err(StorefrontError::ProductNotFound(_))
        ));
        assert!(sf.similar("zzz", 4).is_err());
        assert_eq!(sf.buy_url(), DEFAULT_BUY_URL);
    }
}
