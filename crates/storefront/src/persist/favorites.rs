//! Favorites: a toggle set of product ids.

use phone_city_core::{Identity, ProductId};

use super::{IdentityScoped, ListKind, PersistedList, SharedStore, dedup_ids};

/// Favorite products, in the order they were added. Each id appears once.
#[derive(Debug)]
pub struct Favorites {
    list: PersistedList<ProductId>,
}

impl Favorites {
    #[must_use]
    pub fn open(store: SharedStore, identity: Identity) -> Self {
        Self {
            list: PersistedList::open_normalized(
                store,
                ListKind::Favorites,
                identity,
                dedup_ids,
            ),
        }
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns `true` if the product is now a favorite.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        self.list.mutate(|ids| {
            if let Some(pos) = ids.iter().position(|x| x == id) {
                ids.remove(pos);
                false
            } else {
                ids.push(id.clone());
                true
            }
        })
    }

    /// Drop `id` if present.
    pub fn remove(&mut self, id: &ProductId) {
        self.list.mutate(|ids| ids.retain(|x| x != id));
    }

    pub fn clear(&mut self) {
        self.list.mutate(Vec::clear);
    }

    #[must_use]
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.list.items().contains(id)
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        self.list.items()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.items().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.items().is_empty()
    }
}

impl IdentityScoped for Favorites {
    fn identity(&self) -> &Identity {
        self.list.identity()
    }

    fn switch_identity(&mut self, identity: &Identity) {
        self.list.switch_identity(identity);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persist::{KeyValueStore, MemoryStore};

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::open(Arc::new(MemoryStore::new()), Identity::Guest);

        assert!(favorites.toggle(&id("a")));
        assert!(favorites.toggle(&id("b")));
        assert!(favorites.is_favorite(&id("a")));

        assert!(!favorites.toggle(&id("a")));
        assert!(!favorites.is_favorite(&id("a")));
        assert_eq!(favorites.ids(), [id("b")]);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut favorites = Favorites::open(Arc::new(MemoryStore::new()), Identity::Guest);
        favorites.toggle(&id("a"));
        favorites.toggle(&id("b"));

        favorites.toggle(&id("a"));
        favorites.toggle(&id("a"));

        // membership restored, position moved to the end
        assert_eq!(favorites.ids(), [id("b"), id("a")]);
    }

    #[test]
    fn test_persisted_under_guest_key() {
        let store = Arc::new(MemoryStore::new());
        let mut favorites = Favorites::open(store.clone(), Identity::Guest);
        favorites.toggle(&id("pixel-8"));

        assert_eq!(
            store.get("favorites_guest").unwrap().as_deref(),
            Some(r#"["pixel-8"]"#)
        );

        let reopened = Favorites::open(store, Identity::Guest);
        assert!(reopened.is_favorite(&id("pixel-8")));
    }

    #[test]
    fn test_stored_duplicates_collapse_on_load() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("favorites_guest", r#"["a","b","a"]"#)
            .unwrap();

        let mut favorites = Favorites::open(store.clone(), Identity::Guest);
        assert_eq!(favorites.ids(), [id("a"), id("b")]);
        assert_eq!(
            store.get("favorites_guest").unwrap().as_deref(),
            Some(r#"["a","b"]"#)
        );

        // one toggle is enough to unfavorite
        assert!(!favorites.toggle(&id("a")));
        assert!(!favorites.is_favorite(&id("a")));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut favorites = Favorites::open(Arc::new(MemoryStore::new()), Identity::Guest);
        favorites.toggle(&id("a"));
        favorites.toggle(&id("b"));

        favorites.remove(&id("zzz"));
        assert_eq!(favorites.len(), 2);

        favorites.remove(&id("a"));
        assert_eq!(favorites.ids(), [id("b")]);

        favorites.clear();
        assert!(favorites.is_empty());
    }
}
