//! The generic persisted container behind favorites, compare-list and cart.

use serde::Serialize;
use serde::de::DeserializeOwned;

use phone_city_core::Identity;

use super::{ListKind, SharedStore, StorageError, namespace_key, write_json};

/// An ordered list mirrored to a [`KeyValueStore`](super::KeyValueStore)
/// under an identity-derived key.
///
/// Loading never fails: a missing key, an unreadable medium or a value that
/// does not parse all load as an empty list. Writes after a mutation are
/// fire-and-forget; failures are logged and the in-memory state is kept.
///
/// Stored data is not trusted to satisfy the container's invariants, so every
/// load runs the list's normalizer before the state is used or written back.
pub struct PersistedList<T> {
    store: SharedStore,
    kind: ListKind,
    identity: Identity,
    items: Vec<T>,
    normalize: fn(&mut Vec<T>),
}

impl<T> PersistedList<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind to `identity` and load its stored list as is.
    #[must_use]
    pub fn open(store: SharedStore, kind: ListKind, identity: Identity) -> Self {
        Self::open_normalized(store, kind, identity, |_| {})
    }

    /// Bind to `identity` and load its stored list, passing every loaded list
    /// through `normalize`.
    #[must_use]
    pub fn open_normalized(
        store: SharedStore,
        kind: ListKind,
        identity: Identity,
        normalize: fn(&mut Vec<T>),
    ) -> Self {
        let mut list = Self {
            store,
            kind,
            identity,
            items: Vec::new(),
            normalize,
        };
        list.reload();
        list.persist_or_log();
        list
    }

    /// The storage key for the current identity.
    #[must_use]
    pub fn key(&self) -> String {
        namespace_key(self.kind, &self.identity)
    }

    #[must_use]
    pub const fn kind(&self) -> ListKind {
        self.kind
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the in-memory state with whatever is stored under the current
    /// key.
    pub fn reload(&mut self) {
        let key = self.key();
        self.items = match self.store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, error = %e, "Stored list is unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(%key, error = %e, "Failed to read stored list");
                Vec::new()
            }
        };

        let loaded = self.items.len();
        (self.normalize)(&mut self.items);
        if self.items.len() != loaded {
            tracing::warn!(%key, loaded, kept = self.items.len(), "Stored list repaired");
        }
        tracing::debug!(%key, len = self.items.len(), "List loaded");
    }

    /// Write the whole list under the current key.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the write fails.
    pub fn persist(&self) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), &self.key(), &self.items)
    }

    /// Apply `f` to the items, then persist.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = f(&mut self.items);
        self.persist_or_log();
        result
    }

    /// Rebind to `identity`, reload, and write the loaded state back.
    pub fn switch_identity(&mut self, identity: &Identity) {
        identity.clone_into(&mut self.identity);
        self.reload();
        self.persist_or_log();
    }

    fn persist_or_log(&self) {
        if let Err(e) = self.persist() {
            tracing::error!(key = %self.key(), error = %e, "Failed to persist list");
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PersistedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedList")
            .field("kind", &self.kind)
            .field("identity", &self.identity)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::persist::{KeyValueStore, MemoryStore};
    use phone_city_core::UserId;

    /// Counts writes and can be told to fail them.
    #[derive(Default)]
    pub struct CountingStore {
        inner: MemoryStore,
        pub writes: AtomicUsize,
        pub fail_writes: std::sync::atomic::AtomicBool,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn user(id: &str) -> Identity {
        Identity::User(UserId::new(id))
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let list: PersistedList<String> =
            PersistedList::open(store, ListKind::Favorites, Identity::Guest);
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set("favorites_guest", "{not json").unwrap();

        let list: PersistedList<String> =
            PersistedList::open(store.clone(), ListKind::Favorites, Identity::Guest);
        assert!(list.items().is_empty());
        // the empty state is written back over the garbage
        assert_eq!(store.get("favorites_guest").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_mutate_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut list: PersistedList<String> =
            PersistedList::open(store.clone(), ListKind::Favorites, Identity::Guest);

        list.mutate(|items| items.push("a".to_owned()));
        assert_eq!(
            store.get("favorites_guest").unwrap().as_deref(),
            Some(r#"["a"]"#)
        );
    }

    #[test]
    fn test_identity_switch_reloads_without_merging() {
        let store = Arc::new(MemoryStore::new());
        store.set("favorites_7", r#"["x"]"#).unwrap();

        let mut list: PersistedList<String> =
            PersistedList::open(store.clone(), ListKind::Favorites, Identity::Guest);
        list.mutate(|items| items.push("g".to_owned()));

        list.switch_identity(&user("7"));
        assert_eq!(list.items(), ["x"]);
        assert_eq!(list.key(), "favorites_7");

        list.switch_identity(&Identity::Guest);
        assert_eq!(list.items(), ["g"]);
    }

    #[test]
    fn test_open_and_switch_write_back() {
        let store = Arc::new(CountingStore::default());
        let mut list: PersistedList<String> =
            PersistedList::open(store.clone(), ListKind::Cart, Identity::Guest);
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);

        list.switch_identity(&user("1"));
        assert_eq!(store.writes.load(Ordering::SeqCst), 2);
        assert_eq!(store.get("cart_1").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_normalizer_runs_on_open_and_switch() {
        let store = Arc::new(MemoryStore::new());
        store.set("compare_guest", r#"["a","b","c"]"#).unwrap();
        store.set("compare_9", r#"["x","y","z"]"#).unwrap();

        let mut list: PersistedList<String> = PersistedList::open_normalized(
            store.clone(),
            ListKind::Compare,
            Identity::Guest,
            |items| items.truncate(1),
        );
        assert_eq!(list.items(), ["a"]);
        assert_eq!(store.get("compare_guest").unwrap().as_deref(), Some(r#"["a"]"#));

        list.switch_identity(&user("9"));
        assert_eq!(list.items(), ["x"]);
        assert_eq!(store.get("compare_9").unwrap().as_deref(), Some(r#"["x"]"#));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(CountingStore::default());
        let mut list: PersistedList<String> =
            PersistedList::open(store.clone(), ListKind::Compare, Identity::Guest);

        store.fail_writes.store(true, Ordering::SeqCst);
        list.mutate(|items| items.push("a".to_owned()));

        assert_eq!(list.items(), ["a"]);
        assert!(list.persist().is_err());
    }
}
