//! Identity-scoped persisted sets: favorites, compare-list and cart.
//!
//! Each container keeps its state in memory and writes the whole list to a
//! [`KeyValueStore`] after every mutation. The storage key is derived from the
//! current [`Identity`], so a guest and each signed-in user have fully
//! independent sets. Switching identity reloads from the new key and never
//! merges the previous set into it.
//!
//! # Storage keys
//!
//! ```text
//! favorites_guest     favorites_<user id>
//! compare_guest       compare_<user id>
//! cart_guest          cart_<user id>
//! ```

pub mod cart;
pub mod compare_list;
pub mod favorites;
pub mod file;
pub mod list;
pub mod memory;

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use phone_city_core::{Identity, ProductId};

pub use cart::{Cart, CartItem};
pub use compare_list::{CompareList, MAX_COMPARE_ITEMS};
pub use favorites::Favorites;
pub use file::FileStore;
pub use list::PersistedList;
pub use memory::MemoryStore;

/// Errors from the storage medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the medium cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Serializing a value failed.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A lock guarding the medium was poisoned.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A durable string key-value medium.
///
/// Keys are plain strings, values are serialized collections. There is no
/// expiry and no encryption.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage medium.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if serialization or the write fails.
pub fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    store.set(key, &serde_json::to_string(value)?)
}

/// The three persisted containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Favorites,
    Compare,
    Cart,
}

impl ListKind {
    /// Key prefix for this container.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Compare => "compare",
            Self::Cart => "cart",
        }
    }
}

/// Storage key for a container under an identity: `<kind>_guest` or
/// `<kind>_<user id>`.
#[must_use]
pub fn namespace_key(kind: ListKind, identity: &Identity) -> String {
    match identity {
        Identity::Guest => format!("{}_guest", kind.as_str()),
        Identity::User(id) => format!("{}_{id}", kind.as_str()),
    }
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedup_ids(ids: &mut Vec<ProductId>) {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}

/// A container whose contents depend on who is signed in.
pub trait IdentityScoped {
    /// The identity the container is currently bound to.
    fn identity(&self) -> &Identity;

    /// Rebind to `identity`: reload from its key, then write the loaded state
    /// back.
    fn switch_identity(&mut self, identity: &Identity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use phone_city_core::UserId;

    #[test]
    fn test_namespace_key() {
        assert_eq!(
            namespace_key(ListKind::Favorites, &Identity::Guest),
            "favorites_guest"
        );
        assert_eq!(
            namespace_key(ListKind::Cart, &Identity::User(UserId::new("1718000000000"))),
            "cart_1718000000000"
        );
        assert_eq!(
            namespace_key(ListKind::Compare, &Identity::User(UserId::new("42"))),
            "compare_42"
        );
    }

    #[test]
    fn test_dedup_ids_keeps_first_occurrence() {
        let mut ids: Vec<ProductId> = ["a", "b", "a", "c", "b"]
            .into_iter()
            .map(ProductId::new)
            .collect();
        dedup_ids(&mut ids);
        assert_eq!(ids, [ProductId::new("a"), ProductId::new("b"), ProductId::new("c")]);
    }
}
