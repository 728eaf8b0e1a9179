//! Compare-list: a bounded set with FIFO eviction.

use phone_city_core::{Identity, ProductId};

use super::{IdentityScoped, ListKind, PersistedList, SharedStore, dedup_ids};

/// Maximum number of products on the compare page.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Products queued for comparison, oldest first.
///
/// Never holds more than [`MAX_COMPARE_ITEMS`]; adding past capacity evicts
/// the oldest entry.
#[derive(Debug)]
pub struct CompareList {
    list: PersistedList<ProductId>,
}

impl CompareList {
    #[must_use]
    pub fn open(store: SharedStore, identity: Identity) -> Self {
        Self {
            list: PersistedList::open_normalized(
                store,
                ListKind::Compare,
                identity,
                normalize,
            ),
        }
    }

    /// Append `id` unless present.
    ///
    /// Returns the evicted id when the list was full.
    pub fn add(&mut self, id: &ProductId) -> Option<ProductId> {
        self.list.mutate(|ids| {
            if ids.contains(id) {
                return None;
            }
            let evicted = (ids.len() >= MAX_COMPARE_ITEMS).then(|| ids.remove(0));
            ids.push(id.clone());
            evicted
        })
    }

    pub fn remove(&mut self, id: &ProductId) {
        self.list.mutate(|ids| ids.retain(|x| x != id));
    }

    pub fn clear(&mut self) {
        self.list.mutate(Vec::clear);
    }

    #[must_use]
    pub fn is_in_compare(&self, id: &ProductId) -> bool {
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

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_COMPARE_ITEMS
    }
}

/// Collapse repeated ids, then keep only the newest entries that fit.
fn normalize(ids: &mut Vec<ProductId>) {
    dedup_ids(ids);
    let excess = ids.len().saturating_sub(MAX_COMPARE_ITEMS);
    ids.drain(..excess);
}

impl IdentityScoped for CompareList {
    fn identity(&self) -> &Identity {
        self.list.identity()
    }

    fn switch_identity(&mut self, identity: &Identity) {
        self.list.switch_identity(identity);
    }
}
