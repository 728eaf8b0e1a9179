//! Cart: product ids with quantities.

use serde::{Deserialize, Serialize};

use phone_city_core::{Identity, Price, ProductId};

use super::{IdentityScoped, ListKind, PersistedList, SharedStore};
use crate::catalog::{Catalog, Product};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub quantity: u32,
}

/// The shopping cart, in the order lines were first added.
#[derive(Debug)]
pub struct Cart {
    list: PersistedList<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn open(store: SharedStore, identity: Identity) -> Self {
        Self {
            list: PersistedList::open_normalized(store, ListKind::Cart, identity, normalize),
        }
    }

    /// Add `quantity` units of `id`, merging into an existing line.
    ///
    /// Adding zero units changes nothing.
    pub fn add(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.list.mutate(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
                item.quantity = item.quantity.saturating_add(quantity);
            } else {
                items.push(CartItem {
                    id: id.clone(),
                    quantity,
                });
            }
        });
    }

    /// Set the quantity of an existing line. Zero or less removes the line;
    /// a missing line is left missing.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.list.mutate(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
                item.quantity = quantity;
            }
        });
    }

    pub fn remove(&mut self, id: &ProductId) {
        self.list.mutate(|items| items.retain(|item| item.id != *id));
    }

    pub fn clear(&mut self) {
        self.list.mutate(Vec::clear);
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.list.items().iter().any(|item| item.id == *id)
    }

    #[must_use]
    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.list
            .items()
            .iter()
            .find(|item| item.id == *id)
            .map(|item| item.quantity)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.list.items()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.items().is_empty()
    }

    /// Sum of quantities across all lines (the header badge).
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.list
            .items()
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Lines whose product is still in the catalog, paired with the product.
    #[must_use]
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<(&'a Product, u32)> {
        self.list
            .items()
            .iter()
            .filter_map(|item| {
                catalog
                    .get(item.id.as_str())
                    .map(|product| (product, item.quantity))
            })
            .collect()
    }

    /// Price of every line still in the catalog, times its quantity.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        self.lines(catalog)
            .into_iter()
            .map(|(product, quantity)| product.price.times(quantity))
            .sum()
    }
}

/// Merge repeated lines into the first one and drop empty lines.
fn normalize(items: &mut Vec<CartItem>) {
    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items.drain(..).filter(|item| item.quantity > 0) {
        match merged.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => merged.push(item),
        }
    }
    *items = merged;
}

impl IdentityScoped for Cart {
    fn identity(&self) -> &Identity {
        self.list.identity()
    }

    fn switch_identity(&mut self, identity: &Identity) {
        self.list.switch_identity(identity);
    }
}
