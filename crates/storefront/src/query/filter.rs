//! Multi-criterion catalog filter.

use crate::catalog::Product;

use super::criteria::Criteria;

/// Keep the products that pass every present category, preserving order.
///
/// Categories combine with AND, values inside a category with OR. An empty
/// category constrains nothing, so `filter(k, &Criteria::default())` returns
/// all of `k`.
pub fn filter<'a, I>(products: I, criteria: &Criteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| matches(criteria, product))
        .collect()
}

/// Whether a single product passes `criteria`.
#[must_use]
pub fn matches(criteria: &Criteria, product: &Product) -> bool {
    any_or_unconstrained(&criteria.brand, |brand| *brand == product.brand)
        && any_or_unconstrained(&criteria.os, |os| *os == product.os)
        && any_or_unconstrained(&criteria.memory, |option| {
            option.matches(product.memory.ram, product.memory.storage)
        })
        && any_or_unconstrained(&criteria.screen_size, |bucket| {
            bucket.contains(product.screen.size)
        })
        && any_or_unconstrained(&criteria.battery, |bucket| {
            bucket.contains(product.battery.capacity)
        })
        && criteria
            .price_range
            .is_none_or(|band| band.contains(product.price))
}

fn any_or_unconstrained<T>(values: &[T], pred: impl Fn(&T) -> bool) -> bool {
    values.is_empty() || values.iter().any(pred)
}
