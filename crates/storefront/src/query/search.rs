//! Free-text catalog search.

use crate::catalog::Product;

/// Case-insensitive substring search over name, brand, OS, processor name
/// and description, preserving catalog order.
///
/// The query is trimmed first; an empty or whitespace-only query matches
/// nothing (it is not "no filter").
pub fn search<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .into_iter()
        .filter(|product| {
            [
                product.name.as_str(),
                product.brand.as_str(),
                product.os.as_str(),
                product.processor.name.as_str(),
                product.description.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
