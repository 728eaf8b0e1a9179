//! `home`, `catalog` and `search`.

use phone_city_storefront::Storefront;
use phone_city_storefront::catalog::DEFAULT_SHOWCASE_LIMIT;
use phone_city_storefront::format::phone_count_label;
use phone_city_storefront::query::{CatalogQuery, FilterCategory, SortKey};

use super::{CatalogArgs, print_line, print_products};

pub const DEFAULT_LIMIT: usize = DEFAULT_SHOWCASE_LIMIT;

pub fn home(storefront: &Storefront, limit: usize) {
    let catalog = storefront.catalog();
    print_line("Популярные модели");
    print_products(catalog.popular(limit));
    print_line("");
    print_line("Новинки");
    print_products(catalog.newest(limit));
}

/// Build the catalog query from `--query` plus individual flags.
///
/// Flags add to whatever the query string already selected; `--search` and
/// `--sort` replace it.
pub fn build_query(args: &CatalogArgs) -> CatalogQuery {
    let mut query = CatalogQuery::from_query(args.query.as_deref().unwrap_or_default());

    let flags = [
        (FilterCategory::Brand, &args.brand),
        (FilterCategory::Os, &args.os),
        (FilterCategory::Memory, &args.memory),
        (FilterCategory::ScreenSize, &args.screen),
        (FilterCategory::Battery, &args.battery),
    ];
    for (category, values) in flags {
        for value in values {
            query.criteria.push(category.key(), value);
        }
    }
    if let Some(price) = &args.price {
        query.criteria.price_range = None;
        query.criteria.push(FilterCategory::PriceRange.key(), price);
    }
    if let Some(search) = args.search.as_deref().filter(|s| !s.is_empty()) {
        query.search = Some(search.to_owned());
    }
    if let Some(sort) = &args.sort {
        query.sort = SortKey::parse_or_default(sort);
    }
    query
}

pub fn list(storefront: &Storefront, args: &CatalogArgs) {
    let query = build_query(args);
    let products = query.run(storefront.catalog());
    tracing::debug!(query = %query.to_query(), hits = products.len(), "Catalog query");

    let mut header = format!("Найдено: {}", phone_count_label(products.len()));
    let active = query.criteria.active_count();
    if active > 0 {
        header = format!("{header} (фильтров: {active})");
    }
    print_line(&header);
    print_line(&format!("Сортировка: {}", query.sort.label()));
    print_products(products);
}

pub fn search(storefront: &Storefront, term: &str) {
    let products = phone_city_storefront::query::search(storefront.catalog().all(), term);
    print_line(&format!(
        "Результаты поиска «{}»: {}",
        term.trim(),
        phone_count_label(products.len())
    ));
    print_products(products);
}
