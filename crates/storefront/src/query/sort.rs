//! Catalog sort orders.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;

use super::options::UnknownOption;

/// A catalog sort order, written as its URL token (`price-asc`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    /// Release year, newest first.
    Newest,
    /// Popularity score, highest first.
    #[default]
    Popularity,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Popularity,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
        Self::Newest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Newest => "newest",
            Self::Popularity => "popularity",
        }
    }

    /// Label for the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Сначала дешевле",
            Self::PriceDesc => "Сначала дороже",
            Self::NameAsc => "По названию (А-Я)",
            Self::NameDesc => "По названию (Я-А)",
            Self::Newest => "Сначала новые",
            Self::Popularity => "По популярности",
        }
    }

    /// Parse a URL token, falling back to [`SortKey::Popularity`] on anything
    /// unrecognized.
    #[must_use]
    pub fn parse_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: UnknownOption| {
            tracing::debug!(%err, "Unknown sort key, using default");
            Self::default()
        })
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
            Self::Newest => b.release_year.cmp(&a.release_year),
            Self::Popularity => b.popularity.total_cmp(&a.popularity),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownOption {
                category: "sort",
                token: s.to_owned(),
            })
    }
}

/// Sort products by `key`.
///
/// The sort is stable: products with equal keys keep their input order.
#[must_use]
pub fn sort_products(mut products: Vec<&Product>, key: SortKey) -> Vec<&Product> {
    products.sort_by(|a, b| key.compare(a, b));
    products
}

/// Dictionary order for names.
///
/// Compares case-folded characters with `ё` folded onto `е`, so Latin and
/// Cyrillic names sort alphabetically within their script. Ties go to
/// lowercase first, then to plain code point order (`е` before `ё`). This is
/// not full locale collation.
fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(fold_name(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn fold_name(name: &str) -> impl Iterator<Item = char> {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::product::fixtures::phone;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn named(id: &str, name: &str) -> Product {
        let mut p = phone(id, "X", 1);
        p.name = name.to_owned();
        p
    }

    #[test]
    fn test_price_sort_is_stable() {
        let catalog = vec![
            phone("a", "X", 300),
            phone("b", "X", 100),
            phone("c", "X", 300),
            phone("d", "X", 100),
        ];
        let sorted = sort_products(catalog.iter().collect(), SortKey::PriceAsc);
        assert_eq!(ids(&sorted), ["b", "d", "a", "c"]);

        let sorted = sort_products(catalog.iter().collect(), SortKey::PriceDesc);
        assert_eq!(ids(&sorted), ["a", "c", "b", "d"]);
    }

    #[test]
    fn test_popularity_is_descending() {
        let mut a = phone("a", "X", 1);
        a.popularity = 40.0;
        let mut b = phone("b", "X", 1);
        b.popularity = 95.5;
        let mut c = phone("c", "X", 1);
        c.popularity = 40.0;
        let catalog = vec![a, b, c];

        let sorted = sort_products(catalog.iter().collect(), SortKey::default());
        assert_eq!(ids(&sorted), ["b", "a", "c"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = vec![
            named("a", "redmi Note 13"),
            named("b", "Galaxy S24"),
            named("c", "iPhone 13"),
            named("d", "Xiaomi 14"),
        ];
        let sorted = sort_products(catalog.iter().collect(), SortKey::NameAsc);
        assert_eq!(ids(&sorted), ["b", "c", "a", "d"]);

        let sorted = sort_products(catalog.iter().collect(), SortKey::NameDesc);
        assert_eq!(ids(&sorted), ["d", "a", "c", "b"]);
    }

    #[test]
    fn test_name_sort_cyrillic() {
        let catalog = vec![named("b", "Яблоко"), named("a", "арбуз")];
        let sorted = sort_products(catalog.iter().collect(), SortKey::NameAsc);
        assert_eq!(ids(&sorted), ["a", "b"]);
    }

    #[test]
    fn test_name_sort_yo_sorts_with_ye() {
        let catalog = vec![
            named("ya", "Яндекс Телефон"),
            named("yo", "Ёлка"),
            named("ye", "Ель"),
            named("zh", "Жук"),
        ];
        let sorted = sort_products(catalog.iter().collect(), SortKey::NameAsc);
        assert_eq!(ids(&sorted), ["yo", "ye", "zh", "ya"]);

        assert_eq!(compare_names("ёж", "еж"), Ordering::Greater);
        assert_eq!(compare_names("ёж", "ежа"), Ordering::Less);
    }

    #[test]
    fn test_name_sort_lowercase_first_on_tie() {
        assert_eq!(compare_names("pixel", "Pixel"), Ordering::Less);
        assert_eq!(compare_names("Pixel", "Pixel"), Ordering::Equal);
    }

    #[test]
    fn test_newest_keeps_ties_in_order() {
        let mut a = phone("a", "X", 1);
        a.release_year = 2022;
        let mut b = phone("b", "X", 1);
        b.release_year = 2024;
        let mut c = phone("c", "X", 1);
        c.release_year = 2022;
        let catalog = vec![a, b, c];

        let sorted = sort_products(catalog.iter().collect(), SortKey::Newest);
        assert_eq!(ids(&sorted), ["b", "a", "c"]);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(SortKey::parse_or_default("name-desc"), SortKey::NameDesc);
        assert_eq!(SortKey::parse_or_default("cheapest"), SortKey::Popularity);
        assert_eq!(SortKey::parse_or_default(""), SortKey::Popularity);
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }
}
