//! Filter criteria and their URL query-string form.
//!
//! The catalog page keeps its whole state in the query string:
//! `?search=pro&brand=Apple&brand=Samsung&memory=8-256&priceRange=50k-80k&sort=price-asc`.
//! List categories repeat their key; `priceRange`, `search` and `sort` are
//! single-valued and the first occurrence wins.
//!
//! Parsing never fails. Unrecognized tokens are dropped (fail open), so a
//! category made only of garbage tokens ends up empty and constrains nothing.

use std::str::FromStr;

use url::form_urlencoded;

use crate::catalog::{Catalog, Product};

use super::options::{BatteryBucket, MemoryOption, PriceBand, ScreenBucket, UnknownOption};
use super::sort::{SortKey, sort_products};
use super::{filter, search};

/// A filter category and its query-string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Brand,
    Os,
    Memory,
    ScreenSize,
    Battery,
    PriceRange,
}

impl FilterCategory {
    pub const ALL: [Self; 6] = [
        Self::Brand,
        Self::Os,
        Self::Memory,
        Self::ScreenSize,
        Self::Battery,
        Self::PriceRange,
    ];

    /// Query-string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Os => "os",
            Self::Memory => "memory",
            Self::ScreenSize => "screenSize",
            Self::Battery => "battery",
            Self::PriceRange => "priceRange",
        }
    }

    /// Whether the category holds a single value rather than a list.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::PriceRange)
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// User-selected filter constraints.
///
/// An empty list (or `None` for the price band) means "no constraint" for
/// that category. Categories combine with AND; values within a list combine
/// with OR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub brand: Vec<String>,
    pub os: Vec<String>,
    pub memory: Vec<MemoryOption>,
    pub screen_size: Vec<ScreenBucket>,
    pub battery: Vec<BatteryBucket>,
    pub price_range: Option<PriceBand>,
}

impl Criteria {
    /// Returns `true` if no category constrains anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brand.is_empty()
            && self.os.is_empty()
            && self.memory.is_empty()
            && self.screen_size.is_empty()
            && self.battery.is_empty()
            && self.price_range.is_none()
    }

    /// Number of selected values across all categories (for the sidebar badge).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.brand.len()
            + self.os.len()
            + self.memory.len()
            + self.screen_size.len()
            + self.battery.len()
            + usize::from(self.price_range.is_some())
    }

    /// Parse criteria from a URL query string, ignoring non-filter keys.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            criteria.push(&key, &value);
        }
        criteria
    }

    /// Add one `key=value` pair.
    ///
    /// Returns `false` when the key is not a filter category or the value was
    /// dropped as unrecognized.
    pub fn push(&mut self, key: &str, value: &str) -> bool {
        let Some(category) = FilterCategory::from_key(key) else {
            return false;
        };
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        match category {
            FilterCategory::Brand => push_unique(&mut self.brand, value.to_owned()),
            FilterCategory::Os => push_unique(&mut self.os, value.to_owned()),
            FilterCategory::Memory => push_parsed(&mut self.memory, value),
            FilterCategory::ScreenSize => push_parsed(&mut self.screen_size, value),
            FilterCategory::Battery => push_parsed(&mut self.battery, value),
            FilterCategory::PriceRange => {
                if self.price_range.is_some() {
                    false
                } else {
                    match value.parse::<PriceBand>() {
                        Ok(band) => {
                            self.price_range = Some(band);
                            true
                        }
                        Err(err) => {
                            tracing::debug!(%err, "Ignoring filter token");
                            false
                        }
                    }
                }
            }
        }
    }

    /// Render as `key=value` pairs in category order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.active_count());
        pairs.extend(self.brand.iter().map(|v| ("brand", v.clone())));
        pairs.extend(self.os.iter().map(|v| ("os", v.clone())));
        pairs.extend(self.memory.iter().map(|m| ("memory", m.token())));
        pairs.extend(
            self.screen_size
                .iter()
                .map(|b| ("screenSize", b.as_str().to_owned())),
        );
        pairs.extend(
            self.battery
                .iter()
                .map(|b| ("battery", b.as_str().to_owned())),
        );
        if let Some(band) = self.price_range {
            pairs.push(("priceRange", band.as_str().to_owned()));
        }
        pairs
    }

    /// Render as a URL query string (without the leading `?`).
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Whether a product passes every constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        filter::matches(self, product)
    }
}

fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

fn push_parsed<T>(values: &mut Vec<T>, token: &str) -> bool
where
    T: FromStr<Err = UnknownOption> + PartialEq,
{
    match token.parse::<T>() {
        Ok(value) if !values.contains(&value) => {
            values.push(value);
            true
        }
        Ok(_) => false,
        Err(err) => {
            tracing::debug!(%err, "Ignoring filter token");
            false
        }
    }
}

/// Everything the catalog page reads from its URL: search, filters, sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Raw search term, if one was given.
    pub search: Option<String>,
    pub criteria: Criteria,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Parse a catalog page query string.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut parsed = Self::default();
        let mut sort_seen = false;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "search" => {
                    if parsed.search.is_none() && !value.is_empty() {
                        parsed.search = Some(value.into_owned());
                    }
                }
                "sort" => {
                    if !sort_seen {
                        sort_seen = true;
                        parsed.sort = SortKey::parse_or_default(&value);
                    }
                }
                _ => {
                    parsed.criteria.push(&key, &value);
                }
            }
        }
        parsed
    }

    /// Render back into a query string.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(search) = &self.search {
            serializer.append_pair("search", search);
        }
        serializer.append_pair("sort", self.sort.as_str());
        serializer.extend_pairs(self.criteria.pairs());
        serializer.finish()
    }

    /// Run the catalog page pipeline: search (when a term is present), then
    /// filter, then sort.
    #[must_use]
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let base: Vec<&Product> = match self.search.as_deref() {
            Some(term) => search::search(catalog.all(), term),
            None => catalog.all().iter().collect(),
        };
        sort_products(filter::filter(base, &self.criteria), self.sort)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_accumulates_lists() {
        let criteria = Criteria::from_query("?brand=Apple&brand=Samsung&os=iOS&memory=8-256");
        assert_eq!(criteria.brand, ["Apple", "Samsung"]);
        assert_eq!(criteria.os, ["iOS"]);
        assert_eq!(criteria.memory, [MemoryOption::new(8, 256)]);
        assert_eq!(criteria.price_range, None);
    }

    #[test]
    fn test_price_range_first_value_wins() {
        let criteria = Criteria::from_query("priceRange=under15k&priceRange=over80k");
        assert_eq!(criteria.price_range, Some(PriceBand::Under15k));
    }

    #[test]
    fn test_unknown_tokens_dropped() {
        let criteria =
            Criteria::from_query("screenSize=tiny&screenSize=large&battery=huge&priceRange=free");
        assert_eq!(criteria.screen_size, [ScreenBucket::Large]);
        assert!(criteria.battery.is_empty());
        assert_eq!(criteria.price_range, None);
    }

    #[test]
    fn test_empty_values_and_unknown_keys_ignored() {
        let criteria = Criteria::from_query("brand=&color=red&os=");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_decodes_percent_and_plus() {
        let criteria = Criteria::from_query("brand=One%20Plus&brand=Google+Pixel");
        assert_eq!(criteria.brand, ["One Plus", "Google Pixel"]);
    }

    #[test]
    fn test_to_query_round_trips() {
        let criteria = Criteria {
            brand: vec!["Apple".to_owned()],
            memory: vec![MemoryOption::new(12, 512)],
            battery: vec![BatteryBucket::XLarge],
            price_range: Some(PriceBand::From30kTo50k),
            ..Criteria::default()
        };
        let query = criteria.to_query();
        assert_eq!(
            query,
            "brand=Apple&memory=12-512&battery=xlarge&priceRange=30k-50k"
        );
        assert_eq!(Criteria::from_query(&query), criteria);
    }

    #[test]
    fn test_active_count() {
        let criteria = Criteria::from_query("brand=Apple&os=iOS&os=Android&priceRange=over80k");
        assert_eq!(criteria.active_count(), 4);
    }

    #[test]
    fn test_catalog_query_parse() {
        let query = CatalogQuery::from_query("search=galaxy&sort=price-desc&brand=Samsung");
        assert_eq!(query.search.as_deref(), Some("galaxy"));
        assert_eq!(query.sort, SortKey::PriceDesc);
        assert_eq!(query.criteria.brand, ["Samsung"]);
    }

    #[test]
    fn test_catalog_query_unknown_sort_is_popularity() {
        let query = CatalogQuery::from_query("sort=cheapest");
        assert_eq!(query.sort, SortKey::Popularity);
        assert!(query.search.is_none());
    }

    #[test]
    fn test_catalog_query_to_query() {
        let query = CatalogQuery::from_query("brand=Apple&search=pro");
        assert_eq!(query.to_query(), "search=pro&sort=popularity&brand=Apple");
    }
}
