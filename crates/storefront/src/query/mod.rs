//! Query engine: search, filter, sort and similarity over a catalog slice.
//!
//! Everything here is a pure function of its inputs. Results borrow from the
//! catalog and keep catalog order wherever an ordering is not imposed.

pub mod criteria;
pub mod filter;
pub mod options;
pub mod search;
pub mod similar;
pub mod sort;

pub use criteria::{CatalogQuery, Criteria, FilterCategory};
pub use filter::filter;
pub use options::{
    BRANDS, BatteryBucket, MEMORY_OPTIONS, MemoryOption, OPERATING_SYSTEMS, PriceBand,
    ScreenBucket, UnknownOption,
};
pub use search::search;
pub use similar::{DEFAULT_SIMILAR_LIMIT, SIMILAR_PRICE_WINDOW, similar_to};
pub use sort::{SortKey, sort_products};
