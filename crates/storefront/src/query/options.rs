//! Filter option tables and the bucket boundaries behind them.
//!
//! Every option has a URL token (`as_str`, parsed back with `FromStr`) and a
//! display label for the filter sidebar. Boundaries are the single source of
//! truth for both the filter predicate and the labels.

use std::str::FromStr;

use phone_city_core::Price;

/// Brands offered in the filter sidebar, in display order.
pub const BRANDS: &[&str] = &[
    "Apple", "Samsung", "Xiaomi", "Google", "Huawei", "OnePlus", "Realme", "POCO", "Nothing",
    "Vivo",
];

/// Operating systems offered in the filter sidebar.
pub const OPERATING_SYSTEMS: &[&str] = &["iOS", "Android"];

/// Memory configurations offered in the filter sidebar.
pub const MEMORY_OPTIONS: &[MemoryOption] = &[
    MemoryOption::new(4, 64),
    MemoryOption::new(4, 128),
    MemoryOption::new(6, 128),
    MemoryOption::new(8, 128),
    MemoryOption::new(8, 256),
    MemoryOption::new(12, 256),
    MemoryOption::new(12, 512),
    MemoryOption::new(16, 512),
    MemoryOption::new(16, 1024),
];

/// Returned by `FromStr` on an unrecognized option token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {category} option: {token}")]
pub struct UnknownOption {
    pub category: &'static str,
    pub token: String,
}

impl UnknownOption {
    fn new(category: &'static str, token: &str) -> Self {
        Self {
            category,
            token: token.to_owned(),
        }
    }
}

// =============================================================================
// Memory
// =============================================================================

/// A RAM/storage pair, written as `"{ram}-{storage}"` in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryOption {
    /// RAM in gigabytes.
    pub ram: u32,
    /// Storage in gigabytes.
    pub storage: u32,
}

impl MemoryOption {
    #[must_use]
    pub const fn new(ram: u32, storage: u32) -> Self {
        Self { ram, storage }
    }

    /// URL token, e.g. `8-256`.
    #[must_use]
    pub fn token(self) -> String {
        format!("{}-{}", self.ram, self.storage)
    }

    /// Sidebar label, e.g. `8 ГБ / 256 ГБ` or `16 ГБ / 1 ТБ`.
    #[must_use]
    pub fn label(self) -> String {
        let storage = if self.storage >= 1024 && self.storage % 1024 == 0 {
            format!("{} ТБ", self.storage / 1024)
        } else {
            format!("{} ГБ", self.storage)
        };
        format!("{} ГБ / {storage}", self.ram)
    }

    /// Whether a phone's memory is exactly this configuration.
    #[must_use]
    pub const fn matches(self, ram: u32, storage: u32) -> bool {
        self.ram == ram && self.storage == storage
    }
}

impl FromStr for MemoryOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnknownOption::new("memory", s);
        let (ram, storage) = s.split_once('-').ok_or_else(err)?;
        Ok(Self {
            ram: ram.trim().parse().map_err(|_| err())?,
            storage: storage.trim().parse().map_err(|_| err())?,
        })
    }
}

// =============================================================================
// Screen size
// =============================================================================

/// Screen diagonal buckets.
///
/// - small: `size <= 5.5`
/// - medium: `5.5 < size <= 6.3`
/// - large: `6.3 < size <= 6.7`
/// - xlarge: `size > 6.7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenBucket {
    Small,
    Medium,
    Large,
    XLarge,
}

impl ScreenBucket {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "до 5.5\"",
            Self::Medium => "5.5\" - 6.3\"",
            Self::Large => "6.3\" - 6.7\"",
            Self::XLarge => "более 6.7\"",
        }
    }

    /// Whether a diagonal (inches) falls in this bucket.
    #[must_use]
    pub fn contains(self, size: f64) -> bool {
        match self {
            Self::Small => size <= 5.5,
            Self::Medium => size > 5.5 && size <= 6.3,
            Self::Large => size > 6.3 && size <= 6.7,
            Self::XLarge => size > 6.7,
        }
    }
}

impl FromStr for ScreenBucket {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownOption::new("screenSize", s))
    }
}

// =============================================================================
// Battery
// =============================================================================

/// Battery capacity buckets (mAh).
///
/// - small: `< 3000`
/// - medium: `3000..4000`
/// - large: `4000..5000`
/// - xlarge: `>= 5000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryBucket {
    Small,
    Medium,
    Large,
    XLarge,
}

impl BatteryBucket {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "до 3000 мАч",
            Self::Medium => "3000 - 4000 мАч",
            Self::Large => "4000 - 5000 мАч",
            Self::XLarge => "более 5000 мАч",
        }
    }

    #[must_use]
    pub const fn contains(self, capacity: u32) -> bool {
        match self {
            Self::Small => capacity < 3000,
            Self::Medium => capacity >= 3000 && capacity < 4000,
            Self::Large => capacity >= 4000 && capacity < 5000,
            Self::XLarge => capacity >= 5000,
        }
    }
}

impl FromStr for BatteryBucket {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownOption::new("battery", s))
    }
}

// =============================================================================
// Price
// =============================================================================

/// Price bands (som). Lower bound inclusive, upper bound exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Under15k,
    From15kTo30k,
    From30kTo50k,
    From50kTo80k,
    Over80k,
}

impl PriceBand {
    pub const ALL: [Self; 5] = [
        Self::Under15k,
        Self::From15kTo30k,
        Self::From30kTo50k,
        Self::From50kTo80k,
        Self::Over80k,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under15k => "under15k",
            Self::From15kTo30k => "15k-30k",
            Self::From30kTo50k => "30k-50k",
            Self::From50kTo80k => "50k-80k",
            Self::Over80k => "over80k",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under15k => "до 15 000 сом",
            Self::From15kTo30k => "15 000 - 30 000 сом",
            Self::From30kTo50k => "30 000 - 50 000 сом",
            Self::From50kTo80k => "50 000 - 80 000 сом",
            Self::Over80k => "более 80 000 сом",
        }
    }

    /// `(min inclusive, max exclusive)` in som.
    #[must_use]
    pub const fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::Under15k => (0, Some(15_000)),
            Self::From15kTo30k => (15_000, Some(30_000)),
            Self::From30kTo50k => (30_000, Some(50_000)),
            Self::From50kTo80k => (50_000, Some(80_000)),
            Self::Over80k => (80_000, None),
        }
    }

    #[must_use]
    pub const fn contains(self, price: Price) -> bool {
        let som = price.som();
        let (min, max) = self.bounds();
        som >= min
            && match max {
                Some(max) => som < max,
                None => true,
            }
    }
}

impl FromStr for PriceBand {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownOption::new("priceRange", s))
    }
}
