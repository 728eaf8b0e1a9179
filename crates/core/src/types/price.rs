//! Whole-som price representation.
//!
//! Catalog prices are whole amounts in Kyrgyz som; there are no fractional
//! tyiyn in the dataset, so a `u64` is exact and cheap to compare.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in som.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Currency suffix used when displaying prices.
    pub const CURRENCY_SUFFIX: &'static str = "сом";

    /// Create a price from a whole som amount.
    #[must_use]
    pub const fn new(som: u64) -> Self {
        Self(som)
    }

    /// The amount in som.
    #[must_use]
    pub const fn som(self) -> u64 {
        self.0
    }

    /// Absolute difference between two prices.
    #[must_use]
    pub const fn distance(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The amount with digits grouped by a non-breaking space, without the
    /// currency suffix (`129 990`).
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('\u{a0}');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grouped(), Self::CURRENCY_SUFFIX)
    }
}

impl From<u64> for Price {
    fn from(som: u64) -> Self {
        Self(som)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.fold(0u64, |acc, p| acc.saturating_add(p.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(Price::new(0).grouped(), "0");
        assert_eq!(Price::new(999).grouped(), "999");
        assert_eq!(Price::new(1000).grouped(), "1\u{a0}000");
        assert_eq!(Price::new(129_990).grouped(), "129\u{a0}990");
        assert_eq!(Price::new(1_234_567).grouped(), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_display_has_suffix() {
        assert_eq!(Price::new(15_000).to_string(), "15\u{a0}000 сом");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Price::new(10_000);
        let b = Price::new(24_999);
        assert_eq!(a.distance(b), 14_999);
        assert_eq!(b.distance(a), 14_999);
    }

    #[test]
    fn test_sum_and_times() {
        let total: Price = [Price::new(100).times(3), Price::new(50)].into_iter().sum();
        assert_eq!(total, Price::new(350));
    }
}
