//! Phone City storefront library.
//!
//! The catalog engine behind the Phone City shop: an immutable phone catalog,
//! search/filter/sort/similarity queries over it, a side-by-side comparison
//! table, and the favorites, compare-list and cart sets persisted per
//! identity.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod persist;
pub mod query;
pub mod state;

pub use error::{Result, StorefrontError};
pub use state::Storefront;
