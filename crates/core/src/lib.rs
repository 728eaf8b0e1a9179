//! Phone City Core - Shared types library.
//!
//! This crate provides common types used across all Phone City components:
//! - `storefront` - Catalog, query engine, comparison and persisted lists
//! - `cli` - Command-line front-end for browsing the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, identities, emails and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
