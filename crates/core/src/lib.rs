//! Honeyshop Core - Shared types library.
//!
//! This crate provides common types used across all Honeyshop components:
//! - `storefront` - Inventory, cart, checkout and user services
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
