//! ShopSphere Core - Shared types library.
//!
//! This crate provides common types used across all ShopSphere components:
//! - `storefront` - Public-facing demo storefront
//! - `integration-tests` - Router-level tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
