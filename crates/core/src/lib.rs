//! GreenLife Core - Shared types library.
//!
//! This crate provides common types used across all GreenLife components:
//! - `storefront` - The nursery storefront (catalog, cart, invoice)
//! - `integration-tests` - End-to-end tests over the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
