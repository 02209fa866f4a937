//! Brightcart Core - shared leaf types for the business layer.
//!
//! This crate provides the types used across all brightcart components:
//! - newtype IDs for type-safe entity references
//! - a validated email address wrapper
//! - decimal-backed prices with currency codes
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no data store, no clock.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
