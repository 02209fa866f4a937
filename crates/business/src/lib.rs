//! Brightcart Business - domain entities and sample-data repositories.
//!
//! This crate is the business layer of a deliberately small teaching
//! system: plain entities with set-once identity, derived display values,
//! and boolean validation predicates, retrieved from repositories backed
//! by fixture data instead of a real store.
//!
//! # Modules
//!
//! - [`models`] - Domain entities (`Customer`, `Address`, `Product`,
//!   `Order`, `OrderItem`)
//! - [`repository`] - Sample-data repositories returning fresh entity
//!   graphs per call
//!
//! # Example
//!
//! ```
//! use brightcart_business::repository::CustomerRepository;
//! use brightcart_core::CustomerId;
//!
//! let repository = CustomerRepository::new();
//! let customer = repository.get_by_id(CustomerId::new(42));
//!
//! assert!(customer.is_valid());
//! assert!(!customer.address_list.is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod repository;
