//! Domain entity types.
//!
//! Entities are plain data holders: identity is fixed at construction and
//! exposed through a getter, optional fields are `Option<T>` rather than
//! sentinel values, and owned collections start empty. Each entity carries
//! an `is_valid` predicate that checks its fixed business rules without
//! side effects.

pub mod address;
pub mod customer;
pub mod order;
pub mod product;

pub use address::{Address, AddressKind};
pub use customer::Customer;
pub use order::{Order, OrderItem};
pub use product::Product;
