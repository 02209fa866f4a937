//! Sample-data repositories.
//!
//! Each repository hands back statically constructed fixture data: the
//! requested identifier is echoed into the returned entity rather than
//! selecting among stored records. Every call builds a fresh entity graph;
//! there is no cache, no identity map, and no shared instance between
//! calls.

pub mod addresses;
pub mod customers;
pub mod orders;
pub mod products;

pub use addresses::AddressRepository;
pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
