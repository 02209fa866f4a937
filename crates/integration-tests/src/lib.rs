//! Cross-crate tests for brightcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brightcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `retrieval` - Repository-to-entity-graph flows
//! - `serialization` - serde behavior of populated graphs
//!
//! Everything here runs in-process against fixture data; there are no
//! external services to start.
