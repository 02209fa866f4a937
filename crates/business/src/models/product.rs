//! Product domain type.

use serde::{Deserialize, Serialize};

use brightcart_core::{Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    id: ProductId,
    /// Display name of the product.
    pub product_name: Option<String>,
    /// Longer marketing description.
    pub description: Option<String>,
    /// Current selling price, if one has been set.
    pub current_price: Option<Price>,
}

impl Product {
    /// Create a new product with the given identity and no other data.
    #[must_use]
    pub const fn new(id: ProductId) -> Self {
        Self {
            id,
            product_name: None,
            description: None,
            current_price: None,
        }
    }

    /// The product's identity.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Whether this product satisfies its business rules: a name and a
    /// current price are required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.product_name.is_some() && self.current_price.is_some()
    }
}
