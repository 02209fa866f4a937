//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brightcart_core::{OrderId, Price, ProductId};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    id: OrderId,
    /// When the order was placed.
    pub order_date: Option<DateTime<Utc>>,
    /// Line items on the order. Never null; starts empty.
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Create a new order with the given identity and no other data.
    #[must_use]
    pub const fn new(id: OrderId) -> Self {
        Self {
            id,
            order_date: None,
            order_items: Vec::new(),
        }
    }

    /// The order's identity.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Append a line item to the order.
    pub fn add_item(&mut self, item: OrderItem) {
        self.order_items.push(item);
    }

    /// Whether this order satisfies its business rules: an order date is
    /// required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.order_date.is_some()
    }
}

/// One line of an order: a product, how many, and at what price.
///
/// Line items have no identity of their own; they live and die with their
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: i32,
    /// Price paid per unit at purchase time.
    pub purchase_price: Option<Price>,
}

impl OrderItem {
    /// Create a line item for the given product.
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 0,
            purchase_price: None,
        }
    }

    /// Whether this line item satisfies its business rules: a positive
    /// product reference, a positive quantity, and a purchase price are
    /// all required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.product_id.as_i32() > 0 && self.quantity > 0 && self.purchase_price.is_some()
    }
}
