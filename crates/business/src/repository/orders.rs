//! Order repository backed by fixture data.

use chrono::{Datelike, TimeZone, Utc};

use brightcart_core::OrderId;

use crate::models::Order;

/// Repository for order retrieval.
#[derive(Debug, Default)]
pub struct OrderRepository;

impl OrderRepository {
    /// Create a new order repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get one order by ID.
    ///
    /// The fixture order date is pinned to April 14th 10:00 UTC of the
    /// current year, so the data stays fresh without varying within a
    /// year.
    #[must_use]
    pub fn get_by_id(&self, id: OrderId) -> Order {
        tracing::debug!(order_id = %id, "retrieving order");

        let mut order = Order::new(id);
        order.order_date = Utc
            .with_ymd_and_hms(Utc::now().year(), 4, 14, 10, 0, 0)
            .single();
        order
    }
}
