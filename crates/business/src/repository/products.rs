//! Product repository backed by fixture data.

use brightcart_core::{CurrencyCode, Price, ProductId};

use crate::models::Product;

/// Repository for product retrieval.
#[derive(Debug, Default)]
pub struct ProductRepository;

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get one product by ID.
    #[must_use]
    pub fn get_by_id(&self, id: ProductId) -> Product {
        tracing::debug!(product_id = %id, "retrieving product");

        let mut product = Product::new(id);
        product.product_name = Some("Sunflowers".to_owned());
        product.description = Some("Assorted sizes of sunflowers".to_owned());
        product.current_price = Some(Price::from_cents(1550, CurrencyCode::Usd));
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id_echoes_id() {
        let repository = ProductRepository::new();
        let product = repository.get_by_id(ProductId::new(8));
        assert_eq!(product.id(), ProductId::new(8));
    }

    #[test]
    fn test_retrieved_product_is_valid() {
        let repository = ProductRepository::new();
        let product = repository.get_by_id(ProductId::new(1));
        assert!(product.is_valid());
        assert_eq!(
            product.current_price.map(|p| p.display()),
            Some("$15.50".to_owned())
        );
    }
}
