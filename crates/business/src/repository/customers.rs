//! Customer repository backed by fixture data.

use brightcart_core::{CustomerId, Email};

use crate::models::Customer;

use super::AddressRepository;

/// Repository for customer retrieval.
///
/// Owns an [`AddressRepository`] so that retrieved customers come back
/// with their address list already populated.
#[derive(Debug, Default)]
pub struct CustomerRepository {
    addresses: AddressRepository,
}

impl CustomerRepository {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            addresses: AddressRepository::new(),
        }
    }

    /// Get one customer by ID, with the address list populated.
    #[must_use]
    pub fn get_by_id(&self, id: CustomerId) -> Customer {
        tracing::debug!(customer_id = %id, "retrieving customer");

        let mut customer = Customer::new(id);
        customer.first_name = Some("Frodo".to_owned());
        customer.last_name = Some("Baggins".to_owned());
        // Fixture address is structurally valid, so parsing cannot fail.
        customer.email = Email::parse("fbaggins@example.com").ok();
        customer.address_list = self.addresses.get_by_customer_id(id);
        customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id_echoes_id() {
        let repository = CustomerRepository::new();
        let customer = repository.get_by_id(CustomerId::new(42));
        assert_eq!(customer.id(), CustomerId::new(42));
    }

    #[test]
    fn test_retrieved_customer_is_valid() {
        let repository = CustomerRepository::new();
        let customer = repository.get_by_id(CustomerId::new(1));
        assert!(customer.is_valid());
        assert_eq!(customer.full_name(), "Frodo Baggins");
    }

    #[test]
    fn test_address_list_is_populated() {
        let repository = CustomerRepository::new();
        let customer = repository.get_by_id(CustomerId::new(42));

        assert!(!customer.address_list.is_empty());
        assert!(
            customer
                .address_list
                .iter()
                .all(|a| a.customer_id == CustomerId::new(42))
        );
    }

    #[test]
    fn test_each_call_builds_a_fresh_instance() {
        let repository = CustomerRepository::new();
        let first = repository.get_by_id(CustomerId::new(3));
        let mut second = repository.get_by_id(CustomerId::new(3));

        assert_eq!(first, second);
        second.first_name = Some("Bilbo".to_owned());
        assert_ne!(first, second);
    }
}
