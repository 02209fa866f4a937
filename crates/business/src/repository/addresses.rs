//! Address repository backed by fixture data.

use brightcart_core::{AddressId, CustomerId};

use crate::models::{Address, AddressKind};

/// Repository for address retrieval.
#[derive(Debug, Default)]
pub struct AddressRepository;

impl AddressRepository {
    /// Create a new address repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get one address by its ID.
    #[must_use]
    pub fn get_by_id(&self, id: AddressId) -> Address {
        tracing::debug!(address_id = %id, "retrieving address");

        let mut address = Address::new(id);
        address.customer_id = CustomerId::new(1);
        address.kind = AddressKind::Shipping;
        address.street_line1 = Some("Bag End".to_owned());
        address.street_line2 = Some("Bagshot Row".to_owned());
        address.city = Some("Hobbiton".to_owned());
        address.region = Some("Westfarthing".to_owned());
        address.postal_code = Some("144".to_owned());
        address.country = Some("The Shire".to_owned());
        address
    }

    /// Get all addresses on file for a customer.
    ///
    /// Every returned address carries the requested `customer_id`.
    #[must_use]
    pub fn get_by_customer_id(&self, customer_id: CustomerId) -> Vec<Address> {
        tracing::debug!(customer_id = %customer_id, "retrieving addresses for customer");

        let mut shipping = self.get_by_id(AddressId::new(1));
        shipping.customer_id = customer_id;

        let mut billing = Address::new(AddressId::new(2));
        billing.customer_id = customer_id;
        billing.kind = AddressKind::Billing;
        billing.street_line1 = Some("Green Dragon".to_owned());
        billing.city = Some("Bywater".to_owned());
        billing.region = Some("Westfarthing".to_owned());
        billing.postal_code = Some("146".to_owned());
        billing.country = Some("The Shire".to_owned());

        vec![shipping, billing]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id_echoes_id() {
        let repository = AddressRepository::new();
        let address = repository.get_by_id(AddressId::new(9));
        assert_eq!(address.id(), AddressId::new(9));
        assert!(address.is_valid());
    }

    #[test]
    fn test_get_by_customer_id_tags_every_address() {
        let repository = AddressRepository::new();
        let addresses = repository.get_by_customer_id(CustomerId::new(42));

        assert_eq!(addresses.len(), 2);
        assert!(
            addresses
                .iter()
                .all(|a| a.customer_id == CustomerId::new(42))
        );
        assert!(addresses.iter().all(Address::is_valid));
    }

    #[test]
    fn test_one_shipping_one_billing() {
        let repository = AddressRepository::new();
        let addresses = repository.get_by_customer_id(CustomerId::new(1));

        let kinds: Vec<_> = addresses.iter().map(|a| a.kind).collect();
        assert!(kinds.contains(&AddressKind::Shipping));
        assert!(kinds.contains(&AddressKind::Billing));
    }
}
