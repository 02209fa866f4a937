//! Address domain type.

use core::fmt;

use serde::{Deserialize, Serialize};

use brightcart_core::{AddressId, CustomerId};

/// Whether an address is used for shipping or billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    #[default]
    Shipping,
    Billing,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shipping => write!(f, "shipping"),
            Self::Billing => write!(f, "billing"),
        }
    }
}

/// A postal address belonging to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Unique address ID.
    id: AddressId,
    /// Customer this address belongs to.
    pub customer_id: CustomerId,
    /// Shipping or billing.
    pub kind: AddressKind,
    /// First street line.
    pub street_line1: Option<String>,
    /// Second street line (apartment, suite, ...).
    pub street_line2: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State, province, or other region.
    pub region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

impl Address {
    /// Create a new address with the given identity and no other data.
    #[must_use]
    pub const fn new(id: AddressId) -> Self {
        Self {
            id,
            customer_id: CustomerId::new(0),
            kind: AddressKind::Shipping,
            street_line1: None,
            street_line2: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
        }
    }

    /// The address's identity.
    #[must_use]
    pub const fn id(&self) -> AddressId {
        self.id
    }

    /// Whether this address satisfies its business rules: a first street
    /// line, a city, and a postal code are required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.street_line1.is_some() && self.city.is_some() && self.postal_code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        let mut address = Address::new(AddressId::new(1));
        address.customer_id = CustomerId::new(7);
        address.street_line1 = Some("Bag End".to_owned());
        address.street_line2 = Some("Bagshot Row".to_owned());
        address.city = Some("Hobbiton".to_owned());
        address.region = Some("Westfarthing".to_owned());
        address.postal_code = Some("144".to_owned());
        address.country = Some("The Shire".to_owned());
        address
    }

    #[test]
    fn test_valid_address() {
        assert!(address().is_valid());
    }

    #[test]
    fn test_invalid_without_street_line1() {
        let mut address = address();
        address.street_line1 = None;
        assert!(!address.is_valid());
    }

    #[test]
    fn test_invalid_without_city() {
        let mut address = address();
        address.city = None;
        assert!(!address.is_valid());
    }

    #[test]
    fn test_invalid_without_postal_code() {
        let mut address = address();
        address.postal_code = None;
        assert!(!address.is_valid());
    }

    #[test]
    fn test_kind_defaults_to_shipping() {
        assert_eq!(Address::new(AddressId::new(1)).kind, AddressKind::Shipping);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AddressKind::Billing.to_string(), "billing");
    }
}
