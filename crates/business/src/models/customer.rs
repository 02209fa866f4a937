//! Customer domain type.

use serde::{Deserialize, Serialize};

use brightcart_core::{CustomerId, Email};

use super::Address;

/// A customer.
///
/// Identity is set at construction and never reassigned; everything else
/// is filled in afterwards, typically by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    id: CustomerId,
    /// Customer's given name.
    pub first_name: Option<String>,
    /// Customer's family name.
    pub last_name: Option<String>,
    /// Customer's email address.
    pub email: Option<Email>,
    /// Addresses on file for this customer. Never null; starts empty.
    pub address_list: Vec<Address>,
}

impl Customer {
    /// Create a new customer with the given identity and no other data.
    #[must_use]
    pub const fn new(id: CustomerId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            email: None,
            address_list: Vec::new(),
        }
    }

    /// The customer's identity.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Display name derived from the name parts.
    ///
    /// Both parts present gives `"First Last"`; a missing part leaves the
    /// other alone, with no stray separator.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => String::new(),
        }
    }

    /// Whether this customer satisfies its business rules: a family name
    /// and an email address are required.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.last_name.is_some() && self.email.is_some()
    }
}
