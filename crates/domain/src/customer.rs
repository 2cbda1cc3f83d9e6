//! Customer — a person eligible to rent vehicles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::CustomerId;

/// A customer on the roster. Immutable after creation; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub license_number: String,
}

impl Customer {
    /// Create a new customer with the given roster details.
    #[must_use]
    pub fn new(id: CustomerId, name: impl Into<String>, license_number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            license_number: license_number.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | License: {}",
            self.id, self.name, self.license_number
        )
    }
}
