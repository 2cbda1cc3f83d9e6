//! Vehicle — a rentable car with an availability flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::VehicleId;

/// A car in the fleet.
///
/// `brand` and `model` are immutable after creation; `available` is flipped
/// only by the rent and return operations on the
/// [`FleetStore`](crate::store::FleetStore). Vehicles are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub available: bool,
}

impl Vehicle {
    /// Create a new vehicle, available for rent.
    ///
    /// Brand and model are stored as given, including empty strings. Input
    /// hygiene (trimming, emptiness checks) belongs to the presentation
    /// layer collecting the fields, not here.
    #[must_use]
    pub fn new(id: VehicleId, brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id,
            brand: brand.into(),
            model: model.into(),
            available: true,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Rented" };
        write!(
            f,
            "ID: {} | {} {} | Status: {status}",
            self.id, self.brand, self.model
        )
    }
}
