//! Rental desk service — the six fleet operations frontends invoke.

use std::sync::{Mutex, MutexGuard, PoisonError};

use fleetdesk_domain::customer::Customer;
use fleetdesk_domain::error::FleetError;
use fleetdesk_domain::id::{CustomerId, VehicleId};
use fleetdesk_domain::store::FleetStore;
use fleetdesk_domain::vehicle::Vehicle;

/// Application service wrapping the [`FleetStore`].
///
/// Every operation locks the store for its whole duration, so the
/// read-then-write sequences inside rent/return and the duplicate checks
/// inside the add operations stay atomic even when the desk is shared
/// between callers. Listing operations return owned snapshots; the lock is
/// released before the caller renders anything.
pub struct RentalDesk {
    store: Mutex<FleetStore>,
}

impl RentalDesk {
    /// Create a desk over an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, FleetStore> {
        // No operation panics while holding the lock, so a poisoned mutex
        // still holds consistent data.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a vehicle to the fleet, available for rent.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::DuplicateId`] when the id is already in use.
    #[tracing::instrument(skip(self))]
    pub fn add_vehicle(&self, id: VehicleId, brand: &str, model: &str) -> Result<(), FleetError> {
        let result = self.store().add_vehicle(Vehicle::new(id, brand, model));
        match &result {
            Ok(()) => tracing::info!(%id, brand, model, "vehicle added"),
            Err(err) => tracing::warn!(%id, %err, "vehicle rejected"),
        }
        result
    }

    /// Add a customer to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::DuplicateId`] when the id is already in use.
    #[tracing::instrument(skip(self, name, license_number))]
    pub fn add_customer(
        &self,
        id: CustomerId,
        name: &str,
        license_number: &str,
    ) -> Result<(), FleetError> {
        let result = self
            .store()
            .add_customer(Customer::new(id, name, license_number));
        match &result {
            Ok(()) => tracing::info!(%id, "customer added"),
            Err(err) => tracing::warn!(%id, %err, "customer rejected"),
        }
        result
    }

    /// Check a vehicle out to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::OperationNotPossible`] when the vehicle is
    /// unknown or unavailable, or the customer is unknown.
    #[tracing::instrument(skip(self))]
    pub fn rent(&self, vehicle_id: VehicleId, customer_id: CustomerId) -> Result<(), FleetError> {
        let result = self.store().rent(vehicle_id, customer_id);
        match &result {
            Ok(()) => tracing::info!(%vehicle_id, %customer_id, "vehicle rented"),
            Err(err) => tracing::warn!(%vehicle_id, %customer_id, %err, "rent rejected"),
        }
        result
    }

    /// Check a vehicle back in.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::OperationNotPossible`] when the vehicle is
    /// unknown or not currently rented.
    #[tracing::instrument(skip(self))]
    pub fn return_vehicle(&self, vehicle_id: VehicleId) -> Result<(), FleetError> {
        let result = self.store().return_vehicle(vehicle_id);
        match &result {
            Ok(()) => tracing::info!(%vehicle_id, "vehicle returned"),
            Err(err) => tracing::warn!(%vehicle_id, %err, "return rejected"),
        }
        result
    }

    /// Snapshot of the vehicles currently available for rent, in the order
    /// they were added.
    #[must_use]
    pub fn available_vehicles(&self) -> Vec<Vehicle> {
        self.store()
            .available_vehicles()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Snapshot of the full fleet, in the order vehicles were added.
    #[must_use]
    pub fn all_vehicles(&self) -> Vec<Vehicle> {
        self.store().all_vehicles().into_iter().cloned().collect()
    }

    /// Snapshot of the customer roster, in the order customers were added.
    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.store().customers().into_iter().cloned().collect()
    }
}

impl Default for RentalDesk {
    fn default() -> Self {
        Self {
            store: Mutex::new(FleetStore::new()),
        }
    }
}
