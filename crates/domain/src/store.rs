//! The fleet store — all mutation and query operations over the three
//! in-memory collections.
//!
//! Vehicles and customers live in maps keyed by identifier so lookups stay
//! O(1), with a separate insertion-order sequence per collection so listing
//! operations report in the order records were added. Rentals are an
//! append-only log; records are closed in place, never removed.
//!
//! Every operation is atomic: it either fully applies its state change or
//! makes none. Both failure paths return before any collection is touched.

use std::collections::HashMap;

use crate::customer::Customer;
use crate::error::{Collection, FleetError};
use crate::id::{CustomerId, VehicleId};
use crate::rental::Rental;
use crate::vehicle::Vehicle;

/// Owns the fleet, the customer roster, and the rental log.
///
/// Invariants enforced here:
/// - vehicle and customer identifiers are unique within their collection
/// - a vehicle is unavailable if and only if it has exactly one open rental
/// - a rental's `returned_at` transitions `None → Some` exactly once
#[derive(Debug, Default)]
pub struct FleetStore {
    vehicles: HashMap<VehicleId, Vehicle>,
    vehicle_order: Vec<VehicleId>,
    customers: HashMap<CustomerId, Customer>,
    customer_order: Vec<CustomerId>,
    rentals: Vec<Rental>,
}

impl FleetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle to the fleet.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::DuplicateId`] when a vehicle with the same id
    /// already exists; the fleet is left untouched.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), FleetError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(FleetError::DuplicateId {
                collection: Collection::Vehicles,
                id: vehicle.id.as_i32(),
            });
        }
        self.vehicle_order.push(vehicle.id);
        self.vehicles.insert(vehicle.id, vehicle);
        Ok(())
    }

    /// Add a customer to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::DuplicateId`] when a customer with the same id
    /// already exists; the roster is left untouched.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), FleetError> {
        if self.customers.contains_key(&customer.id) {
            return Err(FleetError::DuplicateId {
                collection: Collection::Customers,
                id: customer.id.as_i32(),
            });
        }
        self.customer_order.push(customer.id);
        self.customers.insert(customer.id, customer);
        Ok(())
    }

    /// All vehicles currently available for rent, in insertion order.
    #[must_use]
    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        self.all_vehicles()
            .into_iter()
            .filter(|vehicle| vehicle.available)
            .collect()
    }

    /// The full fleet, in insertion order.
    #[must_use]
    pub fn all_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicle_order
            .iter()
            .filter_map(|id| self.vehicles.get(id))
            .collect()
    }

    /// The customer roster, in insertion order.
    #[must_use]
    pub fn customers(&self) -> Vec<&Customer> {
        self.customer_order
            .iter()
            .filter_map(|id| self.customers.get(id))
            .collect()
    }

    /// The rental log, oldest first. Closed records stay in the log.
    #[must_use]
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Check a vehicle out to a customer.
    ///
    /// Marks the vehicle unavailable and opens a rental stamped with the
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::OperationNotPossible`] when the vehicle does
    /// not exist, is already rented, or the customer does not exist. The
    /// three causes are not distinguished, and no state changes on failure.
    pub fn rent(
        &mut self,
        vehicle_id: VehicleId,
        customer_id: CustomerId,
    ) -> Result<(), FleetError> {
        if !self.customers.contains_key(&customer_id) {
            return Err(FleetError::OperationNotPossible);
        }
        let vehicle = self
            .vehicles
            .get_mut(&vehicle_id)
            .filter(|vehicle| vehicle.available)
            .ok_or(FleetError::OperationNotPossible)?;

        vehicle.available = false;
        self.rentals.push(Rental::open(vehicle_id, customer_id));
        Ok(())
    }

    /// Check a vehicle back in.
    ///
    /// Marks the vehicle available again and closes its open rental,
    /// stamping the check-in time.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::OperationNotPossible`] when the vehicle does
    /// not exist or is not currently rented; no state changes on failure.
    pub fn return_vehicle(&mut self, vehicle_id: VehicleId) -> Result<(), FleetError> {
        let vehicle = self
            .vehicles
            .get_mut(&vehicle_id)
            .filter(|vehicle| !vehicle.available)
            .ok_or(FleetError::OperationNotPossible)?;

        vehicle.available = true;
        if let Some(rental) = self
            .rentals
            .iter_mut()
            .find(|rental| rental.vehicle_id == vehicle_id && rental.is_open())
        {
            rental.close();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i32, brand: &str, model: &str) -> Vehicle {
        Vehicle::new(VehicleId::new(id), brand, model)
    }

    fn customer(id: i32, name: &str, license: &str) -> Customer {
        Customer::new(CustomerId::new(id), name, license)
    }

    /// A store with one available vehicle (id 1) and one customer (id 1).
    fn fresh_store() -> FleetStore {
        let mut store = FleetStore::new();
        store.add_vehicle(vehicle(1, "Toyota", "Camry")).unwrap();
        store.add_customer(customer(1, "John Doe", "DL123456")).unwrap();
        store
    }

    #[test]
    fn should_add_vehicle_as_available() {
        let mut store = FleetStore::new();
        store.add_vehicle(vehicle(1, "Toyota", "Camry")).unwrap();

        let fleet = store.all_vehicles();
        assert_eq!(fleet.len(), 1);
        assert!(fleet[0].available);
    }

    #[test]
    fn should_reject_duplicate_vehicle_id_and_keep_original() {
        let mut store = FleetStore::new();
        store.add_vehicle(vehicle(1, "Toyota", "Camry")).unwrap();

        let result = store.add_vehicle(vehicle(1, "Honda", "Civic"));
        assert_eq!(
            result,
            Err(FleetError::DuplicateId {
                collection: Collection::Vehicles,
                id: 1,
            })
        );

        let fleet = store.all_vehicles();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0].brand, "Toyota");
    }

    #[test]
    fn should_reject_duplicate_customer_id_and_keep_original() {
        let mut store = FleetStore::new();
        store.add_customer(customer(1, "John Doe", "DL123456")).unwrap();

        let result = store.add_customer(customer(1, "Jane Smith", "DL789012"));
        assert_eq!(
            result,
            Err(FleetError::DuplicateId {
                collection: Collection::Customers,
                id: 1,
            })
        );

        let roster = store.customers();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "John Doe");
    }

    #[test]
    fn should_allow_same_id_in_different_collections() {
        let store = fresh_store();
        assert_eq!(store.all_vehicles().len(), 1);
        assert_eq!(store.customers().len(), 1);
    }

    #[test]
    fn should_list_vehicles_in_insertion_order() {
        let mut store = FleetStore::new();
        store.add_vehicle(vehicle(5, "Toyota", "Corolla")).unwrap();
        store.add_vehicle(vehicle(2, "Honda", "Civic")).unwrap();
        store.add_vehicle(vehicle(9, "Tesla", "Model 3")).unwrap();

        let ids: Vec<i32> = store
            .all_vehicles()
            .iter()
            .map(|vehicle| vehicle.id.as_i32())
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn should_list_customers_in_insertion_order() {
        let mut store = FleetStore::new();
        store.add_customer(customer(3, "Mike Johnson", "DL345678")).unwrap();
        store.add_customer(customer(1, "John Doe", "DL123456")).unwrap();

        let ids: Vec<i32> = store
            .customers()
            .iter()
            .map(|customer| customer.id.as_i32())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn should_rent_available_vehicle_to_known_customer() {
        let mut store = fresh_store();

        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();

        assert!(!store.all_vehicles()[0].available);
        assert_eq!(store.rentals().len(), 1);
        let rental = &store.rentals()[0];
        assert!(rental.is_open());
        assert_eq!(rental.vehicle_id, VehicleId::new(1));
        assert_eq!(rental.customer_id, CustomerId::new(1));
    }

    #[test]
    fn should_reject_second_rent_of_same_vehicle_without_state_change() {
        let mut store = fresh_store();
        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();

        let result = store.rent(VehicleId::new(1), CustomerId::new(1));
        assert_eq!(result, Err(FleetError::OperationNotPossible));

        assert!(!store.all_vehicles()[0].available);
        assert_eq!(store.rentals().len(), 1);
    }

    #[test]
    fn should_reject_rent_of_unknown_vehicle() {
        let mut store = fresh_store();

        let result = store.rent(VehicleId::new(99), CustomerId::new(1));
        assert_eq!(result, Err(FleetError::OperationNotPossible));
        assert!(store.rentals().is_empty());
    }

    #[test]
    fn should_reject_rent_by_unknown_customer_without_touching_vehicle() {
        let mut store = fresh_store();

        let result = store.rent(VehicleId::new(1), CustomerId::new(99));
        assert_eq!(result, Err(FleetError::OperationNotPossible));

        // The vehicle lookup must not have flipped anything.
        assert!(store.all_vehicles()[0].available);
        assert!(store.rentals().is_empty());
    }

    #[test]
    fn should_return_rented_vehicle_and_close_the_rental() {
        let mut store = fresh_store();
        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();

        store.return_vehicle(VehicleId::new(1)).unwrap();

        assert!(store.all_vehicles()[0].available);
        assert_eq!(store.rentals().len(), 1);
        let rental = &store.rentals()[0];
        assert!(!rental.is_open());
        assert!(rental.returned_at.unwrap() >= rental.rented_at);
    }

    #[test]
    fn should_reject_return_of_unknown_vehicle() {
        let mut store = fresh_store();

        let result = store.return_vehicle(VehicleId::new(99));
        assert_eq!(result, Err(FleetError::OperationNotPossible));
        assert!(store.all_vehicles()[0].available);
    }

    #[test]
    fn should_reject_return_of_vehicle_that_is_not_rented() {
        let mut store = fresh_store();

        let result = store.return_vehicle(VehicleId::new(1));
        assert_eq!(result, Err(FleetError::OperationNotPossible));
        assert!(store.rentals().is_empty());
    }

    #[test]
    fn should_close_only_the_open_rental_of_the_returned_vehicle() {
        let mut store = fresh_store();
        store.add_vehicle(vehicle(2, "Honda", "Civic")).unwrap();
        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();
        store.rent(VehicleId::new(2), CustomerId::new(1)).unwrap();

        store.return_vehicle(VehicleId::new(1)).unwrap();

        let rentals = store.rentals();
        assert_eq!(rentals.len(), 2);
        assert!(!rentals[0].is_open());
        assert!(rentals[1].is_open());
    }

    #[test]
    fn should_close_the_oldest_open_rental_across_a_rent_return_cycle() {
        let mut store = fresh_store();
        store.add_customer(customer(2, "Jane Smith", "DL789012")).unwrap();

        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();
        store.return_vehicle(VehicleId::new(1)).unwrap();
        store.rent(VehicleId::new(1), CustomerId::new(2)).unwrap();
        store.return_vehicle(VehicleId::new(1)).unwrap();

        let rentals = store.rentals();
        assert_eq!(rentals.len(), 2);
        assert!(rentals.iter().all(|rental| !rental.is_open()));
        assert_eq!(rentals[0].customer_id, CustomerId::new(1));
        assert_eq!(rentals[1].customer_id, CustomerId::new(2));
    }

    #[test]
    fn should_exclude_rented_vehicles_from_the_available_listing() {
        let mut store = fresh_store();
        store.add_vehicle(vehicle(2, "Honda", "Civic")).unwrap();
        store.rent(VehicleId::new(1), CustomerId::new(1)).unwrap();

        let available: Vec<i32> = store
            .available_vehicles()
            .iter()
            .map(|vehicle| vehicle.id.as_i32())
            .collect();
        assert_eq!(available, vec![2]);
        assert_eq!(store.all_vehicles().len(), 2);
    }
}
