//! # fleetdesk-domain
//!
//! Pure domain model for the fleetdesk rental management system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Vehicles** (rentable cars with an availability flag)
//! - Define **Customers** (people eligible to rent, keyed by license number)
//! - Define **Rentals** (one transaction from check-out to check-in)
//! - Define the **`FleetStore`** holding all three collections and enforcing
//!   identifier-uniqueness and availability invariants
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the presentation layer, or
//! external IO crates. Frontends talk to it through the `app` crate.

pub mod error;
pub mod id;
pub mod time;

pub mod customer;
pub mod rental;
pub mod store;
pub mod vehicle;
