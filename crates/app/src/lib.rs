//! # fleetdesk-app
//!
//! Application layer — the command interface between the domain model and
//! whatever frontend drives it (interactive shell, GUI, test harness).
//!
//! ## Responsibilities
//! - Expose the six fleet operations as the [`RentalDesk`] use-case struct:
//!   add vehicle, add customer, rent, return, and the three listings
//! - Serialize access to the store: mutating operations read-then-write the
//!   shared collections, so the desk guards them with a single lock
//! - Hand out owned snapshots for display so callers never hold the lock
//!   while rendering
//! - Instrument every operation with `tracing`
//!
//! ## Dependency rule
//! Depends on `fleetdesk-domain` only. Never imports a frontend crate;
//! frontends depend on *this* crate, not the reverse.
//!
//! [`RentalDesk`]: services::rental_desk::RentalDesk

pub mod services;
