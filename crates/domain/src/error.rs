//! Domain error types.
//!
//! The fleet knows exactly two failure modes: an add operation reusing an
//! identifier, and a rent/return rejected by the current state of the fleet.
//! Both are returned as values and never unwind past the operation boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The collection an add operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    Vehicles,
    Customers,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vehicles => f.write_str("vehicle"),
            Self::Customers => f.write_str("customer"),
        }
    }
}

/// Errors returned by [`FleetStore`](crate::store::FleetStore) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    /// An add operation supplied an identifier already in use within the
    /// targeted collection.
    #[error("{collection} id {id} already exists")]
    DuplicateId {
        collection: Collection,
        id: i32,
    },

    /// A rent or return was rejected by the current fleet state.
    ///
    /// Deliberately coarse: an unknown vehicle, a vehicle in the wrong
    /// availability state, and an unknown customer all collapse into this
    /// one variant. Callers that need to word a report can only list the
    /// possible causes.
    #[error("operation not possible in the current fleet state")]
    OperationNotPossible,
}
