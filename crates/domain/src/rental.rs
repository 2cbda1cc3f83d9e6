//! Rental — one transaction from check-out to check-in.

use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, VehicleId};
use crate::time::Timestamp;

/// A record of one rental transaction.
///
/// References the vehicle and customer by identifier rather than embedding
/// copies, so the fleet collections stay the single source of truth. The
/// record is open while `returned_at` is `None` and is closed (not deleted)
/// by the return operation; `returned_at` is set at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub vehicle_id: VehicleId,
    pub customer_id: CustomerId,
    pub rented_at: Timestamp,
    pub returned_at: Option<Timestamp>,
}

impl Rental {
    /// Open a new rental stamped with the current time.
    #[must_use]
    pub fn open(vehicle_id: VehicleId, customer_id: CustomerId) -> Self {
        Self {
            vehicle_id,
            customer_id,
            rented_at: crate::time::now(),
            returned_at: None,
        }
    }

    /// Whether the vehicle is still out.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Close the rental, stamping the check-in time.
    ///
    /// Only the store calls this, and only on open records.
    pub(crate) fn close(&mut self) {
        self.returned_at = Some(crate::time::now());
    }
}
