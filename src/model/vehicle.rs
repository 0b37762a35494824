use serde::{Deserialize, Serialize};

/// A delivery vehicle and whether it can take another order.
///
/// `vehicle_no` is chosen by the caller and is not checked for uniqueness.
/// Only [`LogisticSystem::place_order`](crate::logistics::LogisticSystem::place_order)
/// flips `is_available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_no: u32,
    pub is_available: bool,
}

impl Vehicle {
    /// Creates a new Vehicle.
    ///
    /// # Arguments
    /// * `vehicle_no` - Caller-supplied vehicle number
    /// * `is_available` - Whether the vehicle can be assigned right away
    pub fn new(vehicle_no: u32, is_available: bool) -> Self {
        Self {
            vehicle_no,
            is_available,
        }
    }
}
