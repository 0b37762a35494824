//! [`ActorState`] implementation for [`LogisticSystem`].
//!
//! Each request is applied to the system in full before the next one is
//! read, so selecting a vehicle and flipping its availability can never
//! interleave with another placement.

use crate::framework::{ActorState, Reply};
use crate::logistics::{LogisticSystem, LogisticsError};
use crate::model::{Order, OrderDraft, OrderId, Vehicle};
use serde::{Deserialize, Serialize};

/// Reply carrying a domain result.
pub type Response<T> = Reply<Result<T, LogisticsError>>;

/// Point-in-time copy of the fleet and the placed orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub vehicles: Vec<Vehicle>,
    pub orders: Vec<Order>,
}

/// Messages accepted by the logistics actor.
#[derive(Debug)]
pub enum LogisticsRequest {
    /// Appends a new available vehicle.
    RegisterVehicle { vehicle_no: u32, respond_to: Reply<()> },
    /// Appends a vehicle as given.
    AddVehicle { vehicle: Vehicle, respond_to: Reply<()> },
    /// Places an order built by the caller.
    PlaceOrder { order: Order, respond_to: Response<OrderId> },
    /// Drafts an order with a fresh identifier, then places it.
    SubmitOrder { draft: OrderDraft, respond_to: Response<OrderId> },
    TrackOrder { order_id: OrderId, respond_to: Response<String> },
    TrackAll { respond_to: Reply<Vec<String>> },
    Snapshot { respond_to: Reply<FleetSnapshot> },
}

impl ActorState for LogisticSystem {
    type Request = LogisticsRequest;

    fn handle(&mut self, request: LogisticsRequest) {
        match request {
            LogisticsRequest::RegisterVehicle { vehicle_no, respond_to } => {
                self.register_vehicle(vehicle_no);
                let _ = respond_to.send(());
            }
            LogisticsRequest::AddVehicle { vehicle, respond_to } => {
                self.add_vehicle(vehicle);
                let _ = respond_to.send(());
            }
            LogisticsRequest::PlaceOrder { order, respond_to } => {
                let _ = respond_to.send(self.place_order(order));
            }
            LogisticsRequest::SubmitOrder { draft, respond_to } => {
                let result = self
                    .draft_order(draft.user_name, draft.city, draft.postoffice, draft.items)
                    .and_then(|order| self.place_order(order));
                let _ = respond_to.send(result);
            }
            LogisticsRequest::TrackOrder { order_id, respond_to } => {
                let _ = respond_to.send(self.track_order(order_id));
            }
            LogisticsRequest::TrackAll { respond_to } => {
                let _ = respond_to.send(self.track_all());
            }
            LogisticsRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(FleetSnapshot {
                    vehicles: self.vehicles().to_vec(),
                    orders: self.orders().to_vec(),
                });
            }
        }
    }

    fn size(&self) -> usize {
        self.orders().len()
    }
}
