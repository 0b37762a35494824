use crate::logistics::LogisticsError;
use crate::logistics_actor::FleetSnapshot;
use crate::model::{Order, OrderDraft, OrderId, Vehicle};
use async_trait::async_trait;

/// Async surface of the logistics core.
///
/// Implemented by [`LogisticsClient`](crate::clients::LogisticsClient);
/// callers that only need these operations can stay generic over it.
#[async_trait]
pub trait LogisticsApi: Send + Sync {
    /// Registers a new available vehicle.
    async fn register_vehicle(&self, vehicle_no: u32) -> Result<(), LogisticsError>;

    /// Appends a vehicle exactly as given.
    async fn add_vehicle(&self, vehicle: Vehicle) -> Result<(), LogisticsError>;

    /// Places a caller-built order on the first available vehicle.
    async fn place_order(&self, order: Order) -> Result<OrderId, LogisticsError>;

    /// Drafts an order with an unused identifier and places it.
    async fn submit_order(&self, draft: OrderDraft) -> Result<OrderId, LogisticsError>;

    /// Status text of one placed order.
    async fn track_order(&self, order_id: OrderId) -> Result<String, LogisticsError>;

    /// Status text of every placed order, oldest first.
    async fn track_all(&self) -> Result<Vec<String>, LogisticsError>;

    /// Copy of the current fleet and orders.
    async fn snapshot(&self) -> Result<FleetSnapshot, LogisticsError>;
}
