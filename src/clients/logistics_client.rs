//! # Logistics Client
//!
//! Provides a high‑level API for interacting with the logistics actor.
//! It wraps a `Mailbox<LogisticsRequest>` and flattens transport failures
//! into [`LogisticsError::ActorCommunicationError`].
use crate::clients::LogisticsApi;
use crate::framework::Mailbox;
use crate::logistics::LogisticsError;
use crate::logistics_actor::{FleetSnapshot, LogisticsRequest};
use crate::model::{Order, OrderDraft, OrderId, Vehicle};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the logistics actor.
///
/// Cheap to clone; every clone talks to the same actor.
#[derive(Clone)]
pub struct LogisticsClient {
    inner: Mailbox<LogisticsRequest>,
}

impl LogisticsClient {
    pub fn new(inner: Mailbox<LogisticsRequest>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LogisticsApi for LogisticsClient {
    #[instrument(skip(self))]
    async fn register_vehicle(&self, vehicle_no: u32) -> Result<(), LogisticsError> {
        debug!("Sending request");
        Ok(self
            .inner
            .request(|respond_to| LogisticsRequest::RegisterVehicle { vehicle_no, respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    async fn add_vehicle(&self, vehicle: Vehicle) -> Result<(), LogisticsError> {
        debug!("Sending request");
        Ok(self
            .inner
            .request(|respond_to| LogisticsRequest::AddVehicle { vehicle, respond_to })
            .await?)
    }

    #[instrument(skip(self, order), fields(order_id = %order.order_id()))]
    async fn place_order(&self, order: Order) -> Result<OrderId, LogisticsError> {
        debug!(?order, "place_order called");
        info!("Sending place_order to actor");
        self.inner
            .request(|respond_to| LogisticsRequest::PlaceOrder { order, respond_to })
            .await?
    }

    #[instrument(skip(self, draft), fields(user_name = %draft.user_name))]
    async fn submit_order(&self, draft: OrderDraft) -> Result<OrderId, LogisticsError> {
        debug!(?draft, "submit_order called");
        info!("Sending submit_order to actor");
        self.inner
            .request(|respond_to| LogisticsRequest::SubmitOrder { draft, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    async fn track_order(&self, order_id: OrderId) -> Result<String, LogisticsError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| LogisticsRequest::TrackOrder { order_id, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    async fn track_all(&self) -> Result<Vec<String>, LogisticsError> {
        debug!("Sending request");
        Ok(self
            .inner
            .request(|respond_to| LogisticsRequest::TrackAll { respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    async fn snapshot(&self) -> Result<FleetSnapshot, LogisticsError> {
        debug!("Sending request");
        Ok(self
            .inner
            .request(|respond_to| LogisticsRequest::Snapshot { respond_to })
            .await?)
    }
}
