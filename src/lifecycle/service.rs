use crate::clients::LogisticsClient;
use crate::lifecycle::SystemConfig;
use crate::logistics::LogisticSystem;
use crate::logistics_actor;
use crate::model::Vehicle;
use tracing::{error, info};

/// Runs a [`LogisticSystem`] behind its actor.
///
/// `LogisticsService` is responsible for:
/// - **Construction**: building the fleet and identifier source from [`SystemConfig`]
/// - **Lifecycle Management**: spawning the actor task and stopping it again
///
/// # Example
///
/// ```ignore
/// let service = LogisticsService::new(&SystemConfig::default());
///
/// service.client.register_vehicle(1).await?;
/// let order_id = service.client.submit_order(draft).await?;
/// println!("{}", service.client.track_order(order_id).await?);
///
/// let system = service.shutdown().await?;
/// ```
pub struct LogisticsService {
    /// Client for interacting with the logistics actor
    pub client: LogisticsClient,

    /// Task running the actor; yields the final system on shutdown
    handle: tokio::task::JoinHandle<LogisticSystem>,
}

impl LogisticsService {
    /// Builds the system from `config` and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let vehicles = (1..=config.fleet_size)
            .map(|vehicle_no| Vehicle::new(vehicle_no, true))
            .collect();
        let ids = config.id_strategy.build(config.id_seed);
        Self::with_system(config.mailbox_capacity, LogisticSystem::with_id_source(vehicles, ids))
    }

    /// Spawns an actor around an existing system.
    pub fn with_system(mailbox_capacity: usize, system: LogisticSystem) -> Self {
        info!(
            mailbox_capacity,
            fleet = system.vehicles().len(),
            "Starting logistics service"
        );
        let (actor, client) = logistics_actor::new(mailbox_capacity, system);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Stops the actor and returns the final state of the system.
    ///
    /// The actor exits once every client is gone, so clones of
    /// [`client`](Self::client) handed out earlier must be dropped first or
    /// this call waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(system)` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<LogisticSystem, String> {
        info!("Shutting down logistics service...");
        drop(self.client);

        match self.handle.await {
            Ok(system) => {
                info!(orders = system.orders().len(), "Shutdown complete.");
                Ok(system)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
