//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter
//! filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the number of placed orders
//! - **Placement**: the chosen vehicle, or a warning when the fleet is busy
//! - **Client Calls**: one span per [`LogisticsApi`](crate::clients::LogisticsApi) call
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads (orders, drafts, requests)
//! RUST_LOG=debug cargo run
//!
//! # Only the placement core
//! RUST_LOG=logistics_tracker::logistics=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run looks like:
//!
//! ```text
//! INFO Actor started state_type="LogisticSystem"
//! INFO Vehicle added vehicle_no=1 is_available=true
//! INFO submit_order{user_name=Oleg}: Sending submit_order to actor
//! INFO place_order{order_id=100000000}: Order placed vehicle_no=1 size=1
//! WARN place_order{order_id=100000001}: No available vehicle fleet=1
//! INFO Shutdown state_type="LogisticSystem" size=1
//! ```

/// Initializes the tracing/logging infrastructure. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
