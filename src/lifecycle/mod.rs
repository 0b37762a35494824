//! # System Lifecycle
//!
//! Startup and shutdown of the logistics actor, configuration loading and
//! tracing setup.
//!
//! # Main Components
//!
//! - [`LogisticsService`] - Spawns the actor and owns its task handle
//! - [`SystemConfig`] - Settings read from `LOGISTICS_*` environment variables
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod service;
pub mod tracing;

pub use config::*;
pub use service::*;
pub use self::tracing::*;
