//! Error types for placing and tracking orders.

use crate::framework::FrameworkError;
use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during logistics operations.
///
/// The domain variants are recoverable: the caller can register more
/// vehicles and retry, ask for another identifier, or draft with a
/// different identifier source.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogisticsError {
    /// Every registered vehicle is already busy (or none is registered).
    #[error("There is no available vehicle to deliver an order.")]
    NoAvailableVehicle,

    /// No placed order carries the requested identifier.
    #[error("No such order: {0}")]
    OrderNotFound(OrderId),

    /// The identifier source kept returning identifiers of placed orders.
    #[error("No unused order identifier after {attempts} draws")]
    IdentifierExhausted { attempts: usize },

    /// An error occurred while communicating with the logistics actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LogisticsError {
    fn from(e: FrameworkError) -> Self {
        LogisticsError::ActorCommunicationError(e.to_string())
    }
}
