//! Serialized access to a [`LogisticSystem`] for concurrent callers.

pub mod entity;

pub use entity::*;

use crate::clients::LogisticsClient;
use crate::framework::Actor;
use crate::logistics::LogisticSystem;

/// Creates the logistics actor around `system` and its client.
///
/// The actor does nothing until [`Actor::run`] is spawned.
pub fn new(capacity: usize, system: LogisticSystem) -> (Actor<LogisticSystem>, LogisticsClient) {
    let (actor, mailbox) = Actor::new(capacity, system);
    (actor, LogisticsClient::new(mailbox))
}
