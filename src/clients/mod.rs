//! Type-safe wrappers around [`Mailbox`](crate::framework::Mailbox).

pub mod api;
pub mod logistics_client;

pub use api::*;
pub use logistics_client::*;
