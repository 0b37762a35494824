//! Order placement and tracking over an in-memory fleet.
//!
//! [`LogisticSystem`] is synchronous and expects one caller at a time. For
//! concurrent callers, hand it to the [`logistics_actor`](crate::logistics_actor).

pub mod error;
pub mod ids;
pub mod system;

pub use error::*;
pub use ids::*;
pub use system::*;
