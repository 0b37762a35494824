//! Pure data structures for the logistics domain.
//!
//! These types carry no behaviour beyond construction, formatting and the
//! one-time vehicle assignment on [`Order`]. All coordination lives in
//! [`LogisticSystem`](crate::logistics::LogisticSystem).

pub mod cart;
pub mod item;
pub mod location;
pub mod order;
pub mod vehicle;

pub use cart::*;
pub use item::*;
pub use location::*;
pub use order::*;
pub use vehicle::*;
