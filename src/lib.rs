//! # Logistics Tracker
//!
//! > **Register vehicles, place orders, track them.**
//!
//! An in-memory order-logistics core: delivery vehicles with an availability
//! flag, orders made of priced items bound for a city's post office, and a
//! [`LogisticSystem`](logistics::LogisticSystem) that matches each order to
//! the first free vehicle.
//!
//! ## 🏗️ Design
//!
//! ### 1. A Synchronous Core
//! [`LogisticSystem`](logistics::LogisticSystem) is a plain struct with
//! `&mut self` operations. It is the whole domain, and it is all a
//! single-threaded caller needs.
//!
//! ### 2. Type-Safe Error Handling
//! Failures the caller is expected to handle (`NoAvailableVehicle`,
//! `OrderNotFound`) are variants of [`LogisticsError`](logistics::LogisticsError),
//! returned as values, never panics.
//!
//! ### 3. Injected Identifiers
//! Orders draw identifiers from an [`OrderIdSource`](logistics::OrderIdSource),
//! random by default, seeded or sequential in tests.
//!
//! ### 4. Concurrency Model
//! For concurrent callers the system runs inside one Tokio task
//! ([`logistics_actor`]). Requests are processed one at a time, so a placement
//! (pick vehicle, flip availability, store order) is never interleaved with
//! another.
//!
//! ### 5. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - Items, vehicles, locations, orders and the cart
//! - [`logistics`] - The placement/tracking core, errors and identifier sources
//! - [`framework`] - The small actor engine (event loop, mailbox, mocks)
//! - [`logistics_actor`] - The request enum served by the actor
//! - [`clients`] - [`LogisticsApi`](clients::LogisticsApi) and its client
//! - [`lifecycle`] - Service startup/shutdown, configuration, tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use logistics_tracker::logistics::{LogisticSystem, SequentialOrderIds};
//! use logistics_tracker::model::{Item, Order, Vehicle};
//!
//! let mut ids = SequentialOrderIds::new();
//! let mut system = LogisticSystem::new(vec![Vehicle::new(1, true)]);
//!
//! let items = vec![Item::new("book", 110.0), Item::new("chupachups", 44.0)];
//! let order = Order::new(&mut ids, "Oleg", "Lviv", 53, items);
//! let order_id = system.place_order(order).unwrap();
//!
//! assert_eq!(
//!     system.track_order(order_id).unwrap(),
//!     "Your order #100000000 is sent to Lviv. Total price 154 UAH."
//! );
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod logistics;
pub mod logistics_actor;
pub mod model;
