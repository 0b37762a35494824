//! Represents a customer order on its way to a post office.
//!
//! The identifier and the total price are fixed when the order is built.
//! The only later change is the vehicle assignment made by
//! [`LogisticSystem::place_order`](crate::logistics::LogisticSystem::place_order).

use crate::logistics::OrderIdSource;
use crate::model::{Item, Location, Vehicle};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lowest identifier an order can receive.
pub const MIN_ORDER_ID: u32 = 100_000_000;
/// Highest identifier an order can receive.
pub const MAX_ORDER_ID: u32 = 999_999_999;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    user_name: String,
    location: Location,
    items: Vec<Item>,
    total_price: f64,
    vehicle: Option<Vehicle>,
}

impl Order {
    /// Creates a new Order with an identifier drawn from `ids`.
    ///
    /// # Arguments
    /// * `ids` - Identifier source (random, sequential, ...)
    /// * `user_name` - Name of the person placing the order
    /// * `city` - Destination city
    /// * `postoffice` - Destination post office
    /// * `items` - Items of the order
    ///
    /// # Notes
    /// The identifier is not checked against other orders. Use
    /// [`LogisticSystem::draft_order`](crate::logistics::LogisticSystem::draft_order)
    /// when uniqueness matters.
    pub fn new(
        ids: &mut (impl OrderIdSource + ?Sized),
        user_name: impl Into<String>,
        city: impl Into<String>,
        postoffice: u32,
        items: Vec<Item>,
    ) -> Self {
        Self::with_id(ids.next_id(), user_name, city, postoffice, items)
    }

    /// Creates a new Order with a known identifier.
    pub fn with_id(
        order_id: OrderId,
        user_name: impl Into<String>,
        city: impl Into<String>,
        postoffice: u32,
        items: Vec<Item>,
    ) -> Self {
        let total_price = items.iter().map(|item| item.price).sum();
        Self {
            order_id,
            user_name: user_name.into(),
            location: Location::new(city, postoffice),
            items,
            total_price,
            vehicle: None,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of the item prices at creation time.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// The vehicle delivering this order, if it has been placed.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Returns the number of items in the order.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Binds a vehicle to the order, replacing any previous one.
    ///
    /// Availability is not checked here; the caller owns that contract.
    pub fn assign_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }
}

/// Payload for drafting and placing an order through the logistics actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub user_name: String,
    pub city: String,
    pub postoffice: u32,
    pub items: Vec<Item>,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Your order number is {}", self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logistics::{RandomOrderIds, SequentialOrderIds};
    use proptest::prelude::*;

    fn oleg_items() -> Vec<Item> {
        vec![Item::new("book", 110.0), Item::new("chupachups", 44.0)]
    }

    #[test]
    fn test_order_totals_and_location() {
        let mut ids = SequentialOrderIds::new();
        let order = Order::new(&mut ids, "Oleg", "Lviv", 53, oleg_items());

        assert_eq!(order.total_price(), 154.0);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.user_name(), "Oleg");
        assert_eq!(order.location(), &Location::new("Lviv", 53));
        assert!(order.vehicle().is_none());
    }

    #[test]
    fn test_empty_order() {
        let mut ids = SequentialOrderIds::new();
        let order = Order::new(&mut ids, "Ira", "Kyiv", 1, Vec::new());

        assert_eq!(order.total_price(), 0.0);
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_description_contains_id() {
        let order = Order::with_id(OrderId(123_456_789), "Oleg", "Lviv", 53, oleg_items());
        assert_eq!(order.to_string(), "Your order number is 123456789");
    }

    #[test]
    fn test_assign_vehicle_overwrites() {
        let mut order = Order::with_id(OrderId(123_456_789), "Oleg", "Lviv", 53, oleg_items());
        order.assign_vehicle(Vehicle::new(1, false));
        order.assign_vehicle(Vehicle::new(2, false));

        assert_eq!(order.vehicle().map(|v| v.vehicle_no), Some(2));
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_item_prices(prices in prop::collection::vec(0u32..100_000, 0..24)) {
            // Whole-number prices keep the f64 sum exact in any order
            let items: Vec<Item> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| Item::new(format!("item_{i}"), f64::from(*price)))
                .collect();
            let expected: f64 = prices.iter().map(|price| f64::from(*price)).sum();

            let mut ids = SequentialOrderIds::new();
            let order = Order::new(&mut ids, "Oleg", "Lviv", 53, items);

            prop_assert_eq!(order.total_price(), expected);
            prop_assert_eq!(order.item_count(), prices.len());
        }

        #[test]
        fn prop_random_ids_stay_in_range_for_any_seed(seed in any::<u64>()) {
            let mut ids = RandomOrderIds::seeded(seed);
            let order = Order::new(&mut ids, "Oleg", "Lviv", 53, Vec::new());

            prop_assert!((MIN_ORDER_ID..=MAX_ORDER_ID).contains(&order.order_id().0));
        }
    }
}
