//! The placement and tracking core.

use crate::logistics::{IdStrategy, LogisticsError, OrderIdSource};
use crate::model::{Item, Order, OrderId, Vehicle};
use tracing::{debug, info, instrument, warn};

/// Draws allowed on top of one per placed order before drafting gives up.
pub const EXTRA_ID_DRAWS: usize = 16;

/// Owns the fleet and every order that was successfully placed.
///
/// # Placement
/// [`place_order`](Self::place_order) takes the first available vehicle in
/// registration order. Vehicle selection and order lookup are linear scans;
/// no index is kept.
///
/// # Identifiers
/// The system carries its own [`OrderIdSource`] for
/// [`draft_order`](Self::draft_order), the only path that guarantees an
/// identifier not already used by a placed order.
pub struct LogisticSystem {
    vehicles: Vec<Vehicle>,
    orders: Vec<Order>,
    ids: Box<dyn OrderIdSource + Send>,
}

impl LogisticSystem {
    /// Creates a system with the given fleet, no orders and random identifiers.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self::with_id_source(vehicles, IdStrategy::Random.build(None))
    }

    pub fn with_id_source(vehicles: Vec<Vehicle>, ids: Box<dyn OrderIdSource + Send>) -> Self {
        Self {
            vehicles,
            orders: Vec::new(),
            ids,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Placed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        info!(vehicle_no = vehicle.vehicle_no, is_available = vehicle.is_available, "Vehicle added");
        self.vehicles.push(vehicle);
    }

    /// Registers a new vehicle that is ready for work.
    pub fn register_vehicle(&mut self, vehicle_no: u32) {
        self.add_vehicle(Vehicle::new(vehicle_no, true));
    }

    /// Number of vehicles that can still take an order.
    pub fn available_vehicles(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_available).count()
    }

    /// Builds an order whose identifier is unused by any placed order.
    ///
    /// The order is not placed. At most `orders().len() + EXTRA_ID_DRAWS`
    /// identifiers are drawn, enough for a sequential source to step past
    /// every placed order.
    ///
    /// # Errors
    /// [`LogisticsError::IdentifierExhausted`] when every draw was taken.
    pub fn draft_order(
        &mut self,
        user_name: impl Into<String>,
        city: impl Into<String>,
        postoffice: u32,
        items: Vec<Item>,
    ) -> Result<Order, LogisticsError> {
        let attempts = self.orders.len() + EXTRA_ID_DRAWS;
        for _ in 0..attempts {
            let order_id = self.ids.next_id();
            if self.find_order(order_id).is_none() {
                return Ok(Order::with_id(order_id, user_name, city, postoffice, items));
            }
            debug!(%order_id, "Identifier already taken, drawing another");
        }
        warn!(attempts, "No unused identifier found");
        Err(LogisticsError::IdentifierExhausted { attempts })
    }

    /// Assigns the first available vehicle to `order` and stores it.
    ///
    /// # Errors
    /// [`LogisticsError::NoAvailableVehicle`] when no vehicle is free. The
    /// order is dropped and the fleet is left untouched.
    #[instrument(skip(self, order), fields(order_id = %order.order_id()))]
    pub fn place_order(&mut self, mut order: Order) -> Result<OrderId, LogisticsError> {
        debug!(?order, "place_order called");
        let Some(index) = self.vehicles.iter().position(|v| v.is_available) else {
            warn!(fleet = self.vehicles.len(), "No available vehicle");
            return Err(LogisticsError::NoAvailableVehicle);
        };

        let vehicle = &mut self.vehicles[index];
        vehicle.is_available = false;
        order.assign_vehicle(vehicle.clone());
        let vehicle_no = vehicle.vehicle_no;

        let order_id = order.order_id();
        self.orders.push(order);
        info!(vehicle_no, size = self.orders.len(), "Order placed");
        Ok(order_id)
    }

    /// First placed order with the given identifier.
    pub fn find_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id() == order_id)
    }

    /// Reports where an order is headed and what it costs.
    ///
    /// # Errors
    /// [`LogisticsError::OrderNotFound`] when no placed order matches.
    pub fn track_order(&self, order_id: OrderId) -> Result<String, LogisticsError> {
        let order = self.find_order(order_id).ok_or_else(|| {
            debug!(%order_id, "Order not found");
            LogisticsError::OrderNotFound(order_id)
        })?;
        Ok(status_line(order))
    }

    /// Status text of every placed order, in placement order.
    pub fn track_all(&self) -> Vec<String> {
        self.orders.iter().map(status_line).collect()
    }
}

impl Default for LogisticSystem {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for LogisticSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticSystem")
            .field("vehicles", &self.vehicles)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

fn status_line(order: &Order) -> String {
    format!(
        "Your order #{} is sent to {}. Total price {} UAH.",
        order.order_id(),
        order.location().city,
        order.total_price()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logistics::{RandomOrderIds, SequentialOrderIds};

    fn oleg_order(ids: &mut impl OrderIdSource) -> Order {
        let items = vec![Item::new("book", 110.0), Item::new("chupachups", 44.0)];
        Order::new(ids, "Oleg", "Lviv", 53, items)
    }

    #[test]
    fn test_place_and_track_order() {
        let mut ids = SequentialOrderIds::new();
        let mut system = LogisticSystem::new(vec![Vehicle::new(1, true)]);
        let order = oleg_order(&mut ids);
        let order_id = order.order_id();

        assert_eq!(system.place_order(order), Ok(order_id));
        assert!(!system.vehicles()[0].is_available);

        let placed = system.find_order(order_id).expect("order stored");
        assert_eq!(placed.vehicle(), Some(&Vehicle::new(1, false)));

        let status = system.track_order(order_id).unwrap();
        assert_eq!(status, format!("Your order #{order_id} is sent to Lviv. Total price 154 UAH."));
    }

    #[test]
    fn test_no_available_vehicle() {
        let mut ids = SequentialOrderIds::new();
        let mut system = LogisticSystem::new(vec![Vehicle::new(1, false)]);

        let result = system.place_order(oleg_order(&mut ids));

        assert_eq!(result, Err(LogisticsError::NoAvailableVehicle));
        assert!(system.orders().is_empty());
        assert_eq!(system.vehicles(), &[Vehicle::new(1, false)]);
    }

    #[test]
    fn test_empty_fleet_rejects_orders() {
        let mut ids = SequentialOrderIds::new();
        let mut system = LogisticSystem::default();

        assert_eq!(system.place_order(oleg_order(&mut ids)), Err(LogisticsError::NoAvailableVehicle));
        assert!(system.orders().is_empty());
    }

    #[test]
    fn test_single_vehicle_serves_one_order() {
        let mut ids = SequentialOrderIds::new();
        let mut system = LogisticSystem::new(vec![Vehicle::new(1, true)]);

        assert!(system.place_order(oleg_order(&mut ids)).is_ok());
        assert_eq!(system.place_order(oleg_order(&mut ids)), Err(LogisticsError::NoAvailableVehicle));
        assert_eq!(system.orders().len(), 1);
    }

    #[test]
    fn test_first_available_vehicle_wins() {
        let mut ids = SequentialOrderIds::new();
        let mut system = LogisticSystem::new(vec![
            Vehicle::new(7, false),
            Vehicle::new(3, true),
            Vehicle::new(5, true),
        ]);

        let first = system.place_order(oleg_order(&mut ids)).unwrap();
        let second = system.place_order(oleg_order(&mut ids)).unwrap();

        let vehicle_of = |id| system.find_order(id).and_then(|o| o.vehicle()).map(|v| v.vehicle_no);
        assert_eq!(vehicle_of(first), Some(3));
        assert_eq!(vehicle_of(second), Some(5));
        assert_eq!(system.available_vehicles(), 0);
        assert_eq!(
            system.orders().iter().map(Order::order_id).collect::<Vec<_>>(),
            vec![first, second]
        );
    }

    #[test]
    fn test_track_unknown_order() {
        let system = LogisticSystem::new(vec![Vehicle::new(1, true)]);
        let missing = OrderId(555_555_555);

        assert_eq!(system.track_order(missing), Err(LogisticsError::OrderNotFound(missing)));
    }

    #[test]
    fn test_unplaced_order_is_not_tracked() {
        let mut ids = RandomOrderIds::seeded(1);
        let system = LogisticSystem::new(vec![Vehicle::new(1, true)]);
        let order = oleg_order(&mut ids);

        assert!(system.track_order(order.order_id()).is_err());
    }

    #[test]
    fn test_duplicate_ids_track_first_match() {
        let mut system = LogisticSystem::new(vec![Vehicle::new(1, true), Vehicle::new(2, true)]);
        let id = OrderId(111_111_111);
        system.place_order(Order::with_id(id, "Oleg", "Lviv", 53, Vec::new())).unwrap();
        system.place_order(Order::with_id(id, "Ira", "Kyiv", 2, Vec::new())).unwrap();

        let status = system.track_order(id).unwrap();
        assert!(status.contains("Lviv"));
        assert_eq!(system.track_all().len(), 2);
    }

    #[test]
    fn test_draft_order_skips_taken_ids() {
        let mut system = LogisticSystem::with_id_source(
            vec![Vehicle::new(1, true)],
            Box::new(SequentialOrderIds::new()),
        );
        system
            .place_order(Order::with_id(OrderId(100_000_000), "Oleg", "Lviv", 53, Vec::new()))
            .unwrap();

        let draft = system
            .draft_order("Ira", "Kyiv", 2, vec![Item::new("tea", 35.5)])
            .unwrap();

        assert_eq!(draft.order_id(), OrderId(100_000_001));
        assert_eq!(draft.total_price(), 35.5);
    }

    #[test]
    fn test_register_vehicle() {
        let mut system = LogisticSystem::default();
        system.register_vehicle(4);
        system.add_vehicle(Vehicle::new(9, false));

        assert_eq!(system.vehicles(), &[Vehicle::new(4, true), Vehicle::new(9, false)]);
        assert_eq!(system.available_vehicles(), 1);
    }

    /// Always hands out the same identifier.
    struct FixedOrderId(OrderId);

    impl OrderIdSource for FixedOrderId {
        fn next_id(&mut self) -> OrderId {
            self.0
        }
    }

    #[test]
    fn test_draft_order_gives_up_on_exhausted_source() {
        let id = OrderId(123_456_789);
        let mut system = LogisticSystem::with_id_source(
            vec![Vehicle::new(1, true), Vehicle::new(2, true)],
            Box::new(FixedOrderId(id)),
        );

        let first = system.draft_order("Oleg", "Lviv", 53, Vec::new()).unwrap();
        assert_eq!(first.order_id(), id);
        system.place_order(first).unwrap();

        let second = system.draft_order("Ira", "Kyiv", 2, Vec::new());
        assert_eq!(
            second,
            Err(LogisticsError::IdentifierExhausted { attempts: 1 + EXTRA_ID_DRAWS })
        );
        assert_eq!(system.orders().len(), 1);
        assert_eq!(system.available_vehicles(), 1);
    }

    #[test]
    fn test_sequential_source_steps_past_every_placed_order() {
        let vehicles = (1..=40).map(|no| Vehicle::new(no, true)).collect();
        let mut system = LogisticSystem::with_id_source(vehicles, Box::new(SequentialOrderIds::new()));
        // Occupy the next identifiers the source would hand out
        for offset in 0..30 {
            let order = Order::with_id(OrderId(100_000_000 + offset), "Oleg", "Lviv", 53, Vec::new());
            system.place_order(order).unwrap();
        }

        let draft = system.draft_order("Ira", "Kyiv", 2, Vec::new()).unwrap();

        assert_eq!(draft.order_id(), OrderId(100_000_030));
    }
}
