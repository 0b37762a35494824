use crate::logistics::OrderIdSource;
use crate::model::{Item, Order};
use tracing::debug;

/// Items a customer has picked but not yet ordered.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        debug!(item = %item, "Added to cart");
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current sum of the item prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Hands the collected items over and leaves the cart empty.
    pub fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    /// Turns the cart into an order for the given destination.
    ///
    /// The cart is empty afterwards, ready for the next customer.
    pub fn checkout(
        &mut self,
        ids: &mut (impl OrderIdSource + ?Sized),
        user_name: impl Into<String>,
        city: impl Into<String>,
        postoffice: u32,
    ) -> Order {
        Order::new(ids, user_name, city, postoffice, self.take_items())
    }
}
