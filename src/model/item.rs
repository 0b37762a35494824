use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single item in a customer's cart.
///
/// Items have no identity beyond their fields: two items with the same name
/// and price are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Creates a new Item. Both values are stored verbatim.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} price is {} UAH.", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_description() {
        assert_eq!(Item::new("book", 110.0).to_string(), "book price is 110 UAH.");
        assert_eq!(Item::new("tea", 35.5).to_string(), "tea price is 35.5 UAH.");
    }
}
