use serde::{Deserialize, Serialize};

/// Delivery destination: a city and the post office inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub postoffice: u32,
}

impl Location {
    pub fn new(city: impl Into<String>, postoffice: u32) -> Self {
        Self {
            city: city.into(),
            postoffice,
        }
    }
}
