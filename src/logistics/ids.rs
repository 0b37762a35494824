//! Order identifier sources.
//!
//! Orders never pick their own identifiers; they draw them from an
//! [`OrderIdSource`] handed in by the caller. Tests plug in a seeded or
//! sequential source to get deterministic identifiers.

use crate::model::{OrderId, MAX_ORDER_ID, MIN_ORDER_ID};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Anything that can hand out order identifiers.
pub trait OrderIdSource {
    fn next_id(&mut self) -> OrderId;
}

/// Uniformly random 9-digit identifiers. Collisions are possible.
#[derive(Debug, Clone)]
pub struct RandomOrderIds<R: Rng = StdRng> {
    rng: R,
}

impl RandomOrderIds<StdRng> {
    /// Seeds the generator from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomOrderIds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OrderIdSource for RandomOrderIds<R> {
    fn next_id(&mut self) -> OrderId {
        OrderId(self.rng.random_range(MIN_ORDER_ID..=MAX_ORDER_ID))
    }
}

/// Monotonically increasing identifiers, wrapping back to the smallest
/// 9-digit value after the largest one.
#[derive(Debug, Clone)]
pub struct SequentialOrderIds {
    next: u32,
}

impl SequentialOrderIds {
    pub fn new() -> Self {
        Self::starting_at(MIN_ORDER_ID)
    }

    /// Values outside the 9-digit range are clamped into it.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first.clamp(MIN_ORDER_ID, MAX_ORDER_ID),
        }
    }
}

impl Default for SequentialOrderIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdSource for SequentialOrderIds {
    fn next_id(&mut self) -> OrderId {
        let id = self.next;
        self.next = if id == MAX_ORDER_ID { MIN_ORDER_ID } else { id + 1 };
        OrderId(id)
    }
}

/// Which identifier source a system should be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

impl IdStrategy {
    /// Builds the matching source. `seed` only affects the random strategy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn OrderIdSource + Send> {
        match (self, seed) {
            (IdStrategy::Random, Some(seed)) => Box::new(RandomOrderIds::seeded(seed)),
            (IdStrategy::Random, None) => Box::new(RandomOrderIds::from_entropy()),
            (IdStrategy::Sequential, _) => Box::new(SequentialOrderIds::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_repeat() {
        let mut a = RandomOrderIds::seeded(42);
        let mut b = RandomOrderIds::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_sequential_ids_wrap() {
        let mut ids = SequentialOrderIds::starting_at(MAX_ORDER_ID);
        assert_eq!(ids.next_id(), OrderId(MAX_ORDER_ID));
        assert_eq!(ids.next_id(), OrderId(MIN_ORDER_ID));
        assert_eq!(ids.next_id(), OrderId(MIN_ORDER_ID + 1));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Sequential".parse::<IdStrategy>(), Ok(IdStrategy::Sequential));
        assert_eq!(" random ".parse::<IdStrategy>(), Ok(IdStrategy::Random));
        assert!("uuid".parse::<IdStrategy>().is_err());
    }
}
