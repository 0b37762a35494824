//! Runtime configuration.
//!
//! Every field has a default, so an empty environment yields a working
//! system. Values are read from `LOGISTICS_*` environment variables.

use crate::logistics::IdStrategy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_MAILBOX_CAPACITY: &str = "LOGISTICS_MAILBOX_CAPACITY";
pub const ENV_ID_STRATEGY: &str = "LOGISTICS_ID_STRATEGY";
pub const ENV_ID_SEED: &str = "LOGISTICS_ID_SEED";
pub const ENV_FLEET_SIZE: &str = "LOGISTICS_FLEET_SIZE";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for a [`LogisticsService`](crate::lifecycle::LogisticsService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// How many requests may queue in the actor's mailbox.
    pub mailbox_capacity: usize,
    /// How order identifiers are generated.
    pub id_strategy: IdStrategy,
    /// Seed for the random strategy; `None` seeds from the OS.
    pub id_seed: Option<u64>,
    /// Vehicles numbered `1..=fleet_size` registered as available at startup.
    pub fleet_size: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            id_strategy: IdStrategy::Random,
            id_seed: None,
            fleet_size: 0,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(capacity) = parse(&lookup, ENV_MAILBOX_CAPACITY)? {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_MAILBOX_CAPACITY,
                    value: "0".to_string(),
                    reason: "capacity must be at least 1".to_string(),
                });
            }
            config.mailbox_capacity = capacity;
        }
        if let Some(strategy) = parse(&lookup, ENV_ID_STRATEGY)? {
            config.id_strategy = strategy;
        }
        config.id_seed = parse(&lookup, ENV_ID_SEED)?;
        if let Some(fleet_size) = parse(&lookup, ENV_FLEET_SIZE)? {
            config.fleet_size = fleet_size;
        }

        Ok(config)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value,
            reason: e.to_string(),
        })
}
