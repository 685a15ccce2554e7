//! Runtime configuration for [`RestaurantSystem`](super::RestaurantSystem).

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "RESTAURANT_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Mailbox size of every actor. Senders wait while a mailbox is full.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl SystemConfig {
    /// Defaults, overridden by `RESTAURANT_CHANNEL_CAPACITY` when it holds a positive
    /// integer. Anything else is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CHANNEL_CAPACITY_VAR).ok().as_deref())
    }

    /// The mailbox size actors are started with. A zero capacity, which can only come
    /// from a deserialized config, is logged and replaced by the default.
    pub fn mailbox_capacity(&self) -> usize {
        if self.channel_capacity > 0 {
            return self.channel_capacity;
        }
        warn!(
            default = DEFAULT_CHANNEL_CAPACITY,
            "Ignoring zero channel capacity"
        );
        DEFAULT_CHANNEL_CAPACITY
    }

    fn from_value(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(raw) = raw else {
            return config;
        };
        match raw.trim().parse::<usize>() {
            Ok(capacity) if capacity > 0 => config.channel_capacity = capacity,
            _ => warn!(
                var = CHANNEL_CAPACITY_VAR,
                value = raw,
                default = config.channel_capacity,
                "Ignoring invalid channel capacity"
            ),
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_from_value() {
        assert_eq!(SystemConfig::from_value(None).channel_capacity, 32);
        assert_eq!(SystemConfig::from_value(Some("128")).channel_capacity, 128);
        assert_eq!(SystemConfig::from_value(Some(" 8 ")).channel_capacity, 8);
        assert_eq!(SystemConfig::from_value(Some("0")).channel_capacity, 32);
        assert_eq!(SystemConfig::from_value(Some("lots")).channel_capacity, 32);
    }

    #[test]
    fn zero_capacity_from_config_falls_back_to_default() {
        let config: SystemConfig = serde_json::from_str(r#"{"channel_capacity": 0}"#).unwrap();
        assert_eq!(config.mailbox_capacity(), 32);

        let config: SystemConfig = serde_json::from_str(r#"{"channel_capacity": 4}"#).unwrap();
        assert_eq!(config.mailbox_capacity(), 4);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: SystemConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SystemConfig::default());
    }
}
