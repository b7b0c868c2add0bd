//! Runtime configuration for [`OrderSystem`](super::OrderSystem).

use tracing::warn;

/// Environment variable overriding [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_ENV: &str = "FOOD_DELIVERY_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Settings shared by every actor in a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Mailbox bound of each actor. Senders wait while it is full.
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
    /// Reads [`CHANNEL_CAPACITY_ENV`]. Unset, unparsable or zero values give the default.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CHANNEL_CAPACITY_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().parse::<usize>() {
            Ok(capacity) if capacity > 0 => Self {
                channel_capacity: capacity,
            },
            _ => {
                warn!(
                    var = CHANNEL_CAPACITY_ENV,
                    value = raw,
                    fallback = DEFAULT_CHANNEL_CAPACITY,
                    "Invalid channel capacity, using default"
                );
                Self::default()
            }
        }
    }
}
