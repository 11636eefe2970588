use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Capacity floor: each phase keeps at most two values in flight per inbox,
/// and the final phase adds the termination sentinel on top.
const MIN_CAPACITY: usize = 4;

/// Sizing parameters for the per-position inbox buffers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChannelConfig {
    /// Maximum number of buffered messages per inbox. Overflow is fatal to
    /// the run, so the default leaves headroom above the protocol's
    /// per-phase bound.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl ChannelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity < MIN_CAPACITY {
            return Err(Error::Config(ConfigError::Message(format!(
                "channel.capacity must be at least {} (two in-flight values per phase plus the termination sentinel)",
                MIN_CAPACITY
            ))));
        }

        Ok(())
    }
}

fn default_capacity() -> usize {
    8
}
