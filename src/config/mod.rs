//! Configuration management for the ring election simulator.
//!
//! Provides layered configuration loading with priority:
//! 1. Default values (hardcoded)
//! 2. Optional TOML override file
//! 3. Environment variables (highest priority)

mod channel;
mod election;
pub use channel::*;
pub use election::*;

#[cfg(test)]
mod config_test;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

/// Root settings for an election run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RingConfig {
    /// Election loop and observability parameters
    #[serde(default)]
    pub election: ElectionConfig,

    /// Inbox buffer parameters
    #[serde(default)]
    pub channel: ChannelConfig,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            election: ElectionConfig::default(),
            channel: ChannelConfig::default(),
        }
    }
}

impl RingConfig {
    /// Builds settings from defaults merged with `RING__*` environment
    /// variables.
    ///
    /// E.g. `RING__CHANNEL__CAPACITY=16` overrides [`ChannelConfig::capacity`].
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&RingConfig::default())?)
            .add_source(
                Environment::with_prefix("RING")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        let settings: RingConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Merges a TOML file on top of the current settings. Environment
    /// variables still take the highest priority.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path).required(true))
            .add_source(
                Environment::with_prefix("RING")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        let settings: RingConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates all subsystem configurations
    pub fn validate(&self) -> Result<()> {
        self.election.validate()?;
        self.channel.validate()?;
        Ok(())
    }
}
