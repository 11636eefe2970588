use serde::Deserialize;
use serde::Serialize;

use crate::Result;

/// Parameters for the election loop and its observability.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ElectionConfig {
    /// Whether participants emit per-phase trace events to a registered
    /// observer. Purely informational; disabling it does not change the
    /// protocol.
    #[serde(default = "default_emit_events")]
    pub emit_events: bool,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            emit_events: default_emit_events(),
        }
    }
}

impl ElectionConfig {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

fn default_emit_events() -> bool {
    true
}
