use tracing::debug;

use super::ACTIVE;
use super::HALTED;
use super::RELAY;
use crate::Result;
use crate::StateTransitionError;

/// Protocol role of a ring participant.
///
/// Transitions are one-way only: `Active -> Relay` on elimination,
/// `Active -> Halted` on leadership, `Relay -> Halted` on forwarding the
/// termination sentinel. A relay never contends again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Still contending with a candidate value
    Active,
    /// Eliminated, forwarding messages unchanged
    Relay,
    /// Terminal: no further sends or receives
    Halted,
}

impl Role {
    pub fn become_relay(&self) -> Result<Role> {
        match self {
            Role::Active => {
                debug!("Role transition: Active -> Relay");
                Ok(Role::Relay)
            }
            _ => Err(StateTransitionError::InvalidTransition.into()),
        }
    }

    pub fn become_halted(&self) -> Result<Role> {
        match self {
            Role::Active | Role::Relay => {
                debug!("Role transition: {:?} -> Halted", self);
                Ok(Role::Halted)
            }
            Role::Halted => Err(StateTransitionError::InvalidTransition.into()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Role::Active)
    }

    pub fn is_relay(&self) -> bool {
        matches!(self, Role::Relay)
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Role::Halted)
    }

    #[inline]
    pub fn as_i32(&self) -> i32 {
        match self {
            Role::Active => ACTIVE,
            Role::Relay => RELAY,
            Role::Halted => HALTED,
        }
    }
}
