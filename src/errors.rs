//! Ring Election Error Hierarchy
//!
//! Defines error types for the ring election simulator, categorized by
//! protocol layer and operational concerns.

use config::ConfigError;
use tokio::task::JoinError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings load or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Ring construction failures (invalid size, duplicate identifiers)
    #[error(transparent)]
    Ring(#[from] RingError),

    /// Input file parsing failures
    #[error(transparent)]
    Input(#[from] InputError),

    /// Channel failures (overflow, unexpected disconnect)
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// Election protocol invariant violations
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Illegal participant role transitions
    #[error(transparent)]
    Transition(#[from] StateTransitionError),

    /// Participant task failed to join (panic or abort)
    #[error("Participant task failed: {0}")]
    Task(#[from] JoinError),

    /// Unrecoverable failures requiring process termination
    #[error("Fatal error: {0}")]
    Fatal(String),
}

/// Configuration errors detected while building the ring topology.
///
/// All variants are rejected before any participant task starts; none of
/// them is retried.
#[derive(Debug, thiserror::Error)]
pub enum RingError {
    /// The identifier list was empty
    #[error("Ring must contain at least one participant")]
    EmptyRing,

    /// The same identifier appeared at two ring positions. Distinctness is
    /// required for termination: equal surviving candidates would circulate
    /// forever without either being eliminated.
    #[error("Duplicate identifier {identifier} in ring")]
    DuplicateIdentifier { identifier: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read the ring description file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unparseable token or missing participant count
    #[error("Malformed ring description: {0}")]
    Malformed(String),

    /// Declared participant count disagrees with the identifiers listed
    #[error("Ring description declares {expected} identifiers but lists {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The bounded buffer for a position's inbox filled up. A stalled
    /// participant blocks its neighbors transitively around the ring, so
    /// this is fatal to the whole run rather than locally recoverable.
    #[error("Inbox for position {position} overflowed (capacity {capacity})")]
    Overflow { position: usize, capacity: usize },

    /// The peer endpoint was dropped while the participant still needed it
    #[error("Channel for position {position} disconnected")]
    Closed { position: usize },
}

/// Invariant violations. These indicate a construction bug, not a runtime
/// condition, and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The termination sentinel arrived where a candidate value was
    /// required. The two-in/two-out per-phase alignment makes this
    /// unreachable on a correctly built ring.
    #[error("Termination sentinel out of phase alignment at position {position} (phase {phase})")]
    UnexpectedTerminate { position: usize, phase: u64 },

    /// Every participant halted but none took the leadership branch
    #[error("All participants halted without a leader announcement")]
    NoLeaderAnnounced,

    /// More than one participant took the leadership branch
    #[error("{count} participants announced leadership; expected exactly one")]
    MultipleLeaders { count: usize },
}

#[derive(Debug, thiserror::Error)]
#[doc(hidden)]
pub enum StateTransitionError {
    #[error("Invalid role transition.")]
    InvalidTransition,
}
