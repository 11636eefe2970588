//! Trace events for election observability.
//!
//! Purely informational: participants emit these over an unbounded channel
//! to an optional observer, and nothing in the protocol depends on anyone
//! listening.

/// One observable step of an election run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectionEvent {
    /// A contending participant entered a new phase
    PhaseStarted {
        position: usize,
        phase: u64,
        candidate: u64,
    },

    /// A participant lost its candidacy and became a relay
    Eliminated { position: usize, phase: u64 },

    /// A participant saw its candidate value return unchanged and announced
    /// the leader
    LeaderElected {
        position: usize,
        leader_id: u64,
        phase: u64,
    },

    /// A relay forwarded the termination sentinel and stopped
    Halted { position: usize, phases: u64 },
}

impl ElectionEvent {
    /// Ring position the event originated from.
    pub fn position(&self) -> usize {
        match *self {
            ElectionEvent::PhaseStarted { position, .. } => position,
            ElectionEvent::Eliminated { position, .. } => position,
            ElectionEvent::LeaderElected { position, .. } => position,
            ElectionEvent::Halted { position, .. } => position,
        }
    }
}
