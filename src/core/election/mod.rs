mod decision;
pub use decision::*;


///--------------------------------------
/// Trait Definition
#[cfg(test)]
use mockall::automock;

/// Outcome of one active phase for a contending participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The participant's own candidate value traveled all the way around
    /// the ring and returned unchanged
    Elected,
    /// A strictly larger surviving candidate arrived from upstream; carry it
    /// forward as this participant's new candidate
    Adopt(u64),
    /// This participant cannot be the leader; become a passive relay
    Eliminated,
}

/// The per-phase decision evaluated by each contending participant.
///
/// `one_hop` is the value most recently sent onward by the predecessor,
/// `two_hop` the value from two active positions back, both observed through
/// this participant's own inbox only.
#[cfg_attr(test, automock)]
pub trait ElectionRule: Send + Sync + 'static {
    fn evaluate(
        &self,
        candidate: u64,
        one_hop: u64,
        two_hop: u64,
    ) -> Verdict;
}
