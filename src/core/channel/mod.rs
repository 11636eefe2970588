mod ring_channel;
pub use ring_channel::*;


/// A value traveling around the ring.
///
/// The termination sentinel is a dedicated variant rather than a reserved
/// integer, so any `u64` is a legal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A contending identifier value
    Candidate(u64),
    /// Ring-wide termination signal, sent once by the leader and forwarded
    /// exactly once by every relay
    Terminate,
}

impl Message {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Message::Terminate)
    }
}
