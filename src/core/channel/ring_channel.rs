//! Directed single-producer single-consumer links between ring neighbors.
//!
//! Each ring position owns exactly one inbox. The channel serving position
//! `k` is written only by the participant at position `k - 1 mod N` and read
//! only by the participant at position `k`. That invariant is structural:
//! [`RingSender`] is not `Clone` and the receiver half is moved into a single
//! task.

use tokio::sync::mpsc;
use tracing::trace;

use super::Message;
use crate::ChannelError;
use crate::Result;

/// Writing half of a position's inbox, held by the predecessor.
#[derive(Debug)]
pub struct RingSender {
    /// Receiving position this sender feeds
    position: usize,
    capacity: usize,
    tx: mpsc::Sender<Message>,
}

/// Reading half of a position's inbox, held by the position itself.
#[derive(Debug)]
pub struct RingReceiver {
    position: usize,
    rx: mpsc::Receiver<Message>,
}

/// Creates the inbox channel serving `position`.
pub fn ring_channel(
    position: usize,
    capacity: usize,
) -> (RingSender, RingReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        RingSender {
            position,
            capacity,
            tx,
        },
        RingReceiver { position, rx },
    )
}

impl RingSender {
    /// Enqueues `message` without blocking.
    ///
    /// A full buffer means the protocol's per-phase in-flight bound was
    /// broken; the run cannot recover because a stalled participant blocks
    /// its neighbors transitively around the ring.
    pub fn send(
        &self,
        message: Message,
    ) -> Result<()> {
        trace!(
            "send {:?} -> inbox of position {}",
            message, self.position
        );
        self.tx.try_send(message).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => ChannelError::Overflow {
                position: self.position,
                capacity: self.capacity,
            },
            mpsc::error::TrySendError::Closed(_) => ChannelError::Closed {
                position: self.position,
            },
        })?;
        Ok(())
    }

    /// Receiving position this sender feeds.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl RingReceiver {
    /// Waits until the predecessor has enqueued a value, then dequeues it.
    ///
    /// Values arrive in exactly the order they were sent. Disconnection is
    /// reported as [`ChannelError::Closed`]: senders live until their owning
    /// participant halts, so a closed inbox mid-run is a construction bug.
    pub async fn recv(&mut self) -> Result<Message> {
        match self.rx.recv().await {
            Some(message) => {
                trace!(
                    "recv {:?} at inbox of position {}",
                    message, self.position
                );
                Ok(message)
            }
            None => Err(ChannelError::Closed {
                position: self.position,
            }
            .into()),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
