//! Ordered assignment of participants to ring positions.
//!
//! The topology owns all N inbox channels until the coordinator hands each
//! position its endpoints. No global state: the whole ring is one value,
//! built, consumed, and dropped by its owner.

use std::collections::HashSet;

use tracing::debug;

use crate::ring_channel;
use crate::ChannelConfig;
use crate::Error;
use crate::Result;
use crate::RingError;
use crate::RingReceiver;
use crate::RingSender;

/// One ring position and the identifier assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingMember {
    pub position: usize,
    pub identifier: u64,
}

/// N participants at positions `0..N-1` with directed edges
/// `position -> (position + 1) mod N`. Channel `k` serves the inbox of
/// position `k`.
#[derive(Debug)]
pub struct RingTopology {
    members: Vec<RingMember>,
    /// Inbox receiver per position, takeable exactly once
    inboxes: Vec<Option<RingReceiver>>,
    /// Sender into the successor's inbox per position, takeable exactly once
    outboxes: Vec<Option<RingSender>>,
}

impl RingTopology {
    /// Builds the ring from identifiers in ring order (wraparound after the
    /// last).
    ///
    /// Rejects an empty list and duplicate identifiers before any
    /// participant starts: equal surviving candidates would never eliminate
    /// each other, so distinctness is a hard precondition rather than a
    /// runtime concern.
    pub fn build(
        identifiers: Vec<u64>,
        channel_config: &ChannelConfig,
    ) -> Result<Self> {
        if identifiers.is_empty() {
            return Err(RingError::EmptyRing.into());
        }

        let mut seen = HashSet::new();
        for &identifier in &identifiers {
            if !seen.insert(identifier) {
                return Err(RingError::DuplicateIdentifier { identifier }.into());
            }
        }

        let total = identifiers.len();
        let members = identifiers
            .into_iter()
            .enumerate()
            .map(|(position, identifier)| RingMember {
                position,
                identifier,
            })
            .collect();

        let mut senders = Vec::with_capacity(total);
        let mut inboxes = Vec::with_capacity(total);
        for position in 0..total {
            let (tx, rx) = ring_channel(position, channel_config.capacity);
            senders.push(Some(tx));
            inboxes.push(Some(rx));
        }

        // Position p writes into the inbox of p + 1, wrapping at the end
        let mut outboxes: Vec<Option<RingSender>> = Vec::with_capacity(total);
        for position in 0..total {
            outboxes.push(senders[(position + 1) % total].take());
        }

        debug!("Ring topology built with {} positions", total);
        Ok(Self {
            members,
            inboxes,
            outboxes,
        })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[RingMember] {
        &self.members
    }

    pub fn identifier_at(
        &self,
        position: usize,
    ) -> Option<u64> {
        self.members.get(position).map(|m| m.identifier)
    }

    /// Successor position with wraparound.
    pub fn successor_of(
        &self,
        position: usize,
    ) -> usize {
        (position + 1) % self.members.len()
    }

    /// Hands out the endpoints for `position`: its own inbox receiver and
    /// the sender into its successor's inbox. Each pair can be taken exactly
    /// once; a second take means two tasks were wired to one position.
    pub fn take_endpoints(
        &mut self,
        position: usize,
    ) -> Result<(RingReceiver, RingSender)> {
        if position >= self.members.len() {
            return Err(Error::Fatal(format!(
                "Position {} outside ring of {} participants",
                position,
                self.members.len()
            )));
        }

        let inbox = self.inboxes[position].take();
        let outbox = self.outboxes[position].take();
        match (inbox, outbox) {
            (Some(inbox), Some(outbox)) => Ok((inbox, outbox)),
            _ => Err(Error::Fatal(format!(
                "Endpoints for position {} already taken",
                position
            ))),
        }
    }
}
