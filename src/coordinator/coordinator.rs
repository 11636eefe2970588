//! Election run orchestration.
//!
//! The coordinator owns the ring topology, spawns one task per participant,
//! and joins every task before reporting. The join is a full barrier: a run
//! completes only after all N participants halt.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::mpsc;
use tracing::error;
use tracing::info;

use crate::ElectionEvent;
use crate::Participant;
use crate::ParticipantSummary;
use crate::ProtocolError;
use crate::Result;
use crate::RingConfig;
use crate::RingTopology;

/// Result of a completed election run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionOutcome {
    /// The elected leader's identifier: the maximum identifier in the ring
    pub leader_id: u64,
    /// Position of the participant that announced the leader. Not
    /// necessarily the position holding `leader_id` originally: the
    /// announcer is whichever contender carried the winning value when it
    /// came full circle.
    pub declared_by: usize,
    /// One summary per ring position
    pub participants: Vec<ParticipantSummary>,
}

/// Builds the ring and drives one election run to completion.
pub struct Coordinator {
    config: Arc<RingConfig>,
    topology: RingTopology,
    observer: Option<mpsc::UnboundedSender<ElectionEvent>>,
}

impl Coordinator {
    /// Validates the identifier list and builds the topology. Configuration
    /// errors surface here, before any participant task exists.
    pub fn new(
        identifiers: Vec<u64>,
        config: Arc<RingConfig>,
    ) -> Result<Self> {
        let topology = RingTopology::build(identifiers, &config.channel)?;
        Ok(Self {
            config,
            topology,
            observer: None,
        })
    }

    /// Registers a trace event subscription. Events flow only when
    /// [`crate::ElectionConfig::emit_events`] is enabled.
    pub fn with_observer(
        mut self,
        events: mpsc::UnboundedSender<ElectionEvent>,
    ) -> Self {
        self.observer = Some(events);
        self
    }

    pub fn ring_size(&self) -> usize {
        self.topology.len()
    }

    /// Spawns all participants, waits for every one of them to halt, and
    /// validates that exactly one took the leadership branch.
    pub async fn run(mut self) -> Result<ElectionOutcome> {
        let total = self.topology.len();
        info!("Starting election across {} ring positions", total);

        let members = self.topology.members().to_vec();
        let mut handles = Vec::with_capacity(total);
        for member in members {
            let (inbox, outbox) = self.topology.take_endpoints(member.position)?;
            let mut participant = Participant::new(member, inbox, outbox);
            if self.config.election.emit_events {
                if let Some(events) = &self.observer {
                    participant = participant.with_observer(events.clone());
                }
            }
            handles.push(tokio::spawn(participant.run()));
        }

        let participants = try_join_all(handles)
            .await?
            .into_iter()
            .collect::<Result<Vec<ParticipantSummary>>>()?;

        let announcers: Vec<(usize, u64)> = participants
            .iter()
            .filter_map(|s| s.announced.map(|leader_id| (s.position, leader_id)))
            .collect();
        match announcers[..] {
            [] => {
                error!("All {} participants halted without a leader", total);
                Err(ProtocolError::NoLeaderAnnounced.into())
            }
            [(declared_by, leader_id)] => {
                info!(
                    "Election complete: leader {} declared by position {}",
                    leader_id, declared_by
                );
                Ok(ElectionOutcome {
                    leader_id,
                    declared_by,
                    participants,
                })
            }
            _ => {
                error!(
                    "{} participants announced leadership simultaneously",
                    announcers.len()
                );
                Err(ProtocolError::MultipleLeaders {
                    count: announcers.len(),
                }
                .into())
            }
        }
    }
}
