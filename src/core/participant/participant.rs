//! One concurrent unit of execution per ring position.
//!
//! A participant owns its inbox receiver and the sender into its successor's
//! inbox, and runs the phase loop until it halts. All of its state is
//! private to its task; the only shared structures are the two channel
//! endpoints.

use tokio::sync::mpsc;
use tracing::debug;
use tracing::info;

use super::role::Role;
use crate::ElectionEvent;
use crate::ElectionRule;
use crate::Message;
use crate::ProtocolError;
use crate::Result;
use crate::RingMember;
use crate::RingReceiver;
use crate::RingSender;
use crate::TwoHopRule;
use crate::Verdict;

/// Final report of a participant's run, returned when its task joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantSummary {
    pub position: usize,
    /// Original identifier held at this position
    pub identifier: u64,
    /// Terminal role as an i32 constant (always `HALTED` on a clean run)
    pub role: i32,
    /// Phase counter at halt. Phases start at 1; the two halting branches do
    /// not increment, so this counts completed phases plus the final one.
    pub phases: u64,
    /// Phase in which this participant lost its candidacy, if it did
    pub eliminated_in_phase: Option<u64>,
    /// The leader identifier this participant announced, set only by the
    /// leadership branch
    pub announced: Option<u64>,
}

/// A ring position's worker: identity, protocol state, and the two channel
/// endpoints it is allowed to touch.
pub struct Participant<R = TwoHopRule>
where
    R: ElectionRule,
{
    position: usize,
    identifier: u64,
    /// Current contending value; starts as the participant's own identifier
    candidate: u64,
    phase: u64,
    role: Role,
    eliminated_in_phase: Option<u64>,
    announced: Option<u64>,

    inbox: RingReceiver,
    outbox: RingSender,
    rule: R,
    events: Option<mpsc::UnboundedSender<ElectionEvent>>,
}

impl Participant<TwoHopRule> {
    pub fn new(
        member: RingMember,
        inbox: RingReceiver,
        outbox: RingSender,
    ) -> Self {
        Self::with_rule(member, inbox, outbox, TwoHopRule)
    }
}

impl<R> Participant<R>
where
    R: ElectionRule,
{
    pub fn with_rule(
        member: RingMember,
        inbox: RingReceiver,
        outbox: RingSender,
        rule: R,
    ) -> Self {
        Self {
            position: member.position,
            identifier: member.identifier,
            candidate: member.identifier,
            phase: 1,
            role: Role::Active,
            eliminated_in_phase: None,
            announced: None,
            inbox,
            outbox,
            rule,
            events: None,
        }
    }

    pub fn with_observer(
        mut self,
        events: mpsc::UnboundedSender<ElectionEvent>,
    ) -> Self {
        self.events = Some(events);
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    /// Runs the phase loop to completion and reports how it ended.
    pub async fn run(mut self) -> Result<ParticipantSummary> {
        debug!(
            "Participant {} (identifier {}) starting",
            self.position, self.identifier
        );

        while !self.role.is_halted() {
            if self.role.is_active() {
                self.active_phase().await?;
            } else {
                self.relay_phase().await?;
            }
        }

        Ok(ParticipantSummary {
            position: self.position,
            identifier: self.identifier,
            role: self.role.as_i32(),
            phases: self.phase,
            eliminated_in_phase: self.eliminated_in_phase,
            announced: self.announced,
        })
    }

    /// One phase while still contending.
    ///
    /// The forward of `one_hop` and the second receive happen BEFORE the
    /// decision. That keeps every inbox at exactly two messages per phase
    /// regardless of what the decision concludes, which is what guarantees
    /// the termination sentinel always arrives on a relay's phase boundary.
    async fn active_phase(&mut self) -> Result<()> {
        debug!(
            "[{}][{}][{}]",
            self.phase, self.identifier, self.candidate
        );
        self.emit(ElectionEvent::PhaseStarted {
            position: self.position,
            phase: self.phase,
            candidate: self.candidate,
        });

        self.outbox.send(Message::Candidate(self.candidate))?;
        let one_hop = self.recv_candidate().await?;
        self.outbox.send(Message::Candidate(one_hop))?;
        let two_hop = self.recv_candidate().await?;

        match self.rule.evaluate(self.candidate, one_hop, two_hop) {
            Verdict::Elected => {
                info!(
                    "Position {} announces leader {} in phase {}",
                    self.position, self.candidate, self.phase
                );
                self.outbox.send(Message::Terminate)?;
                self.role = self.role.become_halted()?;
                self.announced = Some(self.candidate);
                self.emit(ElectionEvent::LeaderElected {
                    position: self.position,
                    leader_id: self.candidate,
                    phase: self.phase,
                });
            }
            Verdict::Adopt(value) => {
                debug!(
                    "Position {} adopts candidate {} in phase {}",
                    self.position, value, self.phase
                );
                self.candidate = value;
                self.phase += 1;
            }
            Verdict::Eliminated => {
                self.role = self.role.become_relay()?;
                self.eliminated_in_phase = Some(self.phase);
                self.emit(ElectionEvent::Eliminated {
                    position: self.position,
                    phase: self.phase,
                });
                debug!(
                    "Position {} eliminated in phase {}",
                    self.position, self.phase
                );
                self.phase += 1;
            }
        }

        Ok(())
    }

    /// One phase as a passive relay: two receive-and-forward rounds,
    /// mirroring the active phase's two-in/two-out shape so relays stay in
    /// lock-step with the contenders sharing their channels.
    async fn relay_phase(&mut self) -> Result<()> {
        let first = self.inbox.recv().await?;
        self.outbox.send(first)?;
        if first.is_terminate() {
            // Sentinel already forwarded; ring-wide propagation holds
            self.role = self.role.become_halted()?;
            self.emit(ElectionEvent::Halted {
                position: self.position,
                phases: self.phase,
            });
            debug!(
                "Position {} forwarded termination sentinel and halted",
                self.position
            );
            return Ok(());
        }

        let second = self.inbox.recv().await?;
        self.outbox.send(second)?;
        if second.is_terminate() {
            return Err(ProtocolError::UnexpectedTerminate {
                position: self.position,
                phase: self.phase,
            }
            .into());
        }

        self.phase += 1;
        Ok(())
    }

    async fn recv_candidate(&mut self) -> Result<u64> {
        match self.inbox.recv().await? {
            Message::Candidate(value) => Ok(value),
            Message::Terminate => Err(ProtocolError::UnexpectedTerminate {
                position: self.position,
                phase: self.phase,
            }
            .into()),
        }
    }

    fn emit(
        &self,
        event: ElectionEvent,
    ) {
        if let Some(events) = &self.events {
            // Observer going away must not disturb the protocol
            let _ = events.send(event);
        }
    }
}
