//! # ring-election
//!
//! Simulates leader election among processes arranged in a unidirectional
//! logical ring. Each participant holds a distinct integer identifier and
//! talks only to its immediate successor through a single-producer
//! single-consumer channel. Every participant eventually either becomes a
//! passive relay or discovers that its own candidate value has traveled all
//! the way around the ring unchanged, declares leadership, and triggers
//! ring-wide termination.
//!
//! ## What this crate provides
//!
//! - **Phase state machine** - per-participant `Active` / `Relay` / `Halted`
//!   roles with one-way transitions
//! - **Two-hop comparison rule** - the elimination rule that halves the
//!   surviving candidates each phase
//! - **Ring topology** - validated identifier assignment and channel
//!   ownership, one inbox per position
//! - **Coordinator** - spawns one task per participant, joins them all, and
//!   reports the elected leader
//!
//! The elected leader is always the participant holding the maximum
//! identifier in the ring.
//!
//! ## Quick start
//!
//! ```ignore
//! let config = Arc::new(RingConfig::new()?);
//! let coordinator = Coordinator::new(vec![5, 9, 2], config)?;
//! let outcome = coordinator.run().await?;
//! assert_eq!(outcome.leader_id, 9);
//! ```

mod config;
mod coordinator;
mod core;
mod errors;
mod input;

pub use config::*;
pub use coordinator::*;
pub use core::*;
pub use errors::*;
pub use input::*;
