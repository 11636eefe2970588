use std::sync::Arc;

use tokio::sync::mpsc;

use super::coordinator::Coordinator;
use crate::is_halted;
use crate::ElectionEvent;
use crate::Error;
use crate::RingConfig;
use crate::RingError;

fn test_config() -> Arc<RingConfig> {
    Arc::new(RingConfig::default())
}

/// # Case 1: Single-participant ring
///
/// With wraparound to itself, the lone participant reads its own candidate
/// back in phase 1 and declares immediately.
#[tokio::test]
async fn test_single_participant_ring() {
    let coordinator = Coordinator::new(vec![7], test_config()).expect("valid ring");

    let outcome = coordinator.run().await.expect("run should complete");

    assert_eq!(outcome.leader_id, 7);
    assert_eq!(outcome.declared_by, 0);
    assert_eq!(outcome.participants.len(), 1);
    assert_eq!(outcome.participants[0].phases, 1);
}

/// # Case 2: The maximum identifier wins regardless of position
#[tokio::test]
async fn test_three_participant_ring_elects_maximum() {
    let coordinator = Coordinator::new(vec![5, 9, 2], test_config()).expect("valid ring");

    let outcome = coordinator.run().await.expect("run should complete");

    assert_eq!(outcome.leader_id, 9);
}

/// # Case 3: Sorted ring of five
///
/// Leader is 5; the other four participants all pass through the relay
/// state before halting.
#[tokio::test]
async fn test_five_participant_sorted_ring() {
    let coordinator = Coordinator::new(vec![1, 2, 3, 4, 5], test_config()).expect("valid ring");

    let outcome = coordinator.run().await.expect("run should complete");

    assert_eq!(outcome.leader_id, 5);

    let relayed: Vec<_> = outcome
        .participants
        .iter()
        .filter(|s| s.eliminated_in_phase.is_some())
        .collect();
    assert_eq!(relayed.len(), 4);
    assert!(outcome.participants.iter().all(|s| is_halted(s.role)));
}

/// # Case 4: Exactly one announcer on every valid run
#[tokio::test]
async fn test_exactly_one_announcer() {
    let coordinator =
        Coordinator::new(vec![12, 3, 44, 7, 28, 51, 9], test_config()).expect("valid ring");

    let outcome = coordinator.run().await.expect("run should complete");

    let announcers = outcome
        .participants
        .iter()
        .filter(|s| s.announced.is_some())
        .count();
    assert_eq!(announcers, 1);
    assert_eq!(outcome.leader_id, 51);
}

/// # Case 5: Duplicate identifiers rejected before any task starts
#[tokio::test]
async fn test_duplicate_identifiers_rejected() {
    let result = Coordinator::new(vec![3, 3], test_config());

    assert!(matches!(
        result,
        Err(Error::Ring(RingError::DuplicateIdentifier { identifier: 3 }))
    ));
}

/// # Case 6: Empty ring rejected
#[tokio::test]
async fn test_empty_ring_rejected() {
    let result = Coordinator::new(vec![], test_config());

    assert!(matches!(result, Err(Error::Ring(RingError::EmptyRing))));
}

/// # Case 7: Random ring orders always elect the maximum
#[tokio::test]
async fn test_random_orders_elect_maximum() {
    use rand::seq::SliceRandom;

    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut identifiers: Vec<u64> = (0..16).collect();
        identifiers.shuffle(&mut rng);

        let coordinator =
            Coordinator::new(identifiers, test_config()).expect("valid ring");
        let outcome = coordinator.run().await.expect("run should complete");

        assert_eq!(outcome.leader_id, 15);
    }
}

/// # Case 8: Observer sees the full event stream
#[tokio::test]
async fn test_observer_event_stream() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let coordinator = Coordinator::new(vec![5, 9, 2], test_config())
        .expect("valid ring")
        .with_observer(event_tx);

    let outcome = coordinator.run().await.expect("run should complete");
    assert_eq!(outcome.leader_id, 9);

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }

    let elected: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, ElectionEvent::LeaderElected { .. }))
        .collect();
    assert_eq!(elected.len(), 1);
    assert!(matches!(
        elected[0],
        ElectionEvent::LeaderElected { leader_id: 9, .. }
    ));

    // Phase numbers are monotone per position
    for position in 0..3 {
        let phases: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                ElectionEvent::PhaseStarted {
                    position: p, phase, ..
                } if *p == position => Some(*phase),
                _ => None,
            })
            .collect();
        assert!(phases.windows(2).all(|w| w[0] < w[1]));
    }
}

/// # Case 9: Event emission can be disabled by configuration
#[tokio::test]
async fn test_events_disabled_by_config() {
    let mut config = RingConfig::default();
    config.election.emit_events = false;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let coordinator = Coordinator::new(vec![1, 2], Arc::new(config))
        .expect("valid ring")
        .with_observer(event_tx);

    coordinator.run().await.expect("run should complete");

    assert!(event_rx.try_recv().is_err());
}
