use tracing::trace;

use super::ElectionRule;
use super::Verdict;

/// Two-hop comparison rule.
///
/// A candidate survives a phase only when the one-hop value dominates both
/// the two-hop value and the candidate's own, which eliminates at least half
/// of the surviving candidates per phase and bounds the run at O(log N)
/// expected phases. Seeing one's own candidate come back as the one-hop
/// value proves no strictly larger candidate survives anywhere on the ring.
///
/// `two_hop` participates only as a secondary condition, never in a full
/// three-way ordering.
#[derive(Debug, Clone, Default)]
pub struct TwoHopRule;

impl ElectionRule for TwoHopRule {
    fn evaluate(
        &self,
        candidate: u64,
        one_hop: u64,
        two_hop: u64,
    ) -> Verdict {
        let verdict = if one_hop == candidate {
            Verdict::Elected
        } else if one_hop > two_hop && one_hop > candidate {
            Verdict::Adopt(one_hop)
        } else {
            Verdict::Eliminated
        };

        trace!(
            "evaluate(candidate={}, one_hop={}, two_hop={}) -> {:?}",
            candidate, one_hop, two_hop, verdict
        );
        verdict
    }
}
