//! Blue-node selection heuristic.
//!
//! The search always expands the most constrained blue node first: the one
//! with the fewest red states it can be merged with. Failing early keeps the
//! branching shallow. Ties go to the first minimum in candidate order, which
//! is deterministic because candidates arrive in sorted state order.

use crate::apta::{Apta, StateId};

use super::journal::Journal;
use super::merge::try_merge;

/// Count compatible red partners for every blue candidate (each trial merge
/// is performed and immediately undone) and return the candidate with the
/// smallest count together with that count.
pub fn pick_blue_node(
    apta: &mut Apta,
    blues: &[StateId],
    reds: &[StateId],
) -> (StateId, u64) {
    debug_assert!(!blues.is_empty());
    let mut best = blues[0];
    let mut best_count = u64::MAX;
    for &blue in blues {
        let mut count = 0u64;
        for &red in reds {
            let mut journal = Journal::new();
            if try_merge(apta, red, blue, &mut journal) {
                count += 1;
            }
            journal.undo(apta);
        }
        if count < best_count {
            best = blue;
            best_count = count;
        }
    }
    (best, best_count)
}
