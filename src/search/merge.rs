//! The merge/undo engine: trial identification of a blue state with a red
//! state.
//!
//! A merge succeeds when folding the blue state's subtree into the red state
//! produces no Accept/Reject label conflict anywhere. Every mutation is
//! journaled; the caller undoes the journal after every trial it does not
//! commit. Incompatibility is an ordinary, frequent outcome of the search,
//! so it is reported as a return value rather than an error.

use crate::apta::{Apta, Label, StateId};

use super::journal::Journal;

/// Attempt to identify `blue` with `red`. Returns `true` on success; on
/// failure the automaton is left partially modified and the caller must undo
/// the journal.
pub fn try_merge(apta: &mut Apta, red: StateId, blue: StateId, journal: &mut Journal) -> bool {
    // Redirect every edge pointing at `blue` to `red`. Other red states may
    // already reference `blue` as a child; after the merge all such
    // references must name the surviving state.
    for state in 0..apta.len() {
        let redirected: Vec<char> = apta
            .node(state)
            .children
            .iter()
            .filter(|&(_, &target)| target == blue)
            .map(|(&symbol, _)| symbol)
            .collect();
        for symbol in redirected {
            journal.record_child(state, symbol, Some(blue));
            apta.node_mut(state).children.insert(symbol, red);
        }
    }
    walk(apta, red, blue, journal)
}

/// Reconcile `blue` into `red` recursively: propagate labels, then fold each
/// of `blue`'s children into the corresponding child of `red`, grafting the
/// subtree directly where `red` has no child on that symbol.
fn walk(apta: &mut Apta, red: StateId, blue: StateId, journal: &mut Journal) -> bool {
    let blue_label = apta.node(blue).label;
    if blue_label != Label::Neutral {
        let red_label = apta.node(red).label;
        if red_label != Label::Neutral {
            if red_label != blue_label {
                return false;
            }
        } else {
            journal.record_label(red, Label::Neutral);
            apta.node_mut(red).label = blue_label;
        }
    }

    let blue_children: Vec<(char, StateId)> = apta
        .node(blue)
        .children
        .iter()
        .map(|(&symbol, &target)| (symbol, target))
        .collect();
    for (symbol, blue_child) in blue_children {
        match apta.node(red).children.get(&symbol).copied() {
            Some(red_child) => {
                if !walk(apta, red_child, blue_child, journal) {
                    return false;
                }
            }
            None => {
                // Graft the rest of blue's subtree under red without copying.
                journal.record_child(red, symbol, None);
                apta.node_mut(red).children.insert(symbol, blue_child);
            }
        }
    }
    true
}
