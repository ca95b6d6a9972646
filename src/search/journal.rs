//! Reversible change journal for trial merges.
//!
//! Every mutation a merge makes to the automaton is recorded here as a tagged
//! edit holding the previous value. Popping and reverting the edits in strict
//! LIFO order restores the automaton exactly to its pre-trial state.

use crate::apta::{Apta, Label, StateId};

/// One reversible edit.
#[derive(Debug, Clone)]
enum Edit {
    /// A child edge of `state` on `symbol` was set or redirected; `prev` is
    /// the previous target, `None` if the edge did not exist before.
    Child {
        state: StateId,
        symbol: char,
        prev: Option<StateId>,
    },
    /// The label of `state` was overwritten; `prev` is the previous label.
    Label { state: StateId, prev: Label },
}

/// LIFO log of edits made during a trial merge.
#[derive(Debug, Default)]
pub struct Journal {
    edits: Vec<Edit>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a child edge is about to change.
    pub fn record_child(&mut self, state: StateId, symbol: char, prev: Option<StateId>) {
        self.edits.push(Edit::Child {
            state,
            symbol,
            prev,
        });
    }

    /// Record that a label is about to change.
    pub fn record_label(&mut self, state: StateId, prev: Label) {
        self.edits.push(Edit::Label { state, prev });
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Revert every recorded edit in reverse order, emptying the journal.
    pub fn undo(&mut self, apta: &mut Apta) {
        while let Some(edit) = self.edits.pop() {
            match edit {
                Edit::Child {
                    state,
                    symbol,
                    prev,
                } => match prev {
                    Some(target) => {
                        apta.node_mut(state).children.insert(symbol, target);
                    }
                    None => {
                        apta.node_mut(state).children.remove(&symbol);
                    }
                },
                Edit::Label { state, prev } => {
                    apta.node_mut(state).label = prev;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apta::{Apta, ROOT};
    use crate::sample::Sample;

    fn small_apta() -> Apta {
        let sample = Sample::new(vec!["ab".to_string()], vec!["b".to_string()]).unwrap();
        Apta::from_sample(&sample)
    }

    #[test]
    fn test_undo_restores_child_edits() {
        let mut apta = small_apta();
        let before = apta.clone();
        let mut journal = Journal::new();

        let prev = apta.node(ROOT).children.get(&'a').copied();
        journal.record_child(ROOT, 'a', prev);
        apta.node_mut(ROOT).children.insert('a', ROOT);

        journal.record_child(ROOT, 'z', None);
        apta.node_mut(ROOT).children.insert('z', 1);

        assert_ne!(apta, before);
        journal.undo(&mut apta);
        assert_eq!(apta, before);
        assert!(journal.is_empty());
    }

    #[test]
    fn test_undo_restores_label_edits() {
        let mut apta = small_apta();
        let before = apta.clone();
        let mut journal = Journal::new();

        journal.record_label(ROOT, apta.node(ROOT).label);
        apta.node_mut(ROOT).label = Label::Accept;

        journal.undo(&mut apta);
        assert_eq!(apta, before);
    }

    #[test]
    fn test_undo_reverts_in_reverse_order() {
        let mut apta = small_apta();
        let before = apta.clone();
        let mut journal = Journal::new();

        // Two edits to the same edge: undo must restore the original target,
        // not the intermediate one.
        journal.record_child(ROOT, 'a', apta.node(ROOT).children.get(&'a').copied());
        apta.node_mut(ROOT).children.insert('a', 2);
        journal.record_child(ROOT, 'a', Some(2));
        apta.node_mut(ROOT).children.insert('a', 3);

        journal.undo(&mut apta);
        assert_eq!(apta, before);
    }
}
