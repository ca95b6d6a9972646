//! Augmented prefix tree acceptor built from a labeled sample.
//!
//! The APTA is a trie over all sample words. Each state carries a label:
//! states where an accept word ends are `Accept`, states where a reject word
//! ends are `Reject`, every other state is `Neutral`. The structure is
//! append-only during construction; the search later mutates labels and child
//! edges in place, journaling every edit so it can be reversed exactly.

use std::collections::BTreeMap;

use crate::sample::Sample;

/// Stable state identity, an index into the APTA's node vector.
pub type StateId = usize;

/// The root state of every APTA.
pub const ROOT: StateId = 0;

/// Acceptance label of a state.
///
/// A label set to `Accept` or `Reject` never changes to the opposite value;
/// a merge that would require that is incompatible and fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Accept,
    Reject,
    Neutral,
}

/// One state of the automaton: a label and a deterministic child map.
///
/// Children are kept in a `BTreeMap` so iteration over symbols is always in
/// sorted order. The search relies on this: every worker must enumerate
/// branches in the identical order for the static work partition to cover
/// each branch exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: Label,
    pub children: BTreeMap<char, StateId>,
}

impl Node {
    fn new(label: Label) -> Self {
        Self {
            label,
            children: BTreeMap::new(),
        }
    }
}

/// The automaton under search: an indexed collection of nodes, rooted at
/// state 0. States are only ever appended, never removed; after construction
/// the node count stays fixed and only labels and child edges mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apta {
    nodes: Vec<Node>,
}

impl Apta {
    /// Build the prefix tree acceptor for a sample. Words sharing a prefix
    /// share the corresponding path; no merging happens here.
    pub fn from_sample(sample: &Sample) -> Self {
        let mut apta = Apta {
            nodes: vec![Node::new(Label::Neutral)],
        };
        for word in &sample.accept {
            let end = apta.insert_word(word);
            apta.nodes[end].label = Label::Accept;
        }
        for word in &sample.reject {
            let end = apta.insert_word(word);
            apta.nodes[end].label = Label::Reject;
        }
        apta
    }

    /// Walk `word` from the root, appending Neutral states for missing
    /// children, and return the state the final symbol leads to.
    fn insert_word(&mut self, word: &str) -> StateId {
        let mut current = ROOT;
        for symbol in word.chars() {
            match self.nodes[current].children.get(&symbol) {
                Some(&next) => current = next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new(Label::Neutral));
                    self.nodes[current].children.insert(symbol, next);
                    current = next;
                }
            }
        }
        current
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: StateId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: StateId) -> &mut Node {
        &mut self.nodes[id]
    }
}
