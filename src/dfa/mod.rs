//! The synthesized automaton, extracted from a successful search.
//!
//! On success the red list becomes the DFA's state set; its committed labels
//! and child edges in the winning automaton define the acceptance set and the
//! transition function. The type also replays sample words against itself as
//! a self-check for the surrounding layers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::apta::{Apta, Label, StateId, ROOT};
use crate::sample::Sample;

/// A complete deterministic finite automaton over the sample's alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<StateId>,
    accepting: BTreeSet<StateId>,
    transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
}

impl Dfa {
    /// Extract the automaton defined by `red` from a searched APTA.
    /// Transitions are restricted to symbols whose target is itself red;
    /// after a terminal success this drops nothing, since the blue set was
    /// empty.
    pub fn extract(apta: &Apta, red: &[StateId]) -> Self {
        let red_set: BTreeSet<StateId> = red.iter().copied().collect();
        let mut accepting = BTreeSet::new();
        let mut transitions = BTreeMap::new();
        for &state in red {
            let node = apta.node(state);
            if node.label == Label::Accept {
                accepting.insert(state);
            }
            let outgoing: BTreeMap<char, StateId> = node
                .children
                .iter()
                .filter(|&(_, target)| red_set.contains(target))
                .map(|(&symbol, &target)| (symbol, target))
                .collect();
            transitions.insert(state, outgoing);
        }
        Self {
            states: red.to_vec(),
            accepting,
            transitions,
        }
    }

    /// State identities, in red-list order. The initial state is always 0.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn initial(&self) -> StateId {
        ROOT
    }

    /// Accepting state identities.
    pub fn accepting(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.iter().copied()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Replay `word` from the initial state. A missing transition rejects.
    pub fn accepts(&self, word: &str) -> bool {
        let mut state = ROOT;
        for symbol in word.chars() {
            match self
                .transitions
                .get(&state)
                .and_then(|outgoing| outgoing.get(&symbol))
            {
                Some(&next) => state = next,
                None => return false,
            }
        }
        self.accepting.contains(&state)
    }

    /// Re-evaluate every sample word. Both returned lists should be empty
    /// for a correctly implemented engine; the CLI prints them as a
    /// self-check.
    pub fn check_sample(&self, sample: &Sample) -> SampleCheck {
        SampleCheck {
            false_rejects: sample
                .accept
                .iter()
                .filter(|word| !self.accepts(word))
                .cloned()
                .collect(),
            false_accepts: sample
                .reject
                .iter()
                .filter(|word| self.accepts(word))
                .cloned()
                .collect(),
        }
    }
}

/// Sample words the automaton misclassifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleCheck {
    /// Accept words the automaton rejects.
    pub false_rejects: Vec<String>,
    /// Reject words the automaton accepts.
    pub false_accepts: Vec<String>,
}

impl SampleCheck {
    pub fn is_clean(&self) -> bool {
        self.false_rejects.is_empty() && self.false_accepts.is_empty()
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "States:")?;
        for state in &self.states {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;
        writeln!(f, "Initial: {}", self.initial())?;
        write!(f, "Finals:")?;
        for state in &self.accepting {
            write!(f, " {}", state)?;
        }
        writeln!(f)?;
        writeln!(f, "Transitions:")?;
        for state in &self.states {
            write!(f, "{}:", state)?;
            if let Some(outgoing) = self.transitions.get(state) {
                for (symbol, target) in outgoing {
                    write!(f, " ({}, {})", symbol, target)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
