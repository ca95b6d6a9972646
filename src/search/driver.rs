//! Exhaustive search driver with iterative deepening.
//!
//! The driver partitions states into red (committed to the output automaton)
//! and blue (frontier) sets and branches over every disposal of one blue node
//! at a time: merge it into each red state in turn, or promote it to a new
//! red state. The red-set size is bounded by `max_red`, which grows by one
//! across full restarts until a bound admits a solution, so the first
//! automaton found is minimal.
//!
//! Success is a status value that unwinds the whole recursion; the merges
//! along the successful branch stay committed, and the automaton they leave
//! behind is exactly the one the red list describes.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::apta::{Apta, StateId, ROOT};
use crate::dfa::Dfa;

use super::journal::Journal;
use super::merge::try_merge;
use super::partition::Partitioner;
use super::select::pick_blue_node;
use super::SearchOutcome;

/// One worker's search over its own automaton.
#[derive(Debug)]
pub struct Search {
    apta: Apta,
    partition: Partitioner,
    max_red: usize,
    result: Option<Vec<StateId>>,
    stop: Arc<AtomicBool>,
}

impl Search {
    /// A search for worker `rank` of `size`. Workers hold independent APTA
    /// copies; they coordinate only through the static partition and,
    /// optionally, a shared stop flag.
    pub fn new(apta: Apta, rank: usize, size: usize) -> Self {
        Self {
            apta,
            partition: Partitioner::new(rank, size),
            max_red: 0,
            result: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Install a shared stop flag. When a peer sets it, the recursion unwinds
    /// at the next node without performing further merge trials.
    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    /// The automaton in its current state. After a successful round this
    /// carries the committed merges of the winning branch.
    pub fn apta(&self) -> &Apta {
        &self.apta
    }

    /// Explore the whole pruned tree for one red-set size bound. Returns the
    /// red list on terminal success; on failure the automaton is restored to
    /// its pre-round state and `None` is returned.
    pub fn run_bounded(&mut self, max_red: usize) -> Option<Vec<StateId>> {
        self.max_red = max_red;
        self.result = None;
        let mut red = vec![ROOT];
        if self.explore(&mut red, 0, 1) {
            self.result.take()
        } else {
            None
        }
    }

    /// Full iterative deepening on a single worker: restart the search with
    /// `max_red` = 1, 2, 3, ... until a bound admits a solution. Terminates
    /// because at `max_red` >= the APTA size the all-red disposition always
    /// succeeds.
    pub fn run(&mut self) -> SearchOutcome {
        let mut max_red = 1;
        loop {
            if let Some(states) = self.run_bounded(max_red) {
                let dfa = Dfa::extract(&self.apta, &states);
                return SearchOutcome {
                    dfa,
                    states,
                    max_red,
                };
            }
            max_red += 1;
        }
    }

    fn explore(&mut self, red: &mut Vec<StateId>, level: usize, mut product: u64) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return false;
        }
        if !self.partition.admit(level, &mut product) {
            return false;
        }
        if red.len() > self.max_red {
            return false;
        }

        let blues = self.blue_nodes(red);
        if blues.is_empty() {
            self.result = Some(red.clone());
            return true;
        }

        let (blue, minval) = pick_blue_node(&mut self.apta, &blues, red);
        let next_product = product.saturating_mul(minval + 1);

        let reds = red.clone();
        for target in reds {
            let mut journal = Journal::new();
            if try_merge(&mut self.apta, target, blue, &mut journal)
                && self.explore(red, level + 1, next_product)
            {
                // Keep the winning branch committed; the undo is skipped on
                // purpose so the final automaton survives the unwind.
                return true;
            }
            journal.undo(&mut self.apta);
        }

        red.push(blue);
        if self.explore(red, level + 1, next_product) {
            return true;
        }
        red.pop();
        false
    }

    /// The current frontier: children of red states that are not themselves
    /// red, in sorted order so every worker enumerates them identically.
    fn blue_nodes(&self, red: &[StateId]) -> Vec<StateId> {
        let red_set: BTreeSet<StateId> = red.iter().copied().collect();
        let mut blues = BTreeSet::new();
        for &state in red {
            for &child in self.apta.node(state).children.values() {
                if !red_set.contains(&child) {
                    blues.insert(child);
                }
            }
        }
        blues.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apta::Label;
    use crate::sample::Sample;

    fn search_for(accept: &[&str], reject: &[&str]) -> Search {
        let sample = Sample::new(
            accept.iter().map(|w| w.to_string()).collect(),
            reject.iter().map(|w| w.to_string()).collect(),
        )
        .unwrap();
        Search::new(Apta::from_sample(&sample), 0, 1)
    }

    #[test]
    fn test_failed_round_restores_apta() {
        let mut search = search_for(&["aa"], &["a"]);
        let before = search.apta.clone();

        assert!(search.run_bounded(1).is_none());
        assert_eq!(search.apta, before);
    }

    #[test]
    fn test_two_accept_one_reject_scenario() {
        // Accept = {"a", "aa"}, Reject = {"b"}: a solution exists within two
        // states, and the APTA root starts unlabeled since the empty word is
        // not in the accept set.
        let mut search = search_for(&["a", "aa"], &["b"]);
        assert_eq!(search.apta.node(ROOT).label, Label::Neutral);

        let outcome = search.run();
        assert!(outcome.max_red <= 2);
        assert!(outcome.states.len() <= 2);
        assert!(outcome.dfa.accepts("a"));
        assert!(outcome.dfa.accepts("aa"));
        assert!(!outcome.dfa.accepts("b"));
    }

    #[test]
    fn test_deepening_finds_smallest_bound_first() {
        // With the empty word rejected, Accept = {"aa"} / Reject = {"", "a"}
        // cannot be told apart by fewer than three states.
        let mut search = search_for(&["aa"], &["", "a"]);
        let outcome = search.run();
        assert_eq!(outcome.states.len(), 3);
        assert_eq!(outcome.max_red, 3);
    }

    #[test]
    fn test_result_red_list_starts_at_root() {
        let mut search = search_for(&["ab", "b"], &["a", ""]);
        let outcome = search.run();
        assert_eq!(outcome.states[0], ROOT);
    }

    #[test]
    fn test_round_trip_consistency() {
        let accept = ["a", "ab", "abab", "ababab"];
        let reject = ["", "b", "ba", "aa", "abb"];
        let mut search = search_for(&accept, &reject);
        let outcome = search.run();

        for word in accept {
            assert!(outcome.dfa.accepts(word), "should accept {:?}", word);
        }
        for word in reject {
            assert!(!outcome.dfa.accepts(word), "should reject {:?}", word);
        }
    }

    #[test]
    fn test_stop_flag_unwinds_without_result() {
        let mut search = search_for(&["aa"], &["a"]);
        let stop = Arc::new(AtomicBool::new(true));
        search = search.with_stop(Arc::clone(&stop));

        assert!(search.run_bounded(5).is_none());
    }
}
