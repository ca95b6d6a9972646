//! The exbar search engine.
//!
//! Built from four pieces: the merge/undo engine that tests one state
//! identification reversibly, the blue-node selector that orders candidates
//! fail-first, the exhaustive driver with iterative deepening over the
//! automaton size, and the static work partitioner that divides one logical
//! search tree across independent workers. The `parallel` module runs one
//! driver per worker thread and collects the first solution.

pub mod driver;
pub mod journal;
pub mod merge;
pub mod parallel;
pub mod partition;
pub mod select;

pub use driver::Search;
pub use parallel::{run_parallel_search, ParallelConfig, ParallelResult};

use crate::apta::StateId;
use crate::dfa::Dfa;

/// A successful search: the synthesized automaton, the red list that defines
/// its state set, and the deepening bound at which it was found.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub dfa: Dfa,
    pub states: Vec<StateId>,
    pub max_red: usize,
}
