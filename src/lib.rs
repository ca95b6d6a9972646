//! exbar — minimal consistent DFA inference by exhaustive state merging.
//!
//! Given a sample of accepted and rejected strings, the crate builds the
//! augmented prefix tree acceptor (APTA) of the sample and searches the space
//! of state-merge decisions for the smallest deterministic automaton whose
//! labels agree with every sample word. The search is exhaustive with
//! branch-and-bound pruning and iterative deepening over the automaton size,
//! following Lang, "Faster algorithms for finding minimal consistent DFAs"
//! (NEC Research Institute, 1999). It can run on a single worker or be
//! statically partitioned across several independent workers.
//!
//! ```
//! use exbar::apta::Apta;
//! use exbar::sample::Sample;
//! use exbar::search::Search;
//!
//! let sample = Sample::new(
//!     vec!["a".to_string(), "aa".to_string()],
//!     vec!["b".to_string()],
//! )
//! .unwrap();
//! let mut search = Search::new(Apta::from_sample(&sample), 0, 1);
//! let outcome = search.run();
//! assert!(outcome.dfa.accepts("a"));
//! assert!(!outcome.dfa.accepts("b"));
//! ```

pub mod apta;
pub mod dfa;
pub mod sample;
pub mod search;
