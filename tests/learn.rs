//! End-to-end inference scenarios through the public API.

use exbar::apta::Apta;
use exbar::sample::{abbadingo, json, Sample, SampleError};
use exbar::search::{run_parallel_search, ParallelConfig, Search};

fn sample(accept: &[&str], reject: &[&str]) -> Sample {
    Sample::new(
        accept.iter().map(|w| w.to_string()).collect(),
        reject.iter().map(|w| w.to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn learns_consistent_automaton_from_abbadingo_text() {
    let text = "\
5 2
1 1 a
1 2 a a
0 1 b
0 2 a b
1 3 a a a
";
    let sample = abbadingo::parse(text).unwrap();
    let result = run_parallel_search(&sample, &ParallelConfig::default().with_workers(2)).unwrap();

    let check = result.outcome.dfa.check_sample(&sample);
    assert!(
        check.is_clean(),
        "misclassified words: {:?} / {:?}",
        check.false_rejects,
        check.false_accepts
    );
}

#[test]
fn learns_consistent_automaton_from_json_text() {
    let text = r#"{
        "positive": ["ab", "abab", "ababab"],
        "negative": ["", "a", "b", "ba", "aa"],
        "numPositive": 3,
        "numNegative": 5,
        "numTotal": 8
    }"#;
    let sample = json::parse(text).unwrap();
    let result = run_parallel_search(&sample, &ParallelConfig::default().with_workers(2)).unwrap();

    for word in &sample.accept {
        assert!(result.outcome.dfa.accepts(word));
    }
    for word in &sample.reject {
        assert!(!result.outcome.dfa.accepts(word));
    }
}

#[test]
fn three_states_needed_when_epsilon_is_rejected() {
    // Accept = {"aa"} with the empty word and "a" rejected: no two-state
    // automaton can separate the three residuals, so the search must deepen
    // to a bound of three.
    let sample = sample(&["aa"], &["", "a"]);
    let mut search = Search::new(Apta::from_sample(&sample), 0, 1);
    let outcome = search.run();

    assert_eq!(outcome.max_red, 3);
    assert_eq!(outcome.states.len(), 3);
    assert!(outcome.dfa.accepts("aa"));
    assert!(!outcome.dfa.accepts(""));
    assert!(!outcome.dfa.accepts("a"));
}

#[test]
fn first_solution_is_no_larger_than_later_bounds_allow() {
    // The canonical pair Accept = {"aa"} / Reject = {"a"} is satisfiable
    // with two states (a parity automaton); iterative deepening must find a
    // solution no larger than that.
    let sample = sample(&["aa"], &["a"]);
    let mut search = Search::new(Apta::from_sample(&sample), 0, 1);
    let outcome = search.run();

    assert!(outcome.states.len() <= 2);
    assert!(outcome.dfa.accepts("aa"));
    assert!(!outcome.dfa.accepts("a"));
}

#[test]
fn worker_counts_do_not_change_the_answer_size() {
    let sample = sample(
        &["b", "ab", "aab", "aaab"],
        &["", "a", "ba", "bb", "aba"],
    );
    let mut sizes = Vec::new();
    for workers in [1, 2, 4] {
        let result =
            run_parallel_search(&sample, &ParallelConfig::default().with_workers(workers))
                .unwrap();
        assert!(result.outcome.dfa.check_sample(&sample).is_clean());
        sizes.push(result.outcome.states.len());
    }
    assert!(sizes.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn loader_rejects_overlapping_sets_before_search() {
    let text = "2 1\n1 1 a\n0 1 a\n";
    match abbadingo::parse(text) {
        Err(SampleError::Overlap { word }) => assert_eq!(word, "a"),
        other => panic!("expected Overlap error, got {:?}", other),
    }
}

#[test]
fn larger_alternating_language_round_trips() {
    // (ab)* with assorted counterexamples; checks the committed merges of
    // the winning branch define a complete, consistent automaton.
    let accept = ["", "ab", "abab", "ababab", "abababab"];
    let reject = ["a", "b", "ba", "aa", "bb", "aba", "abb", "bab"];
    let sample = sample(&accept, &reject);

    let result = run_parallel_search(&sample, &ParallelConfig::default().with_workers(3)).unwrap();
    for word in accept {
        assert!(result.outcome.dfa.accepts(word), "should accept {:?}", word);
    }
    for word in reject {
        assert!(
            !result.outcome.dfa.accepts(word),
            "should reject {:?}",
            word
        );
    }
}
