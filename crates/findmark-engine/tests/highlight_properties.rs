//! Property-based tests for the highlight engine
//!
//! Verifies the round-trip and idempotence contracts across generated
//! content and queries, including metacharacter-heavy queries.

use findmark_core::{walk, VisitAction, Visitor};
use findmark_engine::*;
use proptest::prelude::*;

/// Article-ish HTML: prose, inline markup, and skip zones
fn arb_content() -> impl Strategy<Value = String> {
    let chunk = prop_oneof![
        "[a-zA-Z0-9 .,$()*+?-]{0,30}",
        Just("<p>the cat sat on the mat</p>".to_string()),
        Just("<em>Hello World</em>".to_string()),
        Just("<code>the cat</code>".to_string()),
        Just("<pre>preformatted cat</pre>".to_string()),
        Just("<br>".to_string()),
        Just("<p>Price: $5 (special)</p>".to_string()),
    ];
    prop::collection::vec(chunk, 0..10).prop_map(|chunks| chunks.concat())
}

/// Queries including regex metacharacters and mixed case
fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,6}",
        "[a-zA-Z0-9 .$()*+?\\[\\]{}|^\\\\-]{0,10}",
        Just(String::new()),
        Just("$5 (special)".to_string()),
        Just("AT".to_string()),
    ]
}

/// Count markers currently in the tree
fn marker_count(root: &Fragment) -> usize {
    struct Counter(usize);
    impl Visitor for Counter {
        fn visit_element(&mut self, element: &Element) -> VisitAction {
            if element.tag == MARKER_TAG && element.attr(MARKER_ATTR).is_some() {
                self.0 += 1;
            }
            VisitAction::Descend
        }
    }
    let mut counter = Counter(0);
    walk(root.root(), &mut counter);
    counter.0
}

proptest! {
    /// Highlight-then-reverse restores the exact original tree
    #[test]
    fn reverse_after_highlight_is_identity(content in arb_content(), query in arb_query()) {
        let original = parse_fragment(&content).expect("generated content is shallow");
        let mut root = original.clone();
        let mut engine = SearchEngine::new();

        engine.run_pass(&Query::new(&query), &mut root).expect("escaped patterns compile");
        engine.clear(&mut root).expect("clearing cannot fail");

        prop_assert_eq!(root.root(), original.root());
    }

    /// Highlighting never gains or loses visible characters
    #[test]
    fn text_content_is_invariant_under_highlight(content in arb_content(), query in arb_query()) {
        let mut root = parse_fragment(&content).expect("generated content is shallow");
        let before = root.text_content();
        let mut engine = SearchEngine::new();

        engine.run_pass(&Query::new(&query), &mut root).expect("escaped patterns compile");

        prop_assert_eq!(root.text_content(), before);
    }

    /// The reported count equals the number of markers in the tree
    #[test]
    fn match_count_equals_marker_count(content in arb_content(), query in arb_query()) {
        let mut root = parse_fragment(&content).expect("generated content is shallow");
        let mut engine = SearchEngine::new();

        let outcome = engine.run_pass(&Query::new(&query), &mut root).expect("escaped patterns compile");

        prop_assert_eq!(outcome.matches, marker_count(&root));
    }

    /// Reversal is idempotent from any reachable state
    #[test]
    fn double_reverse_equals_single_reverse(content in arb_content(), query in arb_query()) {
        let mut root = parse_fragment(&content).expect("generated content is shallow");
        let mut engine = SearchEngine::new();
        engine.run_pass(&Query::new(&query), &mut root).expect("escaped patterns compile");

        engine.clear(&mut root).expect("clearing cannot fail");
        let once = root.clone();
        engine.clear(&mut root).expect("clearing cannot fail");

        prop_assert_eq!(root.root(), once.root());
    }

    /// Consecutive passes behave as if only the last one ran
    #[test]
    fn passes_do_not_accumulate(content in arb_content(), first in arb_query(), second in arb_query()) {
        let source = parse_fragment(&content).expect("generated content is shallow");

        let mut chained = source.clone();
        let mut engine = SearchEngine::new();
        engine.run_pass(&Query::new(&first), &mut chained).expect("escaped patterns compile");
        let outcome_chained = engine.run_pass(&Query::new(&second), &mut chained).expect("escaped patterns compile");

        let mut direct = source.clone();
        let mut fresh = SearchEngine::new();
        let outcome_direct = fresh.run_pass(&Query::new(&second), &mut direct).expect("escaped patterns compile");

        prop_assert_eq!(outcome_chained.matches, outcome_direct.matches);
        prop_assert_eq!(chained.root(), direct.root());
    }
}
