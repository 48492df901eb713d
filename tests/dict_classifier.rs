// tests/dict_classifier.rs
//
// End-to-end checks of the dictionary path against the documented
// policies: totality, negation flip, degree monotonicity, tie-break.

use std::sync::Arc;

use review_sentiment_analyzer::dict::{DictClassifier, DEFAULT_NEGATION_WINDOW};
use review_sentiment_analyzer::{Error, Lexicon};

/// The exact lexicon from the end-to-end scenario: positive 好吃/满意,
/// negative 难吃, negation 不, degree 很/非常.
fn scenario_classifier() -> DictClassifier {
    let lexicon = Lexicon::from_lists(
        "好吃 1.0\n满意 1.0\n",
        "难吃 1.0\n",
        "不\n",
        "很 1.5\n非常 2.0\n",
    )
    .expect("scenario lexicon");
    DictClassifier::with_lexicon(Arc::new(lexicon), DEFAULT_NEGATION_WINDOW)
}

#[test]
fn end_to_end_scenario() {
    let ds = scenario_classifier();
    assert_eq!(ds.analyse("太难吃了").unwrap(), 0);
    assert_eq!(ds.analyse("非常满意").unwrap(), 1);
    assert_eq!(ds.analyse("不好吃").unwrap(), 0);
}

#[test]
fn analyse_is_total_over_non_empty_input() {
    let ds = DictClassifier::new();
    let inputs = [
        "味道很好，服务也不错",
        "太难吃了，再也不来了",
        "一般般，没什么特色",
        "非常满意，下次还会再来",
        "要是米饭再多点儿就好了",
        "asdf 1234 !!!",
        "。。。？！",
        "🙂🙂",
    ];
    for text in inputs {
        match ds.analyse(text) {
            Ok(label) => assert!(label == 0 || label == 1, "label for {text:?}"),
            // Pure punctuation segments into zero clauses but still must
            // not panic; only whitespace-empty text may error.
            Err(e) => panic!("analyse({text:?}) failed: {e}"),
        }
    }
    assert!(matches!(ds.analyse("").unwrap_err(), Error::EmptyInput(_)));
}

#[test]
fn negation_property() {
    let ds = scenario_classifier();
    // Single positive word, unnegated vs wrapped by exactly one negation.
    assert_eq!(ds.analyse("满意").unwrap(), 1);
    assert_eq!(ds.analyse("不满意").unwrap(), 0);
}

#[test]
fn degree_monotonicity() {
    let ds = scenario_classifier();
    let base = ds.score("满意").unwrap();
    for modified in ["很满意", "非常满意"] {
        let boosted = ds.score(modified).unwrap();
        assert_eq!(base.signum(), boosted.signum(), "{modified} flipped sign");
        assert!(boosted.abs() >= base.abs(), "{modified} shrank magnitude");
    }
    // Intensified sentences still classify positive.
    assert_eq!(ds.analyse("很满意").unwrap(), 1);
    assert_eq!(ds.analyse("非常满意").unwrap(), 1);
}

#[test]
fn zero_score_ties_resolve_to_negative() {
    let ds = scenario_classifier();
    // Positive and negative hits cancel exactly.
    assert_eq!(ds.score("好吃难吃").unwrap(), 0.0);
    assert_eq!(ds.analyse("好吃难吃").unwrap(), 0);
    // A sentence with no lexicon hits at all is also a zero-score tie.
    assert_eq!(ds.analyse("今天下雨").unwrap(), 0);
}

#[test]
fn bundled_lexicon_handles_the_demo_sentences() {
    let ds = DictClassifier::new();
    assert_eq!(ds.analyse("味道很好，服务也不错").unwrap(), 1);
    assert_eq!(ds.analyse("非常满意，下次还会再来").unwrap(), 1);
    assert_eq!(ds.analyse("太难吃了，再也不来了").unwrap(), 0);
    assert_eq!(ds.analyse("不太好吃，相当难吃，要是米饭再多点儿就好了").unwrap(), 0);
}
