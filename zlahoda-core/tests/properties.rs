//! Property tests for the classification contract
//!
//! Classification must be deterministic, total over any structurally valid
//! input, and every deferral must stay inside the sequence.

use proptest::prelude::*;
use zlahoda_core::{ExceptionClassifier, Token};

fn arb_surface() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "на", "до", "дивом", "нікому", "не", "сьогодні", "швидко", "їм", "відомому", "стіл",
        "років", "10", "зо", "два", "мінус", "$", "святая", "святих", "лише", "навіть", "Купала",
        "авеню", "Бейкер", "можна", "засвоїти", "те", "вже", "х", "КИЇВ",
    ])
    .prop_map(str::to_owned)
}

fn arb_tag() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "noun:anim:p:v_naz",
        "noun:anim:p:v_naz:&pron:pers",
        "noun:anim:m:v_rod:prop",
        "noun:inanim:p:v_rod",
        "noun:inanim:m:v_oru",
        "noun:anim:p:v_dav:&pron:pers",
        "numr:p:v_naz",
        "number",
        "adv",
        "adv:compb",
        "advp:perf",
        "adj:f:v_rod",
        "adj:m:v_dav",
        "adjp:pasv:m:v_mis",
        "verb:perf:inf",
        "part",
        "prep",
        "",
        "malformed tag with spaces",
    ])
    .prop_map(str::to_owned)
}

fn arb_token() -> impl Strategy<Value = Token> {
    (arb_surface(), arb_tag()).prop_map(|(surface, tag)| {
        let lemma = surface.to_lowercase();
        Token::with_reading(surface, lemma, tag)
    })
}

fn arb_sequence_and_index() -> impl Strategy<Value = (Vec<Token>, usize)> {
    prop::collection::vec(arb_token(), 1..6).prop_flat_map(|tokens| {
        let len = tokens.len();
        (Just(tokens), 0..len)
    })
}

proptest! {
    #[test]
    fn classification_is_deterministic(
        (tokens, index) in arb_sequence_and_index(),
        prep in arb_token(),
    ) {
        let classifier = ExceptionClassifier::new();
        prop_assert_eq!(
            classifier.classify_inflected(&tokens, index, &prep, &[]),
            classifier.classify_inflected(&tokens, index, &prep, &[])
        );
        prop_assert_eq!(
            classifier.classify_strong(&tokens, index, &prep, &[]),
            classifier.classify_strong(&tokens, index, &prep, &[])
        );
        prop_assert_eq!(
            classifier.classify_non_inflected(&tokens, index, &prep, &[]),
            classifier.classify_non_inflected(&tokens, index, &prep, &[])
        );
    }

    #[test]
    fn skips_stay_inside_the_sequence(
        (tokens, index) in arb_sequence_and_index(),
        prep in arb_token(),
    ) {
        let classifier = ExceptionClassifier::new();
        for outcome in [
            classifier.classify_inflected(&tokens, index, &prep, &[]),
            classifier.classify_strong(&tokens, index, &prep, &[]),
            classifier.classify_non_inflected(&tokens, index, &prep, &[]),
        ] {
            if let Some(n) = outcome.skip_distance() {
                prop_assert!(n < tokens.len() - index, "skip {} escapes the sequence", n);
            }
        }
    }

    #[test]
    fn length_one_sequences_never_read_out_of_range(
        token in arb_token(),
        prep in arb_token(),
    ) {
        let classifier = ExceptionClassifier::new();
        let tokens = [token];
        // totality: each battery returns, whatever the single token is
        classifier.classify_inflected(&tokens, 0, &prep, &[]);
        classifier.classify_strong(&tokens, 0, &prep, &[]);
        classifier.classify_non_inflected(&tokens, 0, &prep, &[]);
    }
}
