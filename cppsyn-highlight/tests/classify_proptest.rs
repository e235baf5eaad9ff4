//! Property-based tests for the line classifier
//!
//! The classifier must be total over arbitrary text, so the strategies mix
//! C-looking fragments with unrestricted unicode noise.

use cppsyn_highlight::{classify, Category, HighlightedDocument, LineState};
use proptest::prelude::*;

fn carry_strategy() -> impl Strategy<Value = LineState> {
    prop_oneof![
        Just(LineState::Normal),
        Just(LineState::InsideBlockComment { doc: false }),
        Just(LineState::InsideBlockComment { doc: true }),
    ]
}

/// Fragments that exercise every pass, glued together in random order.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("//".to_string()),
        Just("\"".to_string()),
        Just("'".to_string()),
        Just("\\".to_string()),
        Just("R\"x(".to_string()),
        Just(")x\"".to_string()),
        Just("#include".to_string()),
        Just("[[".to_string()),
        Just("]]".to_string()),
        Just("template <".to_string()),
        Just("->".to_string()),
        Just("::".to_string()),
        Just("<=>".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{0,3})?([eE][+-]?[0-9]{1,2})?[uUlLfF]?",
        "[ \t]{1,3}",
        "[(){};,.<>=+*/&|!?:~%^-]",
        "\\PC{1,3}",
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn classification_is_total_and_well_formed(text in line_strategy(), carry in carry_strategy()) {
        let highlight = classify(&text, carry);

        for span in &highlight.spans {
            prop_assert!(span.len > 0);
            prop_assert!(span.end() <= text.len());
            prop_assert!(text.is_char_boundary(span.start));
            prop_assert!(text.is_char_boundary(span.end()));
        }

        for pair in highlight.spans.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start, "unsorted: {:?}", pair);
        }

        let base: Vec<_> = highlight.base_spans().collect();
        for pair in base.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start, "overlap: {:?}", pair);
        }

        for span in &highlight.spans {
            if span.category == Category::EscapeSequence {
                let nested = highlight.spans.iter().any(|outer| {
                    outer.category.is_escapable_literal() && outer.contains(span)
                });
                prop_assert!(nested, "escape outside a literal: {:?}", span);
            }
        }
    }

    #[test]
    fn classification_is_idempotent(text in line_strategy(), carry in carry_strategy()) {
        prop_assert_eq!(classify(&text, carry), classify(&text, carry));
    }

    #[test]
    fn open_comment_without_close_swallows_the_line(text in "[^*]{0,40}", doc in any::<bool>()) {
        let carry = LineState::InsideBlockComment { doc };
        let highlight = classify(&text, carry);
        prop_assert_eq!(highlight.carry_out, carry);
        prop_assert!(highlight.spans.len() <= 1);
    }

    #[test]
    fn document_matches_line_by_line_classification(
        lines in prop::collection::vec(line_strategy(), 1..8),
        edit in line_strategy(),
        at in 0usize..8,
    ) {
        let mut doc = HighlightedDocument::new(&lines.join("\n"));
        let at = at % doc.len();
        doc.replace_line(at, edit.clone()).unwrap();

        let mut carry = LineState::Normal;
        for (index, (text, highlight)) in doc.iter().enumerate() {
            let expected = classify(text, carry);
            prop_assert_eq!(highlight, &expected, "line {}", index);
            carry = expected.carry_out;
        }
    }
}
