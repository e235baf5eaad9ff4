//! Operators and statement punctuation

use super::words::WORD;
use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use crate::highlight::exclusion::ExclusionSet;
use crate::highlight::tables::is_alternative_operator;
use once_cell::sync::Lazy;
use regex::Regex;

/// Multi-character operators, longest spelling first.
pub(crate) static MULTI_CHAR_OPERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"<<=|>>=|<=>|->\*|\.\*|::|<<|>>|<=|>=|==|!=|&&|\|\||\+\+|--|->|[+\-*/%&|^]=",
    )
    .unwrap()
});

static SINGLE_CHAR_OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+\-*/%=<>!&|^~?]").unwrap());

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,.]").unwrap());

pub(crate) fn operators_and_punctuation(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let mut taken = ExclusionSet::new();

    for m in MULTI_CHAR_OPERATOR.find_iter(text) {
        if canvas.is_free(m.range()) {
            canvas.paint(m.range(), Category::Operator);
            taken.insert(m.range());
        }
    }

    for m in WORD.find_iter(text) {
        if is_alternative_operator(m.as_str()) && !canvas.is_excluded(m.range()) {
            canvas.paint(m.range(), Category::Operator);
        }
    }

    for m in SINGLE_CHAR_OPERATOR.find_iter(text) {
        if canvas.is_free(m.range()) && !taken.overlaps(m.range()) {
            canvas.paint(m.range(), Category::Operator);
        }
    }

    for m in PUNCTUATION.find_iter(text) {
        if canvas.is_free(m.range()) && !taken.overlaps(m.range()) {
            canvas.paint(m.range(), Category::Punctuation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::passes::numbers;
    use crate::highlight::span::{LineState, Span};

    fn run(text: &str) -> Vec<(Category, &str)> {
        let mut canvas = Canvas::new(text);
        numbers::numeric_literals(&mut canvas);
        operators_and_punctuation(&mut canvas);
        canvas
            .finish(LineState::Normal)
            .spans
            .iter()
            .map(|span: &Span| (span.category, span.text(text)))
            .collect()
    }

    #[test]
    fn multi_char_operators_are_single_spans() {
        assert_eq!(
            run("a <<= b->c;"),
            vec![
                (Category::Operator, "<<="),
                (Category::Operator, "->"),
                (Category::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn numbers_keep_their_dot() {
        assert_eq!(
            run("x = 1.5, y;"),
            vec![
                (Category::Operator, "="),
                (Category::NumericLiteral, "1.5"),
                (Category::Punctuation, ","),
                (Category::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn alternative_tokens_are_whole_word_operators() {
        assert_eq!(
            run("a and not b; random"),
            vec![
                (Category::Operator, "and"),
                (Category::Operator, "not"),
                (Category::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn spaceship_and_scope() {
        assert_eq!(
            run("std::x <=> y"),
            vec![(Category::Operator, "::"), (Category::Operator, "<=>")]
        );
    }
}
