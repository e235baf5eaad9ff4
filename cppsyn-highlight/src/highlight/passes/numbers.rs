//! Numeric literals
//!
//! Every shape is tried over the whole line, then the leftmost-longest
//! candidates win, so `01.5` is a single float rather than an octal `01`
//! followed by `.5`.

use crate::highlight::canvas::Canvas;
use crate::highlight::scan::{char_after, char_before, is_word_char};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// The regex carries its own word boundaries.
    Bounded,
    /// Ends in `.` or a digit run that may end in `.`; must not run into a word.
    OpenEnd,
    /// Starts with `.`; must not continue a word or another number.
    OpenStart,
}

static NUMBER_SHAPES: Lazy<Vec<(Regex, Edge)>> = Lazy::new(|| {
    // A `'` may separate any two digits: 1'000'000, 0xFF'FF.
    [
        // Hexadecimal
        (r"\b0[xX][0-9a-fA-F](?:'?[0-9a-fA-F])*[uUlL]*\b", Edge::Bounded),
        // Binary
        (r"\b0[bB][01](?:'?[01])*[uUlL]*\b", Edge::Bounded),
        // Octal
        (r"\b0(?:'?[0-7])+[uUlL]*\b", Edge::Bounded),
        // 1.5, 1., 1.5e-3f
        (
            r"\b[0-9](?:'?[0-9])*\.(?:[0-9](?:'?[0-9])*)?(?:[eE][+-]?[0-9]+)?[fFlL]?",
            Edge::OpenEnd,
        ),
        // .5, .5e3
        (r"\.[0-9](?:'?[0-9])*(?:[eE][+-]?[0-9]+)?[fFlL]?\b", Edge::OpenStart),
        // 1e10
        (r"\b[0-9](?:'?[0-9])*[eE][+-]?[0-9]+[fFlL]?\b", Edge::Bounded),
        // Decimal
        (r"\b[0-9](?:'?[0-9])*[uUlL]*\b", Edge::Bounded),
    ]
    .into_iter()
    .map(|(pattern, edge)| (Regex::new(pattern).unwrap(), edge))
    .collect()
});

pub(crate) fn numeric_literals(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let mut candidates: Vec<Range<usize>> = Vec::new();
    for (regex, edge) in NUMBER_SHAPES.iter() {
        for m in regex.find_iter(text) {
            let fits = match edge {
                Edge::Bounded => true,
                Edge::OpenEnd => !char_after(text, m.end()).is_some_and(is_word_char),
                Edge::OpenStart => {
                    !char_before(text, m.start()).is_some_and(|c| is_word_char(c) || c == '.')
                }
            };
            if fits && !canvas.is_excluded(m.range()) {
                candidates.push(m.range());
            }
        }
    }

    candidates.sort_by_key(|range| (range.start, Reverse(range.end)));
    let mut covered = 0;
    for range in candidates {
        if range.start >= covered {
            covered = range.end;
            canvas.paint_number(range);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::category::Category;
    use crate::highlight::span::LineState;

    fn numbers(text: &str) -> Vec<&str> {
        let mut canvas = Canvas::new(text);
        numeric_literals(&mut canvas);
        canvas
            .finish(LineState::Normal)
            .spans
            .iter()
            .filter(|span| span.category == Category::NumericLiteral)
            .map(|span| span.text(text))
            .collect()
    }

    #[test]
    fn integer_shapes() {
        assert_eq!(numbers("0x1Fu + 0b101 + 017 + 42UL"), ["0x1Fu", "0b101", "017", "42UL"]);
    }

    #[test]
    fn float_shapes() {
        assert_eq!(numbers("1.5f 2. .25 3e8 6.02e23L"), ["1.5f", "2.", ".25", "3e8", "6.02e23L"]);
    }

    #[test]
    fn digit_separators_stay_inside_one_literal() {
        assert_eq!(
            numbers("1'000'000 + 0xFF'FF + 0b1010'0101 + 3'141.5"),
            ["1'000'000", "0xFF'FF", "0b1010'0101", "3'141.5"]
        );
    }

    #[test]
    fn longest_candidate_wins() {
        assert_eq!(numbers("x = 01.5;"), ["01.5"]);
    }

    #[test]
    fn digits_inside_identifiers_are_not_numbers() {
        assert_eq!(numbers("int32_t x1 = u8;"), Vec::<&str>::new());
    }

    #[test]
    fn dot_after_a_number_does_not_start_a_fraction() {
        assert_eq!(numbers("v = 1.5.3"), ["1.5", "3"]);
    }
}
