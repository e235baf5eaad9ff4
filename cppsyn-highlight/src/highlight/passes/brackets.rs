//! Brackets
//!
//! Round, curly and square brackets are unambiguous. `<` and `>` double as
//! comparison and shift operators, so they only become angle brackets under a
//! lexical heuristic:
//!
//! - the previous word is `template`
//! - an identifier comes right before and right after
//! - the next character is `,` or `>`
//! - (`>` only) an angle bracket opened earlier on the line is still unclosed
//!
//! A `<` or `>` that is part of `<=`, `>=`, `->`, `<=>`, `<<=`, `>>=` or `->*`
//! is never a bracket. Misclassifying `a < b` is a known limitation.

use super::operators::MULTI_CHAR_OPERATOR;
use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use crate::highlight::exclusion::ExclusionSet;
use crate::highlight::scan::{is_word_char, word_before};

const FUSED_WITH_ANGLE: &[&str] = &["<<=", ">>=", "<=>", "->*", "<=", ">=", "->"];

pub(crate) fn brackets(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for (i, byte) in text.bytes().enumerate() {
        let category = match byte {
            b'(' | b')' => Category::BracketRound,
            b'{' | b'}' => Category::BracketCurly,
            b'[' | b']' => Category::BracketSquare,
            _ => continue,
        };
        if canvas.is_free(i..i + 1) {
            canvas.paint(i..i + 1, category);
        }
    }
    angle_brackets(canvas);
}

fn angle_brackets(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let mut fused = ExclusionSet::new();
    for m in MULTI_CHAR_OPERATOR.find_iter(text) {
        if FUSED_WITH_ANGLE.contains(&m.as_str()) {
            fused.insert(m.range());
        }
    }

    let mut open = 0usize;
    for (i, byte) in text.bytes().enumerate() {
        if !matches!(byte, b'<' | b'>') || fused.contains(i) || !canvas.is_free(i..i + 1) {
            continue;
        }
        let before = text[..i].trim_end();
        let after = text[i + 1..].trim_start();
        let mut angle = word_before(before, before.len()) == "template"
            || (ends_with_word(before) && starts_with_word(after))
            || after.starts_with([',', '>']);
        if byte == b'>' && open > 0 {
            angle = true;
        }
        if angle {
            canvas.paint(i..i + 1, Category::BracketAngle);
            if byte == b'<' {
                open += 1;
            } else {
                open = open.saturating_sub(1);
            }
        }
    }
}

fn ends_with_word(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_word_char)
}

fn starts_with_word(text: &str) -> bool {
    text.chars().next().is_some_and(is_word_char)
}
