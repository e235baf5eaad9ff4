//! String, raw string and character literals, plus the escape sequences inside them.

use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use crate::highlight::scan::{literal_at, next_boundary, LiteralKind};
use std::ops::Range;

pub(crate) fn strings_and_chars(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let mut i = 0;
    while i < text.len() {
        let skipped = canvas.excluded().skip(i);
        if skipped != i {
            i = skipped;
            continue;
        }
        // Whatever follows a code-level `//` belongs to the line comment.
        if text[i..].starts_with("//") {
            break;
        }
        let Some(literal) = literal_at(text, i) else {
            i = next_boundary(text, i);
            continue;
        };
        let category = match literal.kind {
            LiteralKind::Raw => Category::RawString,
            LiteralKind::String => Category::StringLiteral,
            LiteralKind::Char => Category::CharacterLiteral,
        };
        canvas.claim(literal.range.clone(), category);
        if literal.kind != LiteralKind::Raw {
            escape_sequences(canvas, literal.range.clone());
        }
        i = literal.range.end;
    }
}

/// Overlays escape-sequence spans on the literal occupying `literal`.
fn escape_sequences(canvas: &mut Canvas<'_>, literal: Range<usize>) {
    let bytes = &canvas.text().as_bytes()[..literal.end];
    let mut i = literal.start + 1;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        match escape_len(&bytes[i..]) {
            Some(len) => {
                canvas.overlay(i..i + len, Category::EscapeSequence);
                i += len;
            }
            None => i += 2,
        }
    }
}

/// Length of the escape sequence at the start of `bytes` (which begins with `\`).
fn escape_len(bytes: &[u8]) -> Option<usize> {
    let hex_run = |from: usize, max: usize| {
        bytes
            .iter()
            .skip(from)
            .take(max)
            .take_while(|b| b.is_ascii_hexdigit())
            .count()
    };
    match bytes.get(1)? {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'\'' | b'"' | b'?' => Some(2),
        b'0'..=b'7' => {
            let digits = bytes
                .iter()
                .skip(1)
                .take(3)
                .take_while(|b| (b'0'..=b'7').contains(*b))
                .count();
            Some(1 + digits)
        }
        b'x' => match hex_run(2, 2) {
            0 => None,
            n => Some(2 + n),
        },
        b'u' => (hex_run(2, 4) == 4).then_some(6),
        b'U' => (hex_run(2, 8) == 8).then_some(10),
        b'N' if bytes.get(2) == Some(&b'{') => {
            let close = bytes.iter().skip(3).position(|b| *b == b'}')?;
            (close > 0).then_some(3 + close + 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::span::{LineState, Span};

    fn run(text: &str) -> Vec<Span> {
        let mut canvas = Canvas::new(text);
        strings_and_chars(&mut canvas);
        canvas.finish(LineState::Normal).spans
    }

    #[test]
    fn escape_lengths() {
        assert_eq!(escape_len(br"\n"), Some(2));
        assert_eq!(escape_len(br"\0"), Some(2));
        assert_eq!(escape_len(br"\1234"), Some(4));
        assert_eq!(escape_len(br"\x4g"), Some(3));
        assert_eq!(escape_len(br"\x41A"), Some(4));
        assert_eq!(escape_len(br"\xg"), None);
        assert_eq!(escape_len(br"\u00e9"), Some(6));
        assert_eq!(escape_len(br"\u00e"), None);
        assert_eq!(escape_len(br"\U0001F600"), Some(10));
        assert_eq!(escape_len(br"\N{LATIN SMALL LETTER A}"), Some(24));
        assert_eq!(escape_len(br"\N{}"), None);
        assert_eq!(escape_len(br"\q"), None);
        assert_eq!(escape_len(br"\"), None);
    }

    #[test]
    fn string_with_nested_escape() {
        assert_eq!(
            run(r#""a\nb""#),
            vec![
                Span::new(Category::StringLiteral, 0, 6),
                Span::new(Category::EscapeSequence, 2, 2),
            ]
        );
    }

    #[test]
    fn double_backslash_is_one_escape() {
        assert_eq!(
            run(r#""\\0""#),
            vec![
                Span::new(Category::StringLiteral, 0, 5),
                Span::new(Category::EscapeSequence, 1, 2),
            ]
        );
    }

    #[test]
    fn quote_inside_char_literal_does_not_open_string() {
        assert_eq!(
            run(r#"'"' + "x""#),
            vec![
                Span::new(Category::CharacterLiteral, 0, 3),
                Span::new(Category::StringLiteral, 6, 3),
            ]
        );
    }

    #[test]
    fn raw_strings_have_no_escapes() {
        assert_eq!(
            run(r#"R"(a\nb)""#),
            vec![Span::new(Category::RawString, 0, 9)]
        );
    }

    #[test]
    fn apostrophe_in_line_comment_is_not_a_literal() {
        assert_eq!(run("x; // don't"), Vec::<Span>::new());
    }
}
