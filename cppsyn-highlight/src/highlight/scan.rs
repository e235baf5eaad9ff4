//! Character-level helpers shared by the passes.
//!
//! All offsets are byte offsets. The scanners only ever stop on ASCII bytes, so
//! every offset they return is a char boundary.

use super::exclusion::ExclusionSet;
use std::ops::Range;

/// Longest raw-string delimiter C++ allows.
const MAX_RAW_DELIMITER: usize = 16;

/// Encoding prefixes that may precede the `R` of a raw string.
const RAW_PREFIXES: &[&str] = &["R", "u8R", "uR", "UR", "LR"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    Raw,
    String,
    Char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Literal {
    pub kind: LiteralKind,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentMarker {
    Line,
    Block,
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub(crate) fn char_before(text: &str, offset: usize) -> Option<char> {
    text[..offset].chars().next_back()
}

pub(crate) fn char_after(text: &str, offset: usize) -> Option<char> {
    text[offset..].chars().next()
}

/// The run of word characters ending at `offset`.
pub(crate) fn word_before(text: &str, offset: usize) -> &str {
    let head = &text[..offset];
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(offset, |(i, _)| i);
    &head[start..]
}

/// Offset just past the char starting at `offset`.
pub(crate) fn next_boundary(text: &str, offset: usize) -> usize {
    char_after(text, offset).map_or(text.len(), |c| offset + c.len_utf8())
}

/// Recognises a raw string, string or char literal starting at `start`.
///
/// Unterminated string and char literals run to the end of the line. An unclosed
/// raw string is not recognised: raw strings never continue onto the next line.
pub(crate) fn literal_at(text: &str, start: usize) -> Option<Literal> {
    let bytes = text.as_bytes();
    match bytes.get(start)? {
        b'R' if bytes.get(start + 1) == Some(&b'"') => raw_string_at(text, start),
        b'"' => Some(Literal {
            kind: LiteralKind::String,
            range: start..quoted_end(bytes, start, b'"'),
        }),
        b'\'' if !word_before(text, start).starts_with(|c: char| c.is_ascii_digit()) => {
            Some(Literal {
                kind: LiteralKind::Char,
                range: start..quoted_end(bytes, start, b'\''),
            })
        }
        _ => None,
    }
}

/// End of a quoted literal opened at `start`, honouring backslash escapes.
fn quoted_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn raw_string_at(text: &str, start: usize) -> Option<Literal> {
    let prefix = word_before(text, start + 1);
    if !RAW_PREFIXES.contains(&prefix) {
        return None;
    }
    let open = start + 2;
    let delimiter_len = text[open..]
        .bytes()
        .take(MAX_RAW_DELIMITER + 1)
        .position(|b| b == b'(')?;
    let delimiter = &text[open..open + delimiter_len];
    if delimiter
        .bytes()
        .any(|b| b.is_ascii_whitespace() || matches!(b, b'\\' | b')' | b'"'))
    {
        return None;
    }
    let body = open + delimiter_len + 1;
    let closing = format!("){delimiter}\"");
    let end = body + text[body..].find(&closing)? + closing.len();
    // The encoding prefix belongs to the literal.
    Some(Literal {
        kind: LiteralKind::Raw,
        range: start + 1 - prefix.len()..end,
    })
}

/// Finds the first comment opener in code at or after `from`.
///
/// Claimed ranges and literals are stepped over, so markers inside strings never
/// count. Block openers are reported only when `block` is set; a line comment
/// always ends the search since nothing after it is code.
pub(crate) fn find_comment_marker(
    text: &str,
    from: usize,
    excluded: &ExclusionSet,
    block: bool,
) -> Option<(usize, CommentMarker)> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        let skipped = excluded.skip(i);
        if skipped != i {
            i = skipped;
            continue;
        }
        if bytes[i] == b'/' {
            match bytes.get(i + 1) {
                Some(b'/') => return Some((i, CommentMarker::Line)),
                Some(b'*') if block => return Some((i, CommentMarker::Block)),
                _ => {}
            }
        }
        match literal_at(text, i) {
            Some(literal) => i = literal.range.end,
            None => i = next_boundary(text, i),
        }
    }
    None
}
