//! Spans and per-line results

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One classified run of a line, in UTF-8 byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub category: Category,
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(category: Category, start: usize, len: usize) -> Self {
        Self {
            category,
            start,
            len,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The slice of `line` this span covers.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range()]
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }
}

/// Carry state threaded from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineState {
    #[default]
    Normal,
    /// An unterminated block comment is still open. `doc` records whether it was
    /// opened with `/**` or `/*!`.
    InsideBlockComment { doc: bool },
}

impl LineState {
    pub fn is_inside_comment(self) -> bool {
        matches!(self, LineState::InsideBlockComment { .. })
    }

    /// Category used to paint the body of a comment continued from a previous line.
    pub(crate) fn continuation_category(self) -> Category {
        match self {
            LineState::InsideBlockComment { doc: true } => Category::DocComment,
            _ => Category::BlockComment,
        }
    }
}

/// The result of classifying one line.
///
/// Spans are sorted by start offset. Apart from escape sequences nested in a
/// string or char literal, no two spans overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineHighlight {
    pub spans: Vec<Span>,
    pub carry_out: LineState,
}

impl LineHighlight {
    /// Category of the innermost span covering `offset`, if any.
    pub fn category_at(&self, offset: usize) -> Option<Category> {
        self.spans
            .iter()
            .filter(|span| span.range().contains(&offset))
            .last()
            .map(|span| span.category)
    }

    /// Spans excluding nested escape sequences.
    pub fn base_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans
            .iter()
            .filter(|span| span.category != Category::EscapeSequence || !self.is_nested(span))
    }

    fn is_nested(&self, inner: &Span) -> bool {
        self.spans
            .iter()
            .any(|outer| outer != inner && outer.category.is_escapable_literal() && outer.contains(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_normal() {
        assert_eq!(LineState::default(), LineState::Normal);
        assert!(!LineState::Normal.is_inside_comment());
        assert!(LineState::InsideBlockComment { doc: false }.is_inside_comment());
    }

    #[test]
    fn category_at_prefers_nested_span() {
        let highlight = LineHighlight {
            spans: vec![
                Span::new(Category::StringLiteral, 0, 6),
                Span::new(Category::EscapeSequence, 2, 2),
            ],
            carry_out: LineState::Normal,
        };
        assert_eq!(highlight.category_at(0), Some(Category::StringLiteral));
        assert_eq!(highlight.category_at(3), Some(Category::EscapeSequence));
        assert_eq!(highlight.category_at(6), None);
        assert_eq!(highlight.base_spans().count(), 1);
    }

    #[test]
    fn span_text_slices_line() {
        let span = Span::new(Category::Keyword, 4, 3);
        assert_eq!(span.text("for int x"), "int");
        assert_eq!(span.end(), 7);
    }
}
