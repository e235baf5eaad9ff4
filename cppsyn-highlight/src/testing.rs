//! Testing utilities for classified lines
//!
//! Tests that index into `spans` by hand break every time a pass starts or
//! stops producing a span somewhere unrelated to what the test is about. The
//! fluent API here asserts on what matters instead: which category a piece of
//! text got, which categories are absent, and the carry state.
//!
//! ```rust,ignore
//! use cppsyn_highlight::testing::assert_line;
//! use cppsyn_highlight::{Category, LineState};
//!
//! assert_line(r#"std::string s = "x\n";"#)
//!     .has("std", Category::Namespace)
//!     .has("string", Category::LibraryType)
//!     .plain(" s ")
//!     .span_count(7)
//!     .span(4, |span| span.category(Category::StringLiteral).text(r#""x\n""#))
//!     .carry_out(LineState::Normal);
//! ```

use crate::highlight::{classify, Category, LineHighlight, LineState, Span};

/// Classify `text` from a [`LineState::Normal`] carry and start asserting.
pub fn assert_line(text: &str) -> LineAssertion<'_> {
    assert_line_with(text, LineState::Normal)
}

/// Classify `text` from an explicit carry and start asserting.
pub fn assert_line_with(text: &str, carry_in: LineState) -> LineAssertion<'_> {
    LineAssertion {
        text,
        highlight: classify(text, carry_in),
    }
}

pub struct LineAssertion<'t> {
    text: &'t str,
    highlight: LineHighlight,
}

impl<'t> LineAssertion<'t> {
    /// Every span, in order, as `(category, text)` pairs.
    pub fn spans(self, expected: &[(Category, &str)]) -> Self {
        let actual: Vec<(Category, &str)> = self
            .highlight
            .spans
            .iter()
            .map(|span| (span.category, span.text(self.text)))
            .collect();
        assert_eq!(actual, expected, "spans of {:?}", self.text);
        self
    }

    pub fn span_count(self, expected: usize) -> Self {
        assert_eq!(
            self.highlight.spans.len(),
            expected,
            "span count of {:?}: {:?}",
            self.text,
            self.highlight.spans
        );
        self
    }

    pub fn span<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SpanAssertion<'t>) -> SpanAssertion<'t>,
    {
        let Some(span) = self.highlight.spans.get(index).copied() else {
            panic!(
                "{:?} has {} spans, no span {}",
                self.text,
                self.highlight.spans.len(),
                index
            );
        };
        check(SpanAssertion {
            span,
            line: self.text,
        });
        self
    }

    /// Some span covers exactly `text` with `category`.
    pub fn has(self, text: &str, category: Category) -> Self {
        let found = self
            .highlight
            .spans
            .iter()
            .any(|span| span.category == category && span.text(self.text) == text);
        assert!(
            found,
            "expected {:?} as {} in {:?}, got {:?}",
            text,
            category,
            self.text,
            self.describe()
        );
        self
    }

    /// No span of `category` anywhere on the line.
    pub fn lacks(self, category: Category) -> Self {
        assert!(
            self.highlight.spans.iter().all(|span| span.category != category),
            "unexpected {} in {:?}: {:?}",
            category,
            self.text,
            self.describe()
        );
        self
    }

    /// The first occurrence of `text` is not covered by any span.
    pub fn plain(self, text: &str) -> Self {
        let Some(start) = self.text.find(text) else {
            panic!("{:?} does not occur in {:?}", text, self.text);
        };
        let range = start..start + text.len();
        let covered: Vec<&Span> = self
            .highlight
            .spans
            .iter()
            .filter(|span| span.start < range.end && range.start < span.end())
            .collect();
        assert!(
            covered.is_empty(),
            "expected {:?} to be plain in {:?}, covered by {:?}",
            text,
            self.text,
            covered
        );
        self
    }

    pub fn carry_out(self, expected: LineState) -> Self {
        assert_eq!(self.highlight.carry_out, expected, "carry out of {:?}", self.text);
        self
    }

    fn describe(&self) -> Vec<(Category, &str)> {
        self.highlight
            .spans
            .iter()
            .map(|span| (span.category, span.text(self.text)))
            .collect()
    }
}

pub struct SpanAssertion<'t> {
    span: Span,
    line: &'t str,
}

impl<'t> SpanAssertion<'t> {
    pub fn category(self, expected: Category) -> Self {
        assert_eq!(self.span.category, expected, "category of {:?}", self.span);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.span.text(self.line), expected, "text of {:?}", self.span);
        self
    }

    pub fn starts_at(self, expected: usize) -> Self {
        assert_eq!(self.span.start, expected, "start of {:?}", self.span);
        self
    }
}
