//! Per-line paint buffer shared by the passes.
//!
//! Each byte of the line carries at most one mark. Every paint call stamps its
//! bytes with a fresh id, so two adjacent paints of the same category still come
//! out as two spans. Painting over bytes painted earlier replaces their mark,
//! which is how later heuristics (e.g. function calls) refine earlier ones
//! (library functions); claimed bytes are protected by the exclusion set, which
//! every pass consults before painting.

use super::category::Category;
use super::exclusion::ExclusionSet;
use super::span::{LineHighlight, LineState, Span};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mark {
    category: Category,
    id: u32,
}

pub(crate) struct Canvas<'t> {
    text: &'t str,
    marks: Vec<Option<Mark>>,
    overlays: Vec<Span>,
    excluded: ExclusionSet,
    numbers: ExclusionSet,
    next_id: u32,
}

impl<'t> Canvas<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            marks: vec![None; text.len()],
            overlays: Vec::new(),
            excluded: ExclusionSet::new(),
            numbers: ExclusionSet::new(),
            next_id: 0,
        }
    }

    pub(crate) fn text(&self) -> &'t str {
        self.text
    }

    pub(crate) fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    pub(crate) fn is_excluded(&self, range: Range<usize>) -> bool {
        self.excluded.overlaps(range)
    }

    /// Neither claimed nor part of a numeric literal.
    pub(crate) fn is_free(&self, range: Range<usize>) -> bool {
        !self.excluded.overlaps(range.clone()) && !self.numbers.overlaps(range)
    }

    pub(crate) fn paint(&mut self, range: Range<usize>, category: Category) {
        if range.is_empty() {
            return;
        }
        let mark = Mark {
            category,
            id: self.next_id,
        };
        self.next_id += 1;
        for slot in &mut self.marks[range] {
            *slot = Some(mark);
        }
    }

    /// Paints `range` and removes it from consideration by every later pass.
    pub(crate) fn claim(&mut self, range: Range<usize>, category: Category) {
        self.paint(range.clone(), category);
        self.excluded.insert(range);
    }

    /// Claims `range` over anything already claimed inside it, dropping the
    /// overlays that lived there.
    pub(crate) fn claim_over(&mut self, range: Range<usize>, category: Category) {
        self.overlays
            .retain(|span| span.end() <= range.start || span.start >= range.end);
        self.claim(range, category);
    }

    pub(crate) fn paint_number(&mut self, range: Range<usize>) {
        self.paint(range.clone(), Category::NumericLiteral);
        self.numbers.insert(range);
    }

    /// Records a sub-highlight layered on top of an existing span.
    pub(crate) fn overlay(&mut self, range: Range<usize>, category: Category) {
        if !range.is_empty() {
            self.overlays
                .push(Span::new(category, range.start, range.end - range.start));
        }
    }

    pub(crate) fn finish(self, carry_out: LineState) -> LineHighlight {
        let mut spans: Vec<Span> = Vec::new();
        let mut run: Option<(Mark, usize)> = None;
        for (offset, mark) in self.marks.iter().enumerate() {
            match (run, mark) {
                (Some((current, _)), Some(mark)) if current == *mark => {}
                _ => {
                    if let Some((current, start)) = run.take() {
                        spans.push(Span::new(current.category, start, offset - start));
                    }
                    run = mark.map(|mark| (mark, offset));
                }
            }
        }
        if let Some((current, start)) = run {
            spans.push(Span::new(
                current.category,
                start,
                self.marks.len() - start,
            ));
        }
        spans.extend(self.overlays);
        spans.sort_by_key(|span| (span.start, span.category == Category::EscapeSequence));
        LineHighlight { spans, carry_out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_paints_stay_separate_spans() {
        let mut canvas = Canvas::new("((");
        canvas.paint(0..1, Category::BracketRound);
        canvas.paint(1..2, Category::BracketRound);
        let result = canvas.finish(LineState::Normal);
        assert_eq!(
            result.spans,
            vec![
                Span::new(Category::BracketRound, 0, 1),
                Span::new(Category::BracketRound, 1, 1),
            ]
        );
    }

    #[test]
    fn later_paint_splits_earlier_span() {
        let mut canvas = Canvas::new("abcdef");
        canvas.paint(0..6, Category::Keyword);
        canvas.paint(2..4, Category::Operator);
        let result = canvas.finish(LineState::Normal);
        assert_eq!(
            result.spans,
            vec![
                Span::new(Category::Keyword, 0, 2),
                Span::new(Category::Operator, 2, 2),
                Span::new(Category::Keyword, 4, 2),
            ]
        );
    }

    #[test]
    fn overlays_sort_after_their_literal() {
        let mut canvas = Canvas::new("\"a\\nb\"");
        canvas.claim(0..6, Category::StringLiteral);
        canvas.overlay(2..4, Category::EscapeSequence);
        let result = canvas.finish(LineState::Normal);
        assert_eq!(
            result.spans,
            vec![
                Span::new(Category::StringLiteral, 0, 6),
                Span::new(Category::EscapeSequence, 2, 2),
            ]
        );
    }

    #[test]
    fn claim_over_drops_inner_overlays() {
        let mut canvas = Canvas::new("[[\"\\n\"]]");
        canvas.claim(2..6, Category::StringLiteral);
        canvas.overlay(3..5, Category::EscapeSequence);
        canvas.claim_over(0..8, Category::Attribute);
        let result = canvas.finish(LineState::Normal);
        assert_eq!(result.spans, vec![Span::new(Category::Attribute, 0, 8)]);
    }

    #[test]
    fn numbers_are_not_free_but_not_excluded() {
        let mut canvas = Canvas::new("1.5");
        canvas.paint_number(0..3);
        assert!(!canvas.is_excluded(1..2));
        assert!(!canvas.is_free(1..2));
    }
}
