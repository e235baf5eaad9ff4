//! Document-level highlighting
//!
//! [`classify`] only ever sees one line. A buffer of many lines has to thread
//! the carry state from each line into the next and, after an edit, reclassify
//! every following line whose carry-in changed. [`HighlightedDocument`] does that
//! bookkeeping: it caches each line's result together with the carry it was
//! computed from, and an edit cascades forward until a line's cached carry-in
//! matches again.

use crate::highlight::{classify, LineHighlight, LineState};
use std::ops::Range;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("line {index} is out of range for a document of {len} lines")]
    LineOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone)]
struct Line {
    text: String,
    carry_in: LineState,
    highlight: LineHighlight,
}

impl Line {
    fn classified(text: String, carry_in: LineState) -> Self {
        let highlight = classify(&text, carry_in);
        Self {
            text,
            carry_in,
            highlight,
        }
    }
}

/// Lines of a C/C++ buffer with their cached classification.
#[derive(Debug, Clone, Default)]
pub struct HighlightedDocument {
    lines: Vec<Line>,
}

impl HighlightedDocument {
    /// Splits `source` on `\n` (dropping a trailing `\r` from each line) and
    /// classifies every line in order.
    pub fn new(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut carry = LineState::Normal;
        for raw in source.split('\n') {
            let text = raw.strip_suffix('\r').unwrap_or(raw).to_string();
            let line = Line::classified(text, carry);
            carry = line.highlight.carry_out;
            lines.push(line);
        }
        debug!(lines = lines.len(), "classified document");
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Result<&LineHighlight, DocumentError> {
        self.get(index).map(|line| &line.highlight)
    }

    pub fn text(&self, index: usize) -> Result<&str, DocumentError> {
        self.get(index).map(|line| line.text.as_str())
    }

    /// The carry state line `index` was classified with.
    pub fn carry_in(&self, index: usize) -> Result<LineState, DocumentError> {
        self.get(index).map(|line| line.carry_in)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineHighlight)> {
        self.lines
            .iter()
            .map(|line| (line.text.as_str(), &line.highlight))
    }

    /// Replaces the text of line `index`. Returns the lines that were reclassified.
    pub fn replace_line(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Range<usize>, DocumentError> {
        self.check(index)?;
        self.lines[index].text = text.into();
        Ok(self.cascade(index, true))
    }

    /// Inserts a line before `index` (`index == len()` appends).
    pub fn insert_line(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Range<usize>, DocumentError> {
        if index > self.lines.len() {
            return Err(self.out_of_range(index));
        }
        let carry = self.expected_carry(index);
        self.lines.insert(index, Line::classified(text.into(), carry));
        let rest = self.cascade(index + 1, false);
        Ok(index..rest.end)
    }

    /// Removes line `index`. The returned range indexes the document after removal
    /// and is empty when no following line changed.
    pub fn remove_line(&mut self, index: usize) -> Result<Range<usize>, DocumentError> {
        self.check(index)?;
        self.lines.remove(index);
        Ok(self.cascade(index, false))
    }

    /// Reclassifies from `start` while lines see a different carry-in than they
    /// were last classified with. `force` reclassifies `start` unconditionally.
    fn cascade(&mut self, start: usize, force: bool) -> Range<usize> {
        let mut index = start;
        while index < self.lines.len() {
            let carry = self.expected_carry(index);
            let line = &mut self.lines[index];
            if line.carry_in == carry && !(force && index == start) {
                break;
            }
            if line.carry_in != carry {
                trace!(line = index, from = ?line.carry_in, to = ?carry, "carry changed");
            }
            *line = Line::classified(std::mem::take(&mut line.text), carry);
            index += 1;
        }
        if index > start {
            debug!(start, end = index, "reclassified lines");
        }
        start..index
    }

    fn expected_carry(&self, index: usize) -> LineState {
        match index.checked_sub(1).and_then(|prev| self.lines.get(prev)) {
            Some(prev) => prev.highlight.carry_out,
            None => LineState::Normal,
        }
    }

    fn get(&self, index: usize) -> Result<&Line, DocumentError> {
        self.lines.get(index).ok_or_else(|| self.out_of_range(index))
    }

    fn check(&self, index: usize) -> Result<(), DocumentError> {
        self.get(index).map(|_| ())
    }

    fn out_of_range(&self, index: usize) -> DocumentError {
        DocumentError::LineOutOfRange {
            index,
            len: self.lines.len(),
        }
    }
}
