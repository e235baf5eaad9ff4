//! Exclusion ranges
//!
//! Text claimed by an earlier pass (comments, literals, preprocessor lines,
//! attributes) is recorded here so later passes leave it alone. Ranges are kept
//! sorted and disjoint, so every query is a binary search.

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ranges: Vec<Range<usize>>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a half-open range, merging it with any ranges it overlaps or touches.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.ranges.partition_point(|r| r.end < range.start);
        let mut last = first;
        let mut merged = range;
        while last < self.ranges.len() && self.ranges[last].start <= merged.end {
            merged.start = merged.start.min(self.ranges[last].start);
            merged.end = merged.end.max(self.ranges[last].end);
            last += 1;
        }
        self.ranges.splice(first..last, std::iter::once(merged));
    }

    pub fn contains(&self, offset: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges.get(idx).is_some_and(|r| r.start <= offset)
    }

    /// True if any claimed byte falls inside `range`. An empty range is treated as
    /// a point query at its start.
    pub fn overlaps(&self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return self.contains(range.start);
        }
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges.get(idx).is_some_and(|r| r.start < range.end)
    }

    /// End of the claimed range containing `offset`, or `offset` itself when free.
    pub fn skip(&self, offset: usize) -> usize {
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        match self.ranges.get(idx) {
            Some(r) if r.start <= offset => r.end,
            _ => offset,
        }
    }

    /// The unclaimed sub-ranges of `range`, in order.
    pub fn gaps(&self, range: Range<usize>) -> Vec<Range<usize>> {
        let mut gaps = Vec::new();
        let mut cursor = range.start;
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        for claimed in &self.ranges[idx..] {
            if claimed.start >= range.end {
                break;
            }
            if claimed.start > cursor {
                gaps.push(cursor..claimed.start);
            }
            cursor = cursor.max(claimed.end);
        }
        if cursor < range.end {
            gaps.push(cursor..range.end);
        }
        gaps
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }
}
