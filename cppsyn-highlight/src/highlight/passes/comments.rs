//! Block and line comments

use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use crate::highlight::scan::{find_comment_marker, CommentMarker};
use crate::highlight::span::LineState;

/// Outcome of the block-comment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockComments {
    /// The whole line is inside a comment carried in from above; nothing else runs.
    WholeLine(LineState),
    /// Classification continues; the value is the carry for the next line.
    Continue(LineState),
}

pub(crate) fn block_comments(canvas: &mut Canvas<'_>, carry_in: LineState) -> BlockComments {
    let text = canvas.text();
    let mut from = 0;

    if carry_in.is_inside_comment() {
        let category = carry_in.continuation_category();
        match text.find("*/") {
            None => {
                canvas.claim(0..text.len(), category);
                return BlockComments::WholeLine(carry_in);
            }
            Some(close) => {
                canvas.claim(0..close + 2, category);
                from = close + 2;
            }
        }
    }

    while let Some((start, CommentMarker::Block)) =
        find_comment_marker(text, from, canvas.excluded(), true)
    {
        let doc = is_doc_opener(text.as_bytes(), start);
        let category = if doc {
            Category::DocComment
        } else {
            Category::BlockComment
        };
        match text[start + 2..].find("*/") {
            None => {
                canvas.claim(start..text.len(), category);
                return BlockComments::Continue(LineState::InsideBlockComment { doc });
            }
            Some(close) => {
                let end = start + 2 + close + 2;
                canvas.claim(start..end, category);
                from = end;
            }
        }
    }
    BlockComments::Continue(LineState::Normal)
}

/// `/**` and `/*!` open doc comments, including the empty `/**/`.
fn is_doc_opener(bytes: &[u8], start: usize) -> bool {
    matches!(bytes.get(start + 2), Some(b'*' | b'!'))
}

pub(crate) fn line_comments(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    if let Some((start, _)) = find_comment_marker(text, 0, canvas.excluded(), false) {
        let rest = &text[start..];
        let category = if rest.starts_with("///") || rest.starts_with("//!") {
            Category::DocComment
        } else {
            Category::LineComment
        };
        canvas.claim(start..text.len(), category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::span::Span;

    fn run(text: &str, carry_in: LineState) -> (BlockComments, Vec<Span>) {
        let mut canvas = Canvas::new(text);
        let outcome = block_comments(&mut canvas, carry_in);
        line_comments(&mut canvas);
        (outcome, canvas.finish(LineState::Normal).spans)
    }

    #[test]
    fn continuation_without_close_claims_whole_line() {
        let (outcome, spans) = run("still going", LineState::InsideBlockComment { doc: true });
        assert_eq!(
            outcome,
            BlockComments::WholeLine(LineState::InsideBlockComment { doc: true })
        );
        assert_eq!(spans, vec![Span::new(Category::DocComment, 0, 11)]);
    }

    #[test]
    fn continuation_close_then_new_comment() {
        let (outcome, spans) = run(
            "end */ x /* a */ y /*! open",
            LineState::InsideBlockComment { doc: false },
        );
        assert_eq!(
            outcome,
            BlockComments::Continue(LineState::InsideBlockComment { doc: true })
        );
        assert_eq!(
            spans,
            vec![
                Span::new(Category::BlockComment, 0, 6),
                Span::new(Category::BlockComment, 9, 7),
                Span::new(Category::DocComment, 19, 8),
            ]
        );
    }

    #[test]
    fn close_marker_cannot_reuse_opener_star() {
        let (outcome, _) = run("/*/ still open", LineState::Normal);
        assert_eq!(
            outcome,
            BlockComments::Continue(LineState::InsideBlockComment { doc: false })
        );
    }

    #[test]
    fn empty_starred_comment_is_doc() {
        let (outcome, spans) = run("/**/ /* */", LineState::Normal);
        assert_eq!(outcome, BlockComments::Continue(LineState::Normal));
        assert_eq!(
            spans,
            vec![
                Span::new(Category::DocComment, 0, 4),
                Span::new(Category::BlockComment, 5, 5),
            ]
        );
    }

    #[test]
    fn line_comment_after_block_comment() {
        let (outcome, spans) = run("/* a */ //! b", LineState::Normal);
        assert_eq!(outcome, BlockComments::Continue(LineState::Normal));
        assert_eq!(
            spans,
            vec![
                Span::new(Category::BlockComment, 0, 7),
                Span::new(Category::DocComment, 8, 5),
            ]
        );
    }

    #[test]
    fn block_opener_inside_line_comment_is_ignored() {
        let (outcome, spans) = run("// see /* here", LineState::Normal);
        assert_eq!(outcome, BlockComments::Continue(LineState::Normal));
        assert_eq!(spans, vec![Span::new(Category::LineComment, 0, 14)]);
    }
}
