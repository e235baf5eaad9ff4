//! Line classification entry point

use super::canvas::Canvas;
use super::passes::{block_comments, BlockComments, PASSES};
use super::span::{LineHighlight, LineState};

/// Classifies one line of C/C++ source.
///
/// `text` is the line without its trailing newline; `carry_in` is the
/// `carry_out` of the previous line ([`LineState::Normal`] for the first line).
/// The function is total and pure: the same arguments always give the same
/// result, and malformed code only ever degrades the classification.
pub fn classify(text: &str, carry_in: LineState) -> LineHighlight {
    let mut canvas = Canvas::new(text);
    let carry_out = match block_comments(&mut canvas, carry_in) {
        BlockComments::WholeLine(state) => return canvas.finish(state),
        BlockComments::Continue(state) => state,
    };
    for pass in PASSES {
        pass(&mut canvas);
    }
    canvas.finish(carry_out)
}
