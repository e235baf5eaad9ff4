//! The classification passes, in the order [`super::classify`] runs them.
//!
//! Block comments run separately because they consume the carry state and can
//! end classification early. Every other pass has the same shape: look at the
//! line, consult the canvas exclusions, paint.

mod attributes;
mod brackets;
mod comments;
mod literals;
mod names;
mod numbers;
mod operators;
mod preprocessor;
mod words;

use super::canvas::Canvas;

pub(crate) use comments::{block_comments, BlockComments};

pub(crate) type Pass = fn(&mut Canvas<'_>);

/// Passes 2 through 14.
pub(crate) const PASSES: &[Pass] = &[
    literals::strings_and_chars,
    comments::line_comments,
    preprocessor::directives,
    numbers::numeric_literals,
    words::keywords,
    operators::operators_and_punctuation,
    brackets::brackets,
    names::type_names,
    names::function_names,
    names::member_access,
    names::namespaces,
    names::labels,
    attributes::attributes,
];
