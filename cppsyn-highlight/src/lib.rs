//! # cppsyn-highlight
//!
//! Line-oriented syntax classification for C and C++ source.
//!
//! The classifier takes one line of text plus the carry state left by the previous
//! line (are we inside a `/* ... */` comment?) and returns the classified spans for
//! that line together with the carry state for the next one. It is a pure function:
//! a renderer can re-run it on any line, in any order, as long as it threads the
//! carry value.
//!
//! Layout
//!
//!   highlight      The classifier: categories, spans, exclusion ranges, and the ordered passes
//!   registry       Category -> display style lookup
//!   document       Carry threading and cascading reclassification over a whole buffer
//!   completion     Identifier harvesting for autocomplete
//!   formats        Tagged-text serialization of classified lines
//!   testing        Fluent assertions over classified lines
//!
//! This is lexical classification for presentation only. There is no AST, no symbol
//! resolution, and malformed input is never rejected.

pub mod completion;
pub mod document;
pub mod formats;
pub mod highlight;
pub mod registry;
pub mod testing;

pub use document::{DocumentError, HighlightedDocument};
pub use highlight::{classify, Category, LineHighlight, LineState, Span};
pub use registry::{style_of, Rgb, Style, StyleError, StyleRegistry};
