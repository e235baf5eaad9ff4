//! C/C++ span classification
//!
//! A line is classified by a fixed sequence of passes over a shared canvas. The
//! first passes recognise literal content (comments, strings, characters,
//! preprocessor lines) and *claim* it, adding it to the exclusion set so nothing
//! later can reinterpret it. The remaining passes paint keywords, numbers,
//! operators, brackets and names over whatever is still free.
//!
//! Pass order:
//!
//!  1. block comments (consumes and produces the carry state)
//!  2. raw strings, strings, char literals, and escape sequences inside them
//!  3. line comments
//!  4. preprocessor directives
//!  5. numeric literals
//!  6. keyword tables
//!  7. operators and punctuation
//!  8. brackets
//!  9. declared type names
//! 10. function names
//! 11. member access
//! 12. namespaces
//! 13. labels
//! 14. attributes

mod canvas;
mod category;
mod classifier;
mod exclusion;
mod passes;
mod scan;
mod span;
pub mod tables;

pub use category::{Category, UnknownCategory};
pub use classifier::classify;
pub use exclusion::ExclusionSet;
pub use span::{LineHighlight, LineState, Span};
