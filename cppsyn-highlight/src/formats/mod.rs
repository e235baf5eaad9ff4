//! Output formats
//!
//! Serializations of classified lines. JSON needs no module of its own: the
//! result types derive `Serialize`.

pub mod tag;

pub use tag::{serialize_document, serialize_line};
