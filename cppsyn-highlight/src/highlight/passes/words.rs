//! Keyword-family matching
//!
//! Words are matched whole: a maximal run of word characters is looked up in
//! the keyword tables, so `interval` never yields `int`.

use crate::highlight::canvas::Canvas;
use crate::highlight::tables::keyword_category;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

pub(crate) fn keywords(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for m in WORD.find_iter(text) {
        if let Some(category) = keyword_category(m.as_str()) {
            if !canvas.is_excluded(m.range()) {
                canvas.paint(m.range(), category);
            }
        }
    }
}
