//! `[[...]]` attributes, claimed as a unit.
//!
//! Only the delimiters have to be free: literals and comments inside the
//! brackets become part of the attribute.

use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[[^\]]+\]\]").unwrap());

pub(crate) fn attributes(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for m in ATTRIBUTE.find_iter(text) {
        let (start, end) = (m.start(), m.end());
        if !canvas.is_excluded(start..start + 2) && !canvas.is_excluded(end - 2..end) {
            canvas.claim_over(m.range(), Category::Attribute);
        }
    }
}
