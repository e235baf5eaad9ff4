//! XML-like tag serialization
//!
//! Wraps every span in a tag named after its category. Escape sequences are
//! nested inside the literal that contains them; unclassified text is emitted
//! between tags.
//!
//! ```text
//! <primitive-type>int</primitive-type> n <operator>=</operator> <function-call>f</function-call><bracket-round>(</bracket-round>...
//! <string-literal>"a<escape-sequence>\n</escape-sequence>b"</string-literal>
//! ```

use crate::document::HighlightedDocument;
use crate::highlight::{LineHighlight, Span};

struct TagSerializer<'t> {
    text: &'t str,
    output: String,
    /// Byte offset of the first character not yet written.
    pos: usize,
    /// Literal whose closing tag is still pending.
    open: Option<Span>,
}

impl<'t> TagSerializer<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            output: String::new(),
            pos: 0,
            open: None,
        }
    }

    fn text_until(&mut self, end: usize) {
        if end > self.pos {
            self.output.push_str(&escape_xml(&self.text[self.pos..end]));
            self.pos = end;
        }
    }

    fn close_open(&mut self) {
        if let Some(outer) = self.open.take() {
            self.text_until(outer.end());
            self.output.push_str(&format!("</{}>", outer.category));
        }
    }

    fn span(&mut self, span: &Span) {
        if self.open.is_some_and(|outer| !outer.contains(span)) {
            self.close_open();
        }
        self.text_until(span.start);
        if self.open.is_none() && span.category.is_escapable_literal() {
            self.output.push_str(&format!("<{}>", span.category));
            self.open = Some(*span);
            return;
        }
        self.output.push_str(&format!("<{}>", span.category));
        self.text_until(span.end());
        self.output.push_str(&format!("</{}>", span.category));
    }

    fn finish(mut self) -> String {
        self.close_open();
        self.text_until(self.text.len());
        self.output
    }
}

/// Serializes one classified line.
pub fn serialize_line(text: &str, highlight: &LineHighlight) -> String {
    let mut serializer = TagSerializer::new(text);
    for span in &highlight.spans {
        serializer.span(span);
    }
    serializer.finish()
}

/// Serializes every line of `doc`, separated by newlines.
pub fn serialize_document(doc: &HighlightedDocument) -> String {
    doc.iter()
        .map(|(text, highlight)| serialize_line(text, highlight))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{classify, LineState};

    fn tag(text: &str) -> String {
        serialize_line(text, &classify(text, LineState::Normal))
    }

    #[test]
    fn wraps_spans_and_keeps_plain_text() {
        assert_eq!(
            tag("return x;"),
            "<control-keyword>return</control-keyword> x<punctuation>;</punctuation>"
        );
    }

    #[test]
    fn nests_escapes_in_their_literal() {
        assert_eq!(
            tag(r#""a\nb""#),
            r#"<string-literal>"a<escape-sequence>\n</escape-sequence>b"</string-literal>"#
        );
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            tag("a && b"),
            "a <operator>&amp;&amp;</operator> b"
        );
    }

    #[test]
    fn empty_line() {
        assert_eq!(tag(""), "");
    }

    #[test]
    fn joins_document_lines() {
        let doc = HighlightedDocument::new("/* a\nb */");
        assert_eq!(
            serialize_document(&doc),
            "<block-comment>/* a</block-comment>\n<block-comment>b */</block-comment>"
        );
    }
}
