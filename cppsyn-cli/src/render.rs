//! Rendering of a highlighted document in the configured output format.

use cppsyn_config::{OutputConfig, OutputFormat};
use cppsyn_highlight::formats::tag::serialize_line;
use cppsyn_highlight::{HighlightedDocument, LineHighlight, Rgb, Style, StyleRegistry};
use crossterm::style::{Attribute, Color, ContentStyle};
use serde_json::json;

pub fn render(
    doc: &HighlightedDocument,
    output: &OutputConfig,
    registry: &StyleRegistry,
) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::Json => serde_json::to_string_pretty(&document_to_json(doc)),
        OutputFormat::Tag => Ok(render_lines(doc, output.line_numbers, serialize_line)),
        OutputFormat::Ansi => Ok(render_lines(doc, output.line_numbers, |text, highlight| {
            ansi_line(text, highlight, registry)
        })),
    }
}

fn render_lines<F>(doc: &HighlightedDocument, line_numbers: bool, render_line: F) -> String
where
    F: Fn(&str, &LineHighlight) -> String,
{
    let width = doc.len().to_string().len();
    doc.iter()
        .enumerate()
        .map(|(index, (text, highlight))| {
            let body = render_line(text, highlight);
            if line_numbers {
                format!("{:>width$} | {}", index + 1, body)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One object per line: number, text, spans and the carry into the next line.
fn document_to_json(doc: &HighlightedDocument) -> serde_json::Value {
    json!(doc
        .iter()
        .enumerate()
        .map(|(index, (text, highlight))| {
            json!({
                "line": index + 1,
                "text": text,
                "spans": highlight.spans,
                "carry_out": highlight.carry_out,
            })
        })
        .collect::<Vec<_>>())
}

/// Cuts the line at every span edge and paints each piece with the style of
/// its innermost category.
fn ansi_line(text: &str, highlight: &LineHighlight, registry: &StyleRegistry) -> String {
    let mut cuts: Vec<usize> = highlight
        .spans
        .iter()
        .flat_map(|span| [span.start, span.end()])
        .chain([0, text.len()])
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut out = String::with_capacity(text.len());
    for pair in cuts.windows(2) {
        let piece = &text[pair[0]..pair[1]];
        match highlight.category_at(pair[0]) {
            Some(category) => out.push_str(&paint(piece, registry.style_of(category))),
            None => out.push_str(piece),
        }
    }
    out
}

fn paint(text: &str, style: Style) -> String {
    let Rgb(r, g, b) = style.color;
    let mut content = ContentStyle::new();
    content.foreground_color = Some(Color::Rgb { r, g, b });
    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.italic {
        content.attributes.set(Attribute::Italic);
    }
    content.apply(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(format: OutputFormat, line_numbers: bool) -> OutputConfig {
        OutputConfig {
            format,
            line_numbers,
        }
    }

    #[test]
    fn tag_with_line_numbers() {
        let doc = HighlightedDocument::new("x;\ny;");
        let rendered = render(
            &doc,
            &output(OutputFormat::Tag, true),
            &StyleRegistry::default(),
        )
        .unwrap();
        assert_eq!(
            rendered,
            "1 | x<punctuation>;</punctuation>\n2 | y<punctuation>;</punctuation>"
        );
    }

    #[test]
    fn json_lists_lines_and_spans() {
        let doc = HighlightedDocument::new("/* a\nb */ int");
        let rendered = render(
            &doc,
            &output(OutputFormat::Json, false),
            &StyleRegistry::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[0]["carry_out"]["inside-block-comment"]["doc"], false);
        assert_eq!(value[1]["spans"][1]["category"], "primitive-type");
        assert_eq!(value[1]["carry_out"], "normal");
    }

    #[test]
    fn ansi_keeps_plain_text_unstyled() {
        let doc = HighlightedDocument::new("x = 1;");
        let rendered = render(
            &doc,
            &output(OutputFormat::Ansi, false),
            &StyleRegistry::default(),
        )
        .unwrap();
        assert!(rendered.starts_with("x "));
        assert!(rendered.contains('1'));
    }

    #[test]
    fn ansi_nested_escape_splits_the_literal() {
        let text = r#""a\nb""#;
        let highlight = cppsyn_highlight::classify(text, Default::default());
        let rendered = ansi_line(text, &highlight, &StyleRegistry::default());
        for piece in [r#""a"#, r"\n", r#"b""#] {
            assert!(rendered.contains(piece), "{rendered:?} lacks {piece:?}");
        }
    }
}
