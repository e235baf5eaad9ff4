//! Preprocessor directives
//!
//! `#name` becomes the directive keyword and the rest of the line its body. Parts
//! of the body already claimed (a quoted include path, a trailing comment) keep
//! their own category.

use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#)\s*\w+").unwrap());

pub(crate) fn directives(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let Some(caps) = DIRECTIVE.captures(text) else {
        return;
    };
    let (Some(whole), Some(hash)) = (caps.get(0), caps.get(1)) else {
        return;
    };
    let keyword = hash.start()..whole.end();
    if canvas.is_excluded(keyword.clone()) {
        return;
    }
    canvas.claim(keyword, Category::PreprocessorKeyword);

    for gap in canvas.excluded().gaps(whole.end()..text.len()) {
        let piece = &text[gap.clone()];
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        let start = gap.start + (piece.len() - piece.trim_start().len());
        canvas.claim(start..start + trimmed.len(), Category::PreprocessorBody);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::passes::{comments, literals};
    use crate::highlight::span::{LineState, Span};

    fn run(text: &str) -> Vec<Span> {
        let mut canvas = Canvas::new(text);
        literals::strings_and_chars(&mut canvas);
        comments::line_comments(&mut canvas);
        directives(&mut canvas);
        canvas.finish(LineState::Normal).spans
    }

    #[test]
    fn keyword_and_body() {
        assert_eq!(
            run("  #define MAX 10"),
            vec![
                Span::new(Category::PreprocessorKeyword, 2, 7),
                Span::new(Category::PreprocessorBody, 10, 6),
            ]
        );
    }

    #[test]
    fn spaced_directive_name() {
        assert_eq!(
            run("# include <vector>"),
            vec![
                Span::new(Category::PreprocessorKeyword, 0, 9),
                Span::new(Category::PreprocessorBody, 10, 8),
            ]
        );
    }

    #[test]
    fn quoted_include_and_trailing_comment_keep_their_category() {
        assert_eq!(
            run(r#"#include "util.h" // helpers"#),
            vec![
                Span::new(Category::PreprocessorKeyword, 0, 8),
                Span::new(Category::StringLiteral, 9, 8),
                Span::new(Category::LineComment, 18, 10),
            ]
        );
    }

    #[test]
    fn directive_without_body() {
        assert_eq!(
            run("#endif"),
            vec![Span::new(Category::PreprocessorKeyword, 0, 6)]
        );
    }

    #[test]
    fn hash_inside_code_is_not_a_directive() {
        assert_eq!(run("x # y"), Vec::<Span>::new());
    }
}
