//! Name heuristics: declared types, functions, members, namespaces, labels.
//!
//! These refine words the keyword pass left unclassified (or classified as a
//! library function). None of them resolves anything: they only look at the
//! neighbouring tokens on the same line.

use crate::highlight::canvas::Canvas;
use crate::highlight::category::Category;
use crate::highlight::scan::{char_after, is_word_char, word_before};
use crate::highlight::tables::{is_control_keyword, is_known_namespace, is_reserved, keyword_category};
use once_cell::sync::Lazy;
use regex::Regex;

static DECLARED_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:class|struct|union|enum(?:\s+(?:class|struct))?)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .unwrap()
});

static QUALIFIED_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][A-Za-z0-9_]*)\s*(?:<|::)").unwrap());

static FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());

static MEMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\.|->)([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static NAMESPACE_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnamespace\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static SCOPE_QUALIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)::").unwrap());

static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*):").unwrap());

/// Words after which `name(` is a call rather than a declaration.
const CALL_PREFIX_WORDS: &[&str] = &["new", "delete", "co_await", "and", "or", "not"];

/// Trailing characters after which `name(` is a call rather than a declaration.
const CALL_PREFIX_CHARS: &[char] = &[
    '(', ',', '{', '[', ';', '=', '!', '<', '>', '+', '-', '*', '/', '&', '|', '^', '%', '?', ':',
    '~',
];

fn paint_group(canvas: &mut Canvas<'_>, group: Option<regex::Match<'_>>, category: Category) {
    if let Some(group) = group {
        if canvas.is_free(group.range()) {
            canvas.paint(group.range(), category);
        }
    }
}

/// Names introduced by `class`, `struct`, `union`, `enum` and `enum class`, plus
/// capitalised names used with template arguments or a scope qualifier.
pub(crate) fn type_names(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for caps in DECLARED_TYPE.captures_iter(text) {
        let name = caps.get(1).filter(|name| !is_reserved(name.as_str()));
        paint_group(canvas, name, Category::TypeName);
    }
    for caps in QUALIFIED_TYPE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        // `Foo << x` and `Foo <= x` are operators, not template arguments.
        if whole.as_str().ends_with('<') && matches!(char_after(text, whole.end()), Some('<' | '=')) {
            continue;
        }
        let name = caps.get(1).filter(|name| keyword_category(name.as_str()).is_none());
        paint_group(canvas, name, Category::TypeName);
    }
}

/// `name(` is a call when it follows line start, a control keyword, an operator
/// or an opening delimiter; otherwise it is taken as a declaration.
pub(crate) fn function_names(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for caps in FUNCTION.captures_iter(text) {
        let Some(name) = caps.get(1) else { continue };
        if is_reserved(name.as_str()) {
            continue;
        }
        let category = if is_call_site(&text[..name.start()]) {
            Category::FunctionCall
        } else {
            Category::FunctionName
        };
        paint_group(canvas, Some(name), category);
    }
}

fn is_call_site(before: &str) -> bool {
    let before = before.trim_end();
    let Some(last) = before.chars().next_back() else {
        return true;
    };
    if is_word_char(last) {
        let word = word_before(before, before.len());
        return is_control_keyword(word) || CALL_PREFIX_WORDS.contains(&word);
    }
    // `Widget::draw(` defines a member; a lone `:` (`case X:`, `?:`) still calls.
    if before.ends_with("::") {
        return false;
    }
    CALL_PREFIX_CHARS.contains(&last)
}

pub(crate) fn member_access(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for caps in MEMBER.captures_iter(text) {
        paint_group(canvas, caps.get(1), Category::MemberAccess);
    }
}

/// The name after `namespace`, and well-known namespaces used as qualifiers.
pub(crate) fn namespaces(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    for caps in NAMESPACE_DECL.captures_iter(text) {
        paint_group(canvas, caps.get(1), Category::Namespace);
    }
    for caps in SCOPE_QUALIFIER.captures_iter(text) {
        let name = caps.get(1).filter(|name| is_known_namespace(name.as_str()));
        paint_group(canvas, name, Category::Namespace);
    }
}

/// `name:` as the first token of a line, but not `name::` or `name:=`.
pub(crate) fn labels(canvas: &mut Canvas<'_>) {
    let text = canvas.text();
    let Some(caps) = LABEL.captures(text) else {
        return;
    };
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return;
    };
    if matches!(char_after(text, whole.end()), Some(':' | '=')) || is_reserved(name.as_str()) {
        return;
    }
    paint_group(canvas, Some(name), Category::Label);
}
