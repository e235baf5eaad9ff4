//! Identifier completion
//!
//! The vocabulary offered while typing: a fixed list of keywords and common
//! library names, plus identifiers harvested from the buffer with the same kind
//! of shallow regexes the classifier uses. Nothing is resolved; a name declared
//! anywhere in the buffer is offered everywhere.

use crate::highlight::tables::{C_KEYWORDS, CPP_KEYWORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Library names offered in addition to the C and C++ keywords.
const LIBRARY_NAMES: &[&str] = &[
    "printf", "scanf", "malloc", "free", "strlen", "strcpy", "strcmp", "strcat", "memcpy",
    "memset", "fopen", "fclose", "fread", "fwrite", "fprintf", "fscanf", "cout", "cin", "endl",
    "std", "vector", "string", "map", "set", "list", "queue", "stack", "pair", "make_pair",
    "sort", "find", "push_back", "size", "empty", "begin", "end", "insert", "erase", "clear",
];

static DECLARED_AFTER_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:int|float|double|char|bool|string|auto|void)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .unwrap()
});

static TYPE_OR_NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:class|struct|namespace)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#\s*include\s*[<"]\s*([A-Za-z0-9_./]+)\s*[>"]"#).unwrap());

static DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\s*define\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static ENUM_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\benum\s*(?:(?:class|struct)\s+)?(?:[A-Za-z_][A-Za-z0-9_]*)?\s*(?::[^{;]*)?\{([^}]+)\}")
        .unwrap()
});

static ENUMERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|,)\s*([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Sorted, de-duplicated completion vocabulary for `source`. Names shorter than
/// two characters are never offered.
pub fn completion_candidates(source: &str) -> Vec<String> {
    let mut names: BTreeSet<&str> = C_KEYWORDS
        .iter()
        .chain(CPP_KEYWORDS)
        .chain(LIBRARY_NAMES)
        .copied()
        .collect();

    for pattern in [&*DECLARED_AFTER_TYPE, &*TYPE_OR_NAMESPACE, &*INCLUDE, &*DEFINE] {
        names.extend(
            pattern
                .captures_iter(source)
                .filter_map(|caps| caps.get(1))
                .map(|name| name.as_str()),
        );
    }
    for body in ENUM_BODY.captures_iter(source).filter_map(|caps| caps.get(1)) {
        names.extend(
            ENUMERATOR
                .captures_iter(body.as_str())
                .filter_map(|caps| caps.get(1))
                .map(|name| name.as_str()),
        );
    }

    names
        .into_iter()
        .filter(|name| name.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Candidates starting with `prefix`, ignoring case.
pub fn complete<'a>(prefix: &str, candidates: &'a [String]) -> Vec<&'a str> {
    let prefix = prefix.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
        .map(String::as_str)
        .collect()
}

/// The identifier fragment that ends at byte offset `cursor` in `line`.
pub fn completion_prefix(line: &str, cursor: usize) -> &str {
    let mut end = cursor.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    let start = line[..end]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(end, |(i, _)| i);
    &line[start..end]
}
