//! Keyword tables
//!
//! Static identifier sets for the keyword-family pass. A word listed in several
//! tables gets the category of the first table in [`KEYWORD_GROUPS`].

use super::category::Category;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool", "catch", "class",
    "compl", "const_cast", "constexpr", "decltype", "delete", "dynamic_cast", "explicit",
    "export", "false", "friend", "inline", "mutable", "namespace", "new", "noexcept", "not",
    "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
    "reinterpret_cast", "static_assert", "static_cast", "template", "this", "thread_local",
    "throw", "true", "try", "typeid", "typename", "using", "virtual", "wchar_t", "xor", "xor_eq",
    "concept", "requires", "co_await", "co_return", "co_yield", "consteval", "constinit",
];

pub const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "goto", "try", "catch", "throw", "co_return", "co_yield",
];

pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool", "char", "int", "float", "double", "void", "short", "long", "signed", "unsigned",
    "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
];

pub const LIBRARY_TYPES: &[&str] = &[
    "size_t", "ptrdiff_t", "time_t", "clock_t", "FILE", "wchar_t", "string", "vector", "list",
    "deque", "set", "multiset", "map", "multimap", "unordered_set", "unordered_multiset",
    "unordered_map", "unordered_multimap", "stack", "queue", "priority_queue", "pair", "tuple",
    "array", "bitset", "shared_ptr", "unique_ptr", "weak_ptr", "auto_ptr", "optional", "variant",
    "iostream", "istream", "ostream", "ifstream", "ofstream", "stringstream", "istringstream",
    "ostringstream", "iterator", "const_iterator", "reverse_iterator",
];

pub const LIBRARY_FUNCTIONS: &[&str] = &[
    "printf", "scanf", "sprintf", "sscanf", "fprintf", "fscanf", "fgets", "fputs", "malloc",
    "calloc", "realloc", "free", "strlen", "strcpy", "strncpy", "strcmp", "strncmp", "strcat",
    "strncat", "strchr", "strrchr", "strstr", "strtok", "memcpy", "memmove", "memset", "memcmp",
    "memchr", "fopen", "fclose", "fread", "fwrite", "fseek", "ftell", "rewind", "fflush", "getc",
    "putc", "getchar", "putchar", "puts", "gets", "atoi", "atof", "atol", "strtol", "strtod",
    "rand", "srand", "exit", "abort", "atexit", "system", "getenv", "sin", "cos", "tan", "asin",
    "acos", "atan", "atan2", "sinh", "cosh", "tanh", "exp", "log", "log10", "pow", "sqrt", "ceil",
    "floor", "fabs", "fmod", "cout", "cin", "cerr", "clog", "endl", "flush", "getline",
    "push_back", "size", "empty", "clear", "begin", "end", "find", "insert", "erase",
];

pub const CONSTANTS: &[&str] = &[
    "true", "false", "nullptr", "NULL", "EOF", "SEEK_SET", "SEEK_CUR", "SEEK_END",
    "EXIT_SUCCESS", "EXIT_FAILURE", "RAND_MAX", "INT_MAX", "INT_MIN", "CHAR_MAX", "CHAR_MIN",
    "UCHAR_MAX", "SHRT_MAX", "SHRT_MIN", "USHRT_MAX", "LONG_MAX", "LONG_MIN", "ULONG_MAX",
    "FLT_MAX", "FLT_MIN", "DBL_MAX", "DBL_MIN",
];

pub const KNOWN_NAMESPACES: &[&str] = &["std", "boost", "chrono", "filesystem", "ranges"];

/// C++ alternative operator spellings, highlighted as operators.
pub const ALTERNATIVE_OPERATORS: &[&str] = &[
    "and", "and_eq", "bitand", "bitor", "compl", "not", "not_eq", "or", "or_eq", "xor", "xor_eq",
];

/// Keyword groups in precedence order.
pub const KEYWORD_GROUPS: &[(&[&str], Category)] = &[
    (CONTROL_KEYWORDS, Category::ControlKeyword),
    (PRIMITIVE_TYPES, Category::PrimitiveType),
    (LIBRARY_TYPES, Category::LibraryType),
    (LIBRARY_FUNCTIONS, Category::LibraryFunction),
    (CONSTANTS, Category::Constant),
    (C_KEYWORDS, Category::Keyword),
    (CPP_KEYWORDS, Category::Keyword),
];

static KEYWORD_CATEGORIES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (words, category) in KEYWORD_GROUPS {
        for word in words.iter() {
            map.entry(*word).or_insert(*category);
        }
    }
    map
});

/// Words that can never name a function, type or label.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    C_KEYWORDS
        .iter()
        .chain(CPP_KEYWORDS)
        .chain(CONTROL_KEYWORDS)
        .chain(PRIMITIVE_TYPES)
        .chain(LIBRARY_TYPES)
        .copied()
        .collect()
});

/// Category a bare word receives from the keyword tables, if any.
pub fn keyword_category(word: &str) -> Option<Category> {
    KEYWORD_CATEGORIES.get(word).copied()
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word)
}

pub fn is_control_keyword(word: &str) -> bool {
    CONTROL_KEYWORDS.contains(&word)
}

pub fn is_known_namespace(word: &str) -> bool {
    KNOWN_NAMESPACES.contains(&word)
}

pub fn is_alternative_operator(word: &str) -> bool {
    ALTERNATIVE_OPERATORS.contains(&word)
}
