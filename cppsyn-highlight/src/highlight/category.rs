//! Lexical categories
//!
//! Every classified character belongs to exactly one category. Unclassified
//! characters are plain text and carry no span at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Keyword,
    ControlKeyword,
    PrimitiveType,
    LibraryType,
    LibraryFunction,
    Constant,
    Namespace,
    StringLiteral,
    CharacterLiteral,
    RawString,
    LineComment,
    BlockComment,
    DocComment,
    NumericLiteral,
    PreprocessorKeyword,
    PreprocessorBody,
    Operator,
    Punctuation,
    BracketRound,
    BracketCurly,
    BracketSquare,
    BracketAngle,
    TypeName,
    FunctionName,
    FunctionCall,
    MemberAccess,
    EscapeSequence,
    Label,
    Attribute,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 29] = [
        Category::Keyword,
        Category::ControlKeyword,
        Category::PrimitiveType,
        Category::LibraryType,
        Category::LibraryFunction,
        Category::Constant,
        Category::Namespace,
        Category::StringLiteral,
        Category::CharacterLiteral,
        Category::RawString,
        Category::LineComment,
        Category::BlockComment,
        Category::DocComment,
        Category::NumericLiteral,
        Category::PreprocessorKeyword,
        Category::PreprocessorBody,
        Category::Operator,
        Category::Punctuation,
        Category::BracketRound,
        Category::BracketCurly,
        Category::BracketSquare,
        Category::BracketAngle,
        Category::TypeName,
        Category::FunctionName,
        Category::FunctionCall,
        Category::MemberAccess,
        Category::EscapeSequence,
        Category::Label,
        Category::Attribute,
    ];

    /// Stable kebab-case name, used by the tag format and configuration keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::ControlKeyword => "control-keyword",
            Category::PrimitiveType => "primitive-type",
            Category::LibraryType => "library-type",
            Category::LibraryFunction => "library-function",
            Category::Constant => "constant",
            Category::Namespace => "namespace",
            Category::StringLiteral => "string-literal",
            Category::CharacterLiteral => "character-literal",
            Category::RawString => "raw-string",
            Category::LineComment => "line-comment",
            Category::BlockComment => "block-comment",
            Category::DocComment => "doc-comment",
            Category::NumericLiteral => "numeric-literal",
            Category::PreprocessorKeyword => "preprocessor-keyword",
            Category::PreprocessorBody => "preprocessor-body",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::BracketRound => "bracket-round",
            Category::BracketCurly => "bracket-curly",
            Category::BracketSquare => "bracket-square",
            Category::BracketAngle => "bracket-angle",
            Category::TypeName => "type-name",
            Category::FunctionName => "function-name",
            Category::FunctionCall => "function-call",
            Category::MemberAccess => "member-access",
            Category::EscapeSequence => "escape-sequence",
            Category::Label => "label",
            Category::Attribute => "attribute",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Categories whose spans may contain escape-sequence sub-spans.
    pub fn is_escapable_literal(self) -> bool {
        matches!(self, Category::StringLiteral | Category::CharacterLiteral)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
