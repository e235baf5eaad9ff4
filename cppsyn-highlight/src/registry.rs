//! Category registry
//!
//! Maps each [`Category`] to the style a renderer paints it with. The built-in
//! palette is a light theme; configuration can override individual entries.

use crate::highlight::{Category, UnknownCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("invalid colour '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// 24-bit colour, written `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Rgb::from_hex(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    const fn plain(hex: u32) -> Self {
        Style {
            color: Rgb::from_hex(hex),
            bold: false,
            italic: false,
        }
    }

    const fn bold(hex: u32) -> Self {
        Style {
            bold: true,
            ..Style::plain(hex)
        }
    }

    const fn italic(hex: u32) -> Self {
        Style {
            italic: true,
            ..Style::plain(hex)
        }
    }
}

/// Built-in palette, indexed like [`Category::ALL`].
const DEFAULT_STYLES: [Style; 29] = [
    Style::bold(0x5C2D91),   // keyword
    Style::bold(0x5C2D91),   // control-keyword
    Style::bold(0x005FB8),   // primitive-type
    Style::plain(0x007C79),  // library-type
    Style::plain(0xC18401),  // library-function
    Style::plain(0x0078D7),  // constant
    Style::plain(0x007C79),  // namespace
    Style::plain(0x007000),  // string-literal
    Style::plain(0x007000),  // character-literal
    Style::plain(0x886600),  // raw-string
    Style::italic(0x008000), // line-comment
    Style::italic(0x008000), // block-comment
    Style::italic(0x006400), // doc-comment
    Style::plain(0x175E54),  // numeric-literal
    Style::plain(0x8A2BE2),  // preprocessor-keyword
    Style::plain(0x000080),  // preprocessor-body
    Style::plain(0x333333),  // operator
    Style::plain(0x333333),  // punctuation
    Style::plain(0xAA7700),  // bracket-round
    Style::plain(0x8B008B),  // bracket-curly
    Style::plain(0x1E90FF),  // bracket-square
    Style::plain(0x2E8B57),  // bracket-angle
    Style::bold(0x007C79),   // type-name
    Style::plain(0xC18401),  // function-name
    Style::plain(0xC18401),  // function-call
    Style::plain(0x0078D7),  // member-access
    Style::bold(0x886600),   // escape-sequence
    Style::plain(0x5C2D91),  // label
    Style::plain(0x4169E1),  // attribute
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: [Style; 29],
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self {
            styles: DEFAULT_STYLES,
        }
    }
}

impl StyleRegistry {
    pub fn style_of(&self, category: Category) -> Style {
        self.styles[category.index()]
    }

    pub fn set(&mut self, category: Category, style: Style) {
        self.styles[category.index()] = style;
    }

    /// Overrides the style registered under a category name.
    pub fn set_by_name(&mut self, name: &str, style: Style) -> Result<(), StyleError> {
        let category: Category = name.parse()?;
        self.set(category, style);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Style)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.style_of(*category)))
    }
}

/// Style of `category` in the built-in palette.
pub fn style_of(category: Category) -> Style {
    DEFAULT_STYLES[category.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let keyword = style_of(Category::Keyword);
        assert_eq!(keyword.color, Rgb(0x5C, 0x2D, 0x91));
        assert!(keyword.bold);
        assert!(style_of(Category::DocComment).italic);
        assert_eq!(style_of(Category::Attribute).color.to_string(), "#4169E1");
    }

    #[test]
    fn parses_colours() {
        assert_eq!("#0a0B0c".parse::<Rgb>(), Ok(Rgb(10, 11, 12)));
        assert!(matches!("0A0B0C".parse::<Rgb>(), Err(StyleError::InvalidColor(_))));
        assert!(matches!("#0A0B0".parse::<Rgb>(), Err(StyleError::InvalidColor(_))));
        assert!(matches!("#+A0B0C".parse::<Rgb>(), Err(StyleError::InvalidColor(_))));
    }

    #[test]
    fn overrides_by_name() {
        let mut registry = StyleRegistry::default();
        let red = Style {
            color: Rgb(255, 0, 0),
            bold: false,
            italic: true,
        };
        registry.set_by_name("label", red).unwrap();
        assert_eq!(registry.style_of(Category::Label), red);
        assert!(matches!(
            registry.set_by_name("labels", red),
            Err(StyleError::UnknownCategory(_))
        ));
    }

    #[test]
    fn iterates_every_category() {
        assert_eq!(StyleRegistry::default().iter().count(), Category::ALL.len());
    }
}
