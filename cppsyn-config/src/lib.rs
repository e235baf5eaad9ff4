//! Shared configuration loader for the cppsyn tools.
//!
//! `defaults/cppsyn.default.toml` is embedded into every binary so that the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`CppsynConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use cppsyn_highlight::{Category, Rgb, StyleError, StyleRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/cppsyn.default.toml");

/// Top-level configuration consumed by cppsyn applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CppsynConfig {
    pub output: OutputConfig,
    /// Style overrides keyed by category name.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleOverride>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub line_numbers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Tag,
    Json,
    Ansi,
}

/// Partial style; unset fields keep the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleOverride {
    pub color: Option<Rgb>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl CppsynConfig {
    /// The built-in palette with every `[styles.*]` override applied.
    pub fn style_registry(&self) -> Result<StyleRegistry, StyleError> {
        let mut registry = StyleRegistry::default();
        for (name, overrides) in &self.styles {
            let category: Category = name.parse()?;
            let mut style = registry.style_of(category);
            if let Some(color) = overrides.color {
                style.color = color;
            }
            if let Some(bold) = overrides.bold {
                style.bold = bold;
            }
            if let Some(italic) = overrides.italic {
                style.italic = italic;
            }
            debug!(%category, ?style, "style override");
            registry.set(category, style);
        }
        Ok(registry)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "layering config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "layering optional config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CppsynConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CppsynConfig, ConfigError> {
    Loader::new().build()
}
