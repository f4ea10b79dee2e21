//! Configuration loader
//!
//! `defaults/ebnf.default.toml` is embedded into the library so that the documented defaults
//! and runtime behavior stay in sync. Applications layer user files and single key overrides
//! on top of those defaults via [`Loader`] before deserializing into [`EbnfConfig`].

use crate::ebnf::formats::{FormatRegistry, TextFormatter, TreevizFormatter};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/ebnf.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EbnfConfig {
    pub text: TextConfig,
    pub treeviz: TreevizConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextConfig {
    pub indentation: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreevizConfig {
    pub max_label: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl EbnfConfig {
    /// Format registry whose built-in formatters use these settings
    pub fn registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(TextFormatter {
            indentation: self.text.indentation,
        });
        registry.register(TreevizFormatter {
            max_label: self.treeviz.max_label,
        });
        registry
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
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
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
    pub fn build(self) -> Result<EbnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<EbnfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebnf::parsing::parse_syntax;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.text.indentation, 4);
        assert_eq!(config.treeviz.max_label, 30);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("text.indentation", 2i64)
            .expect("override to apply")
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.text.indentation, 2);
        assert_eq!(config.output.format, "xml");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, load_defaults().unwrap());
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }

    #[test]
    fn registry_uses_configured_indentation() {
        let config = Loader::new()
            .set_override("text.indentation", 1i64)
            .unwrap()
            .build()
            .unwrap();
        let ast = parse_syntax("a = [ b ] ;").unwrap();
        let text = config.registry().serialize(&ast, "text").unwrap();
        assert!(text.contains("\n  [optional]\n"));
    }
}
