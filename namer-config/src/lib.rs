//! Shared configuration loader for the namer toolchain.
//!
//! `defaults/namer.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`NamerConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
pub use config::ConfigError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/namer.default.toml");

/// Top-level configuration consumed by namer applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NamerConfig {
    pub title: TitleConfig,
    pub template: TemplateConfig,
    pub interaction: InteractionConfig,
}

/// How the built title is rendered and exported.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleConfig {
    pub separator: String,
    pub export_separator: String,
    pub seed_with_date: bool,
}

/// Where the template comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub path: String,
}

/// Interaction defaults at session start.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionConfig {
    pub alt_mode_default: bool,
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
    pub fn build(self) -> Result<NamerConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NamerConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.title.separator, " - ");
        assert_eq!(config.title.export_separator, "_");
        assert!(config.title.seed_with_date);
        assert!(config.interaction.alt_mode_default);
        assert_eq!(config.template.path, "data_collection_template.csv");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("title.separator", "_")
            .expect("override to apply")
            .set_override("title.seed_with_date", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.title.separator, "_");
        assert!(!config.title.seed_with_date);
    }
}
