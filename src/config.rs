//! Generator configuration for the command line tool.
//!
//! The app metadata itself always comes from a manifest JSON file. This
//! module covers the settings that are *not* part of a manifest: where the
//! manifest will be published and which tag families to emit.
//!
//! ## Config File
//!
//! Pass `--config webapp.toml` to the CLI. A missing file means defaults.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # manifest_url = "/manifest.json"  # required when tags.standard = true
//!
//! [tags]
//! standard = true      # <link rel="manifest">
//! legacy = true        # application-name, theme-color, rel="icon"
//! apple = true         # apple-mobile-web-app-*, apple-touch-icon
//! microsoft = true     # msapplication-*
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command line flags
//! override file values.

use crate::tags::TagFamilies;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `webapp.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// URL the manifest is served from, used for `<link rel="manifest">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,
    /// Tag families to generate.
    pub tags: TagFamilies,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "manifest_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a generator config.
///
/// Returns defaults when `path` doesn't exist.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `webapp.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# webapp-meta configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# URL the manifest is served from. Used for <link rel="manifest">, and
# required whenever the standard tag family is enabled.
# manifest_url = "/manifest.json"

# ---------------------------------------------------------------------------
# Tag families
# ---------------------------------------------------------------------------
[tags]
# <link rel="manifest">
standard = true

# application-name, theme-color and <link rel="icon"> for web icons.
legacy = true

# format-detection, apple-mobile-web-app-* and <link rel="apple-touch-icon">
# for iOS icons.
apple = true

# msapplication-starturl and msapplication-navbutton-color.
microsoft = true
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_enables_all_families() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tags, TagFamilies::all());
        assert_eq!(config.manifest_url, None);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[tags]
apple = false
"#;
        let config: GeneratorConfig = toml::from_str(toml).unwrap();
        assert!(!config.tags.apple);
        assert!(config.tags.standard);
        assert!(config.tags.legacy);
        assert!(config.tags.microsoft);
    }

    #[test]
    fn parse_manifest_url() {
        let config: GeneratorConfig =
            toml::from_str(r#"manifest_url = "/app.webmanifest""#).unwrap();
        assert_eq!(config.manifest_url.as_deref(), Some("/app.webmanifest"));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<GeneratorConfig, _> = toml::from_str("manifest = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<GeneratorConfig, _> = toml::from_str("[tags]\ngoogle = true");
        assert!(result.is_err());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("webapp.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("webapp.toml");
        fs::write(
            &path,
            r#"
manifest_url = "/manifest.json"

[tags]
microsoft = false
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.manifest_url.as_deref(), Some("/manifest.json"));
        assert!(!config.tags.microsoft);
        assert!(config.tags.apple);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("webapp.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("webapp.toml");
        fs::write(&path, "manifest_url = \"  \"").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: GeneratorConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }
}
