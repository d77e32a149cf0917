//! Tool configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for sitekit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where content documents live.
    #[serde(default)]
    pub content: ContentConfig,

    /// Validation settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Content location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding content documents.
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    /// Globals document, relative to `dir`.
    #[serde(default = "default_globals_file")]
    pub globals: PathBuf,
}

/// Validation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Treat warnings as errors.
    #[serde(default)]
    pub strict: bool,

    /// Report unknown block types as warnings instead of errors.
    #[serde(default)]
    pub allow_unknown_blocks: bool,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_globals_file() -> PathBuf {
    PathBuf::from("globals.json")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            globals: default_globals_file(),
        }
    }
}

/// Configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "sitekit.toml";

const ENV_PREFIX: &str = "SITEKIT";

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `SITEKIT__SECTION__KEY` environment overrides.
    ///
    /// The file must exist; environment values win over file values.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Self::from_sources(path, true)
    }

    /// Like [`Config::load_with_env`], but a missing file means defaults
    /// (environment overrides still apply).
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no configuration file, using defaults");
        }

        Self::from_sources(path, false)
    }

    fn from_sources(path: &Path, required: bool) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.content.dir.as_os_str().is_empty() {
            return Err(CoreError::config("content.dir cannot be empty"));
        }

        if self.content.globals.as_os_str().is_empty() {
            return Err(CoreError::config("content.globals cannot be empty"));
        }

        if self.content.globals.is_absolute() {
            tracing::warn!("content.globals is absolute and will ignore content.dir");
        }

        Ok(())
    }

    /// Path of the globals document.
    pub fn globals_path(&self) -> PathBuf {
        self.content.dir.join(&self.content.globals)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(
            br#"
[content]
dir = "site"
globals = "settings.yaml"

[check]
strict = true
allow_unknown_blocks = true
"#,
        )
        .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.content.dir, PathBuf::from("site"));
        assert_eq!(config.globals_path(), PathBuf::from("site/settings.yaml"));
        assert!(config.check.strict);
        assert!(config.check.allow_unknown_blocks);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.globals_path(), PathBuf::from("content/globals.json"));
        assert!(!config.check.strict);
        assert!(!config.check.allow_unknown_blocks);
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        std::fs::write(&config_path, "[check]\nstrict = true\n").expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert!(config.check.strict);
        assert_eq!(config.content.dir, PathBuf::from("content"));
    }

    #[test]
    fn test_load_with_env_override_wins() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        std::fs::write(&config_path, "[check]\nallow_unknown_blocks = false\n").expect("write");

        // No other test touches this key.
        unsafe { std::env::set_var("SITEKIT__CHECK__ALLOW_UNKNOWN_BLOCKS", "true") };
        let result = Config::load_with_env(&config_path);
        unsafe { std::env::remove_var("SITEKIT__CHECK__ALLOW_UNKNOWN_BLOCKS") };

        let config = result.expect("load config");
        assert!(config.check.allow_unknown_blocks);
    }

    #[test]
    fn test_load_or_default_applies_env_without_file() {
        // No other test touches this key.
        unsafe { std::env::set_var("SITEKIT__CONTENT__GLOBALS", "settings.yaml") };
        let result = Config::load_or_default(Path::new("/nonexistent/sitekit.toml"));
        unsafe { std::env::remove_var("SITEKIT__CONTENT__GLOBALS") };

        let config = result.expect("defaults");
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.globals_path(), PathBuf::from("content/settings.yaml"));
    }

    #[test]
    fn test_load_with_env_missing_file() {
        let result = Config::load_with_env(Path::new("/nonexistent/sitekit.toml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        std::fs::write(&config_path, "[check\nstrict = true\n").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.to_string().contains("sitekit.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_validation_empty_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitekit.toml");
        std::fs::write(&config_path, "[content]\ndir = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("content.dir cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/sitekit.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/sitekit.toml"))
            .expect("defaults");
        assert_eq!(config.content.dir, PathBuf::from("content"));
    }
}
