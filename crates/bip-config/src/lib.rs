//! Configuration management for best-in-place helpers.
//!
//! Parses `bip.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Sections
//!
//! - `[checkbox]`: default labels for checkbox fields
//! - `[naming]`: extra inflection rules used to derive URL segments
//! - `[routes]`: mount prefix and the set of routable resources
//!
//! ```toml
//! [checkbox]
//! labels = ["No", "Yes"]
//!
//! [naming]
//! irregular = { person = "people" }
//! uncountable = ["equipment"]
//!
//! [routes]
//! mount_path = "/admin"
//! resources = ["users"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bip.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Checkbox rendering configuration.
    pub checkbox: CheckboxConfig,
    /// Inflection rules.
    pub naming: NamingConfig,
    /// Route table configuration.
    pub routes: RoutesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Checkbox configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CheckboxConfig {
    /// Labels shown for the falsy and truthy states, in that order.
    pub labels: Vec<String>,
}

impl Default for CheckboxConfig {
    fn default() -> Self {
        Self {
            labels: vec!["No".to_owned(), "Yes".to_owned()],
        }
    }
}

/// Inflection rules layered on top of the built-in English rules.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Singular to plural overrides (e.g., `person = "people"`).
    pub irregular: BTreeMap<String, String>,
    /// Words with identical singular and plural forms.
    pub uncountable: Vec<String>,
}

/// Route table configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Prefix prepended to every generated path (e.g., `/admin`).
    pub mount_path: String,
    /// Routable resources. When unset, any controller name resolves.
    pub resources: Option<Vec<String>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bip.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::Validation`.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for `bip.toml` in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_checkbox()?;
        self.validate_naming()?;
        self.validate_routes()?;
        Ok(())
    }

    fn validate_checkbox(&self) -> Result<(), ConfigError> {
        if self.checkbox.labels.len() != 2 {
            return Err(ConfigError::Validation(format!(
                "checkbox.labels must contain exactly 2 entries, got {}",
                self.checkbox.labels.len()
            )));
        }
        Ok(())
    }

    fn validate_naming(&self) -> Result<(), ConfigError> {
        for (singular, plural) in &self.naming.irregular {
            require_non_empty(singular, "naming.irregular key")?;
            require_non_empty(plural, "naming.irregular value")?;
        }
        for word in &self.naming.uncountable {
            require_non_empty(word, "naming.uncountable")?;
        }
        Ok(())
    }

    fn validate_routes(&self) -> Result<(), ConfigError> {
        let mount = &self.routes.mount_path;
        if !mount.is_empty() && (!mount.starts_with('/') || mount.ends_with('/')) {
            return Err(ConfigError::Validation(
                "routes.mount_path must start with '/' and must not end with '/'".to_owned(),
            ));
        }

        if let Some(resources) = &self.routes.resources {
            for resource in resources {
                require_non_empty(resource, "routes.resources")?;
                if resource.contains('/') {
                    return Err(ConfigError::Validation(format!(
                        "routes.resources entry '{resource}' cannot contain '/'"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
