//! Settings for the apolo-rs router.
//!
//! This module provides the [`Settings`] struct, which holds process-wide
//! configuration, and [`LazySettings`], a globally-accessible, lazily-
//! initialized settings instance. The design mirrors Apolo's `Apolo::appdir()`
//! accessor, reworked as an explicit settings object configured once at
//! startup instead of a mutable static.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ApoloError, ApoloResult};

/// The complete set of router settings.
///
/// # Examples
///
/// ```
/// use apolo_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert!(settings.app_dir.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The application root directory, if configured.
    pub app_dir: Option<PathBuf>,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, toml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            app_dir: None,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Returns the configured application directory, if any.
    pub fn app_dir(&self) -> Option<&Path> {
        self.app_dir.as_deref()
    }

    /// Loads settings from a TOML string.
    ///
    /// Fields not present in the TOML keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ApoloError::ConfigurationError`] if the TOML is malformed
    /// or cannot be deserialized.
    pub fn from_toml_str(toml_str: &str) -> ApoloResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| ApoloError::ConfigurationError(format!("Failed to parse TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ApoloResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ApoloError::ConfigurationError(format!(
                "Failed to read TOML file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
/// [`configure`](LazySettings::configure) panics if called more than once.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
///
/// Call `SETTINGS.configure(settings)` once at application startup, then
/// access settings via `SETTINGS.get()` anywhere in the application.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert!(s.app_dir.is_none());
        assert_eq!(s.log_level, "info");
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let s = Settings::from_toml_str(
            r#"
            debug = false
            app_dir = "/srv/app"
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert!(!s.debug);
        assert_eq!(s.app_dir(), Some(Path::new("/srv/app")));
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn test_from_toml_str_partial_keeps_defaults() {
        let s = Settings::from_toml_str("log_level = \"debug\"").unwrap();
        assert!(s.debug);
        assert!(s.app_dir.is_none());
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn test_from_toml_str_extra_values() {
        let s = Settings::from_toml_str(
            r#"
            [extra]
            controllers_dir = "controllers"
            "#,
        )
        .unwrap();
        assert_eq!(
            s.extra.get("controllers_dir").and_then(toml::Value::as_str),
            Some("controllers")
        );
    }

    #[test]
    fn test_from_toml_str_malformed() {
        let result = Settings::from_toml_str("debug = ");
        assert!(matches!(result, Err(ApoloError::ConfigurationError(_))));
    }

    #[test]
    fn test_lazy_settings_configure_and_get() {
        let lazy = LazySettings::new();
        assert!(!lazy.is_configured());

        let mut settings = Settings::default();
        settings.debug = false;
        settings.app_dir = Some(PathBuf::from("/srv/app"));

        lazy.configure(settings);
        assert!(lazy.is_configured());
        assert!(!lazy.get().debug);
        assert_eq!(lazy.get().app_dir(), Some(Path::new("/srv/app")));
    }
}
