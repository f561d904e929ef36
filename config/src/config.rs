use std::path::{Path, PathBuf};
use std::{env, fs};

use folio_types::ui::UiOptions;
use serde::Deserialize;
use thiserror::Error;

/// Link embedded in share text when `[site] url` is not set.
pub const DEFAULT_SITE_URL: &str = "https://mgphoechit.dev";

const CONFIG_ENV: &str = "FOLIO_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub site: Option<SiteConfig>,
    /// Written by Folio itself; read through [`crate::TomlPreferenceStore`].
    pub preferences: Option<toml::Table>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and meters.
    #[serde(default)]
    pub ascii_only: bool,
    /// Use the high-contrast palette regardless of theme.
    #[serde(default)]
    pub high_contrast: bool,
    /// Render skill meters at their final level without filling.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    pub url: Option<String>,
}

impl FolioConfig {
    /// Load from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn site_url(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|site| site.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SITE_URL)
    }
}

/// `$FOLIO_CONFIG` if set and non-empty, else `~/.folio/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DEFAULT_SITE_URL, FolioConfig};

    #[test]
    fn parse_empty_config() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert_eq!(config.ui_options(), folio_types::ui::UiOptions::default());
        assert_eq!(config.site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r#"
[app]
ascii_only = true
reduced_motion = true
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(options.reduced_motion);
    }

    #[test]
    fn site_url_overrides_default_unless_blank() {
        let config: FolioConfig = toml::from_str("[site]\nurl = \"https://example.test\"").unwrap();
        assert_eq!(config.site_url(), "https://example.test");

        let blank: FolioConfig = toml::from_str("[site]\nurl = \"  \"").unwrap();
        assert_eq!(blank.site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn preferences_table_is_tolerated() {
        let config: FolioConfig =
            toml::from_str("[preferences]\ntheme = \"light\"\nfuture = 1").unwrap();
        let prefs = config.preferences.unwrap();
        assert_eq!(prefs.get("theme").and_then(|v| v.as_str()), Some("light"));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FolioConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\nascii_only = ").unwrap();

        let err = FolioConfig::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("config.toml"));
    }
}
