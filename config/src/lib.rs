//! Configuration and persisted preferences for Folio.
//!
//! `~/.folio/config.toml` carries both the user-edited `[app]`/`[site]`
//! settings and the `[preferences]` table Folio writes back itself.

mod config;
mod store;
mod theme;

pub use config::{
    AppConfig, ConfigError, DEFAULT_SITE_URL, FolioConfig, SiteConfig, config_path,
};
pub use store::{MemoryStore, PreferenceStore, StoreError, TomlPreferenceStore};
pub use theme::{THEME_KEY, ThemePreference};
