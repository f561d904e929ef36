use folio_types::ThemeMode;

use crate::store::{PreferenceStore, StoreError};

/// Slot holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// The active theme plus the store it was loaded from.
///
/// Read once at construction; every change is written through immediately.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Read the slot. An absent or empty slot means dark.
    ///
    /// Unless the slot already holds exactly `"dark"` or `"light"`, the
    /// effective mode is written back, so the slot is always canonical after
    /// a load.
    pub fn load(mut store: S) -> Self {
        let stored = store.get(THEME_KEY);
        let mode = stored
            .as_deref()
            .and_then(ThemeMode::from_stored)
            .unwrap_or_default();
        if stored.as_deref() != Some(mode.as_str()) {
            if let Err(err) = store.set(THEME_KEY, mode.as_str()) {
                tracing::warn!("Failed to persist theme {mode}: {err}");
            }
        }
        tracing::debug!(theme = %mode, "Loaded theme preference");
        Self { store, mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory mode changes even when the write fails; an `Err` means
    /// the new mode will not survive a restart.
    pub fn toggle(&mut self) -> Result<ThemeMode, StoreError> {
        self.set_mode(self.mode.toggled())?;
        Ok(self.mode)
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        self.mode = mode;
        tracing::info!(theme = %mode, "Theme changed");
        self.store.set(THEME_KEY, mode.as_str())
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use folio_types::ThemeMode;

    use super::{THEME_KEY, ThemePreference};
    use crate::store::{MemoryStore, PreferenceStore, TomlPreferenceStore};

    #[test]
    fn absent_slot_defaults_to_dark_and_is_written() {
        let theme = ThemePreference::load(MemoryStore::new());
        assert!(theme.is_dark());
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn persisted_value_wins() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let theme = ThemePreference::load(store);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_stored_value_reads_as_light_and_is_rewritten() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        let theme = ThemePreference::load(store);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn empty_slot_is_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "").unwrap();
        let theme = ThemePreference::load(store);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_overwrites_slot() {
        let mut theme = ThemePreference::load(MemoryStore::new());
        assert_eq!(theme.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(theme.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn failed_write_still_flips_in_memory() {
        let mut theme = ThemePreference::load(MemoryStore::read_only([(THEME_KEY, "dark")]));
        assert!(theme.toggle().is_err());
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn survives_restart_through_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut first = ThemePreference::load(TomlPreferenceStore::new(&path));
        assert!(first.is_dark());
        first.toggle().unwrap();
        drop(first);

        let second = ThemePreference::load(TomlPreferenceStore::new(&path));
        assert_eq!(second.mode(), ThemeMode::Light);
    }
}
