//! Theme preference persistence through the real config file.

use std::fs;

use folio_config::{FolioConfig, MemoryStore, PreferenceStore, THEME_KEY, ThemePreference, TomlPreferenceStore};
use folio_types::ThemeMode;

#[test]
fn first_run_is_dark_and_populates_the_slot() {
    let mut store = MemoryStore::new();
    let theme = ThemePreference::load(&mut store);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    drop(theme);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn persisted_value_wins_over_default() {
    let theme = ThemePreference::load(MemoryStore::read_only([(THEME_KEY, "light")]));
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn toggle_writes_through_every_time() {
    let mut store = MemoryStore::new();
    let mut theme = ThemePreference::load(&mut store);

    assert_eq!(theme.toggle().unwrap(), ThemeMode::Light);
    assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(theme.toggle().unwrap(), ThemeMode::Dark);
    assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn toml_store_survives_restart_and_keeps_user_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "# my settings\n[app]\nascii_only = true\n\n[site]\nurl = \"https://example.test\"\n",
    )
    .unwrap();

    {
        let mut theme = ThemePreference::load(TomlPreferenceStore::new(&path));
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle().unwrap();
    }

    let restarted = ThemePreference::load(TomlPreferenceStore::new(&path));
    assert_eq!(restarted.mode(), ThemeMode::Light);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# my settings"));
    let config = FolioConfig::load_from(&path).unwrap().unwrap();
    assert!(config.ui_options().ascii_only);
    assert_eq!(config.site_url(), "https://example.test");
}
