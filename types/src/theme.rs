//! Light/dark color scheme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
pub struct ParseThemeError(String);

impl ThemeMode {
    /// Slot value written to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Lenient read of a stored slot. An empty slot counts as unset;
    /// anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else if value == Self::Dark.as_str() {
            Some(Self::Dark)
        } else {
            Some(Self::Light)
        }
    }
}

impl From<bool> for ThemeMode {
    fn from(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}
