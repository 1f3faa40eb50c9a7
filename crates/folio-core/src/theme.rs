//! Light/dark theme preference.
//!
//! The preference lives under a single storage key and is read once at page
//! load. Storage failures never surface: a page without working storage simply
//! starts light every time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document attribute the stylesheet keys off
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` reads as light.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class shown on the toggle: a moon invites switching to dark, a
    /// sun invites switching back.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    /// Icon class that must be removed when this theme is applied
    pub fn stale_icon_class(&self) -> &'static str {
        self.toggled().icon_class()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key/value persistence, e.g. browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory store. `unavailable()` builds one that fails every call, the
/// way local storage behaves in some private browsing modes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            entries: RefCell::default(),
            unavailable: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    fn check(&self) -> FolioResult<()> {
        if self.unavailable {
            Err(FolioError::Storage("storage is disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the current theme and keeps the store in step with it.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Read the persisted theme, falling back to light.
    pub fn load(store: S) -> Self {
        let current = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => Theme::parse(&value),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::debug!("Theme preference unreadable, using light: {}", e);
                Theme::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. Returns the theme to apply.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            tracing::debug!("Theme preference not persisted: {}", e);
        }
        self.current = next;
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
        assert_eq!(Theme::parse("DARK"), Theme::Light);
    }

    #[test]
    fn icons_follow_theme() {
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
        assert_eq!(Theme::Dark.stale_icon_class(), "fa-moon");
    }

    #[test]
    fn load_reads_saved_value() {
        let prefs = PreferenceStore::load(MemoryStore::with_entry(THEME_STORAGE_KEY, "dark"));
        assert_eq!(prefs.current(), Theme::Dark);
    }

    #[test]
    fn load_without_value_is_light() {
        let prefs = PreferenceStore::load(MemoryStore::new());
        assert_eq!(prefs.current(), Theme::Light);
        // Loading alone never writes
        assert_eq!(prefs.store().get(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn toggle_persists() {
        let mut prefs = PreferenceStore::load(MemoryStore::new());
        assert_eq!(prefs.toggle(), Theme::Dark);
        assert_eq!(
            prefs.store().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(prefs.toggle(), Theme::Light);
        assert_eq!(
            prefs.store().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn unavailable_storage_still_toggles() {
        let mut prefs = PreferenceStore::load(MemoryStore::unavailable());
        assert_eq!(prefs.current(), Theme::Light);
        assert_eq!(prefs.toggle(), Theme::Dark);
        assert_eq!(prefs.current(), Theme::Dark);
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
