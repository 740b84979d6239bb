use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::warn;
use thiserror::Error;
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeStoreError::Unrecognized(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ThemeStoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write theme: {0}")]
    Write(String),
    #[error("unrecognized theme value {0:?}")]
    Unrecognized(String),
}

/// Where the theme choice lives between visits.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;
    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

/// The browser's `localStorage`, under the `theme` key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Result<web_sys::Storage, ThemeStoreError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(ThemeStoreError::Unavailable)
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let storage = Self::storage()?;
        match storage.get_item(THEME_STORAGE_KEY).ok().flatten() {
            Some(value) => value.parse().map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|e| ThemeStoreError::Write(format!("{:?}", e)))
    }
}

/// In-memory store holding the raw stored string.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_raw(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_string())) }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        match self.value.borrow().as_deref() {
            Some(value) => value.parse().map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        *self.value.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// The active theme together with the store it is persisted to. Handed to
/// the component tree through a context instead of being read from
/// storage wherever it is needed.
#[derive(Clone)]
pub struct ThemeConfig {
    pub theme: Theme,
    store: Rc<dyn ThemeStore>,
}

impl PartialEq for ThemeConfig {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && std::ptr::addr_eq(Rc::as_ptr(&self.store), Rc::as_ptr(&other.store))
    }
}

impl fmt::Debug for ThemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfig").field("theme", &self.theme).finish_non_exhaustive()
    }
}

impl ThemeConfig {
    /// Reads the stored theme, using `fallback` when nothing usable is stored.
    pub fn load(store: Rc<dyn ThemeStore>, fallback: Theme) -> Self {
        let theme = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => fallback,
            Err(e) => {
                warn!("Ignoring stored theme: {}", e);
                fallback
            }
        };
        Self { theme, store }
    }

    /// Flips the theme and writes it back. A failed write still switches
    /// the theme for this visit.
    pub fn toggle(&self) -> Self {
        let theme = self.theme.toggled();
        if let Err(e) = self.store.save(theme) {
            warn!("Could not persist theme: {}", e);
        }
        Self { theme, store: self.store.clone() }
    }
}

/// `prefers-color-scheme`, defaulting to dark when the query is unavailable.
pub fn system_preference() -> Theme {
    let prefers_light = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Sets `data-theme` on `<html>` so the stylesheet can switch palettes.
pub fn apply_to_document(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            warn!("Could not apply theme: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins_over_fallback() {
        let store = Rc::new(MemoryThemeStore::with_raw("light"));
        assert_eq!(ThemeConfig::load(store, Theme::Dark).theme, Theme::Light);
    }

    #[test]
    fn missing_or_garbage_value_uses_fallback() {
        let empty: Rc<dyn ThemeStore> = Rc::new(MemoryThemeStore::default());
        assert_eq!(ThemeConfig::load(empty, Theme::Light).theme, Theme::Light);

        let garbage: Rc<dyn ThemeStore> = Rc::new(MemoryThemeStore::with_raw("sepia"));
        assert_eq!(ThemeConfig::load(garbage, Theme::Dark).theme, Theme::Dark);
    }

    #[test]
    fn toggle_persists_plain_value() {
        let store = Rc::new(MemoryThemeStore::default());
        let config = ThemeConfig::load(store.clone(), Theme::Dark);

        let toggled = config.toggle();
        assert_eq!(toggled.theme, Theme::Light);
        assert_eq!(store.raw().as_deref(), Some("light"));

        let back = toggled.toggle();
        assert_eq!(back.theme, Theme::Dark);
        assert_eq!(store.raw().as_deref(), Some("dark"));
    }

    #[test]
    fn configs_compare_by_theme_and_store() {
        let store: Rc<dyn ThemeStore> = Rc::new(MemoryThemeStore::default());
        let a = ThemeConfig::load(store.clone(), Theme::Dark);
        let b = ThemeConfig::load(store, Theme::Dark);
        let other = ThemeConfig::load(Rc::new(MemoryThemeStore::default()), Theme::Dark);

        assert_eq!(a, b);
        assert_ne!(a, other);
        assert_ne!(a, a.toggle());
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
    }
}
