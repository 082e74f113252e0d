//! JSON settings file.
//!
//! Stores settings in %APPDATA%/windrive/settings.json (or the working
//! directory when `APPDATA` is not set).
//!
//! [`SettingsStore`] keeps an in-memory copy so that repeated reads and
//! writes do not touch the disk. Call [`SettingsStore::flush`] to persist
//! changes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::Shortcut;
use crate::model::constants::*;
use crate::pathgen::{Direct, Linear};

/// Persisted library settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Linear animation speed, in distance units per step.
    pub speed: f64,
    /// Delay between animation frames, in milliseconds.
    pub waiting_ms: u64,
    /// Named shortcuts, e.g. `"center" -> "Ctrl+Alt+C"`.
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            waiting_ms: DEFAULT_WAITING_MS,
            shortcuts: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Clamps numeric values to their valid ranges.
    pub fn validate(&mut self) {
        self.speed = if self.speed.is_finite() {
            self.speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            DEFAULT_SPEED
        };
        self.waiting_ms = self.waiting_ms.min(MAX_WAITING_MS);
    }

    pub fn waiting_time(&self) -> Duration {
        Duration::from_millis(self.waiting_ms)
    }

    /// Linear generator configured from these settings.
    pub fn linear(&self) -> Result<Linear> {
        Linear::new(self.speed, self.waiting_time())
    }

    /// Direct generator using the configured delay.
    pub fn direct(&self) -> Direct {
        Direct::new(self.waiting_time())
    }

    /// Parse the shortcut stored under `name`.
    pub fn shortcut(&self, name: &str) -> Result<Option<Shortcut>> {
        self.shortcuts
            .get(name)
            .map(|s| s.parse::<Shortcut>())
            .transpose()
    }

    pub fn set_shortcut(&mut self, name: impl Into<String>, shortcut: Shortcut) {
        self.shortcuts.insert(name.into(), shortcut.to_string());
    }
}

/// Default settings file path: %APPDATA%/windrive/settings.json
pub fn settings_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join("windrive").join("settings.json")
}

/// Read settings, failing on I/O or parse errors.
pub fn try_load_from(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)?;
    let mut settings: Settings = serde_json::from_str(&contents)?;
    settings.validate();
    Ok(settings)
}

/// Read settings, returning defaults if the file is missing or invalid.
pub fn load_from(path: &Path) -> Settings {
    match try_load_from(path) {
        Ok(settings) => settings,
        Err(e) => {
            if path.exists() {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
            }
            Settings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the parent directory.
pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Cached settings bound to one file.
pub struct SettingsStore {
    path: PathBuf,
    cache: Option<Settings>,
    dirty: bool,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
            dirty: false,
        }
    }

    /// Store bound to [`settings_path`].
    pub fn at_default_path() -> Self {
        Self::new(settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached settings, loaded from disk on first use.
    pub fn get(&mut self) -> &Settings {
        let path = &self.path;
        self.cache.get_or_insert_with(|| load_from(path))
    }

    /// Replace the cached settings and mark them dirty.
    pub fn set(&mut self, mut settings: Settings) {
        settings.validate();
        self.cache = Some(settings);
        self.dirty = true;
    }

    /// Edit the cached settings in place.
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) {
        let mut settings = self.get().clone();
        f(&mut settings);
        self.set(settings);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the cache to disk if it changed since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(settings) = &self.cache {
            save_to(&self.path, settings)?;
        }
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, Modifiers};

    #[test]
    fn settings_default_values() {
        let settings = Settings::default();
        assert!((settings.speed - DEFAULT_SPEED).abs() < f64::EPSILON);
        assert_eq!(settings.waiting_ms, DEFAULT_WAITING_MS);
        assert!(settings.shortcuts.is_empty());
    }

    #[test]
    fn settings_serialization_roundtrip() {
        let mut settings = Settings {
            speed: 2.5,
            waiting_ms: 4,
            shortcuts: BTreeMap::new(),
        };
        settings.set_shortcut("center", Shortcut::new(Modifiers::CONTROL, Key::C));
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.shortcut("center").unwrap(),
            Some(Shortcut::new(Modifiers::CONTROL, Key::C))
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"speed": 3.0}"#).unwrap();
        assert_eq!(loaded.waiting_ms, DEFAULT_WAITING_MS);
        assert!((loaded.speed - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_clamps_ranges() {
        let mut settings = Settings {
            speed: -4.0,
            waiting_ms: 60_000,
            shortcuts: BTreeMap::new(),
        };
        settings.validate();
        assert!((settings.speed - MIN_SPEED).abs() < f64::EPSILON);
        assert_eq!(settings.waiting_ms, MAX_WAITING_MS);
        assert!(settings.linear().is_ok());
    }

    #[test]
    fn bad_shortcut_string_is_an_error() {
        let mut settings = Settings::default();
        settings
            .shortcuts
            .insert("broken".to_string(), "Ctrl+Nothing".to_string());
        assert!(settings.shortcut("broken").is_err());
        assert_eq!(settings.shortcut("absent").unwrap(), None);
    }
}
