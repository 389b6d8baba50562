//! Preference persistence.
//!
//! Stores the theme preference (and any sibling settings) as string
//! key/value pairs. The file-backed store degrades to plain in-memory
//! state when the medium is unavailable; callers never see an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::theme::Theme;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "THEME";

/// A string key/value store for user preferences.
///
/// Mirrors the shape of `eframe::Storage` so stores drop into the same
/// load/save/flush flow a GUI shell already uses.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set_string(&mut self, key: &str, value: String);

    /// Writes pending changes to the backing medium, if there is one.
    fn flush(&mut self) {}
}

/// Loads the persisted theme preference.
///
/// Returns `Theme::System` when no value is stored or the stored value
/// does not name a theme.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get_string(THEME_KEY) {
        Some(value) => value.parse().unwrap_or_else(|err: String| {
            log::warn!("ignoring persisted theme: {}", err);
            Theme::default()
        }),
        None => Theme::default(),
    }
}

/// Saves the theme preference and flushes the store.
pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) {
    store.set_string(THEME_KEY, theme.as_str().to_string());
    store.flush();
}

/// In-memory preference store.
///
/// The fallback when no persistent medium is available, and the test
/// double everywhere else.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore {
            values: HashMap::new(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// File-backed preference store.
///
/// Persists preferences as a single JSON object. Non-string values under
/// unknown keys are carried through untouched, and key order is preserved
/// across rewrites. Opening never fails: a missing file starts empty and
/// a corrupt or unreadable one is logged and treated as empty.
pub struct FileStore {
    path: Option<PathBuf>,
    values: Map<String, Value>,
    dirty: bool,
}

impl FileStore {
    /// Opens the store backed by `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_preference_file(&path);
        FileStore {
            path: Some(path),
            values,
            dirty: false,
        }
    }

    /// Opens the store at the per-user default location.
    ///
    /// Falls back to a purely in-memory store (with a warning) when the
    /// platform reports no configuration directory.
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                log::warn!("no configuration directory; preferences will not persist");
                FileStore {
                    path: None,
                    values: Map::new(),
                    dirty: false,
                }
            }
        }
    }

    /// Returns the per-user default preference file location, if the
    /// platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shade").join("preferences.json"))
    }

    /// Returns the backing file path, if this store has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
    }

    fn set_string(&mut self, key: &str, value: String) {
        // Unchanged values stay clean so frequent writers skip the file.
        if self.values.get(key).and_then(|v| v.as_str()) == Some(value.as_str()) {
            return;
        }
        self.values.insert(key.to_string(), Value::String(value));
        self.dirty = true;
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        if let Some(path) = self.path.as_deref() {
            if let Err(err) = write_preference_file(path, &self.values) {
                log::warn!("failed to persist preferences: {:#}", err);
            }
        }
    }
}

fn read_preference_file(path: &Path) -> Map<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no preference file at {}", path.display());
            return Map::new();
        }
        Err(err) => {
            log::warn!("failed to read {}: {}", path.display(), err);
            return Map::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(values) => values,
        Err(err) => {
            log::warn!("ignoring malformed {}: {}", path.display(), err);
            Map::new()
        }
    }
}

fn write_preference_file(path: &Path, values: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(values)?;
    fs::write(path, json).with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
