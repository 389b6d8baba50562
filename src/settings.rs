//! Generic typed settings over a preference store.
//!
//! The theme preference is one well-known key; applications usually keep a
//! few more. These helpers persist any serializable value as a JSON string
//! under its own key, next to the theme preference, with the same silent
//! fallback-to-default behavior on missing or invalid data.

use serde::{Deserialize, Serialize};

use crate::store::PreferenceStore;

/// Loads a setting, falling back to the type's default.
///
/// Returns the deserialized value if the key is present and valid,
/// otherwise `T::default()`.
///
/// # Examples
/// ```
/// use shade::{load_setting, MemoryStore};
///
/// let store = MemoryStore::new();
/// let zoom: f32 = load_setting(&store, "zoom");
/// assert_eq!(zoom, 0.0);
/// ```
pub fn load_setting<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    try_load_setting(store, key).unwrap_or_default()
}

/// Loads a setting, falling back to a caller-provided default.
pub fn load_setting_or<T>(store: &dyn PreferenceStore, key: &str, default: T) -> T
where
    T: for<'de> Deserialize<'de>,
{
    try_load_setting(store, key).unwrap_or(default)
}

/// Attempts to load a setting.
///
/// Returns `Some(value)` if the key is present and valid, `None` otherwise.
pub fn try_load_setting<T>(store: &dyn PreferenceStore, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
{
    let json_str = store.get_string(key)?;
    serde_json::from_str(&json_str).ok()
}

/// Saves a setting as JSON and flushes the store.
///
/// Values that fail to serialize are skipped; the store is left untouched.
pub fn save_setting<T>(store: &mut dyn PreferenceStore, key: &str, value: &T)
where
    T: Serialize,
{
    if let Ok(json_str) = serde_json::to_string(value) {
        store.set_string(key, json_str);
        store.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_save_and_load_simple() {
        let mut store = MemoryStore::new();

        // Save a value
        save_setting(&mut store, "test_key", &42i32);

        // Load it back
        let loaded: i32 = load_setting(&store, "test_key");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_load_with_default() {
        let store = MemoryStore::new();

        // Missing key falls back to the type default
        let loaded: bool = load_setting(&store, "missing_key");
        assert!(!loaded);
    }

    #[test]
    fn test_load_with_custom_default() {
        let store = MemoryStore::new();

        let loaded = load_setting_or(&store, "missing_key", 1.5f32);
        assert_eq!(loaded, 1.5);
    }

    #[test]
    fn test_try_load_setting() {
        let mut store = MemoryStore::new();

        // Non-existent key
        let result: Option<i32> = try_load_setting(&store, "missing");
        assert_eq!(result, None);

        // Save and load
        save_setting(&mut store, "test", &123i32);
        let result: Option<i32> = try_load_setting(&store, "test");
        assert_eq!(result, Some(123));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut store = MemoryStore::new();
        store.set_string("count", "not a number".to_string());

        let loaded: i32 = load_setting(&store, "count");
        assert_eq!(loaded, 0);
    }
}
