use anyhow::Result;
use serial_test::serial;
use std::fs;

use shade::{
    load_setting_or, load_theme, save_setting, set_color_mode_detector, ColorMode, FileStore,
    Theme, ThemeManager,
};

#[test]
#[serial]
fn test_fresh_store_defaults_to_system() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;

    // No preference file exists yet
    let manager = ThemeManager::new(Box::new(FileStore::open(dir.path().join("prefs.json"))));
    assert_eq!(manager.theme(), Theme::System);
    assert!(!manager.is_dark());

    Ok(())
}

#[test]
#[serial]
fn test_preference_survives_restart() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");

    // First run: pick dark
    {
        let mut manager = ThemeManager::new(Box::new(FileStore::open(&path)));
        manager.set_theme(Theme::Dark);
    }

    // Second run: the preference is still there
    let manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert_eq!(manager.theme(), Theme::Dark);
    assert!(manager.is_dark());

    Ok(())
}

#[test]
#[serial]
fn test_dark_preference_overrides_light_ambient() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"THEME": "dark"}"#)?;

    let manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert!(manager.is_dark());

    Ok(())
}

#[test]
#[serial]
fn test_system_preference_inherits_dark_ambient() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Dark);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"THEME": "system"}"#)?;

    let manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert!(manager.is_dark());

    Ok(())
}

#[test]
#[serial]
fn test_light_preference_overrides_dark_ambient() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Dark);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"THEME": "light"}"#)?;

    let manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert!(!manager.is_dark());

    Ok(())
}

#[test]
#[serial]
fn test_unknown_persisted_value_falls_back_to_system() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"THEME": "midnight"}"#)?;

    let manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert_eq!(manager.theme(), Theme::System);

    Ok(())
}

#[test]
#[serial]
fn test_setting_same_theme_twice_is_stable() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Dark);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");

    let mut manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    manager.set_theme(Theme::Light);
    let state_after_first = (manager.theme(), manager.is_dark());
    let file_after_first = fs::read_to_string(&path)?;

    manager.set_theme(Theme::Light);
    assert_eq!((manager.theme(), manager.is_dark()), state_after_first);
    assert_eq!(fs::read_to_string(&path)?, file_after_first);

    Ok(())
}

#[test]
#[serial]
fn test_ambient_flip_propagates_on_refresh() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");

    let mut manager = ThemeManager::new(Box::new(FileStore::open(&path)));
    assert_eq!(manager.theme(), Theme::System);
    assert!(!manager.is_dark());

    set_color_mode_detector(|| ColorMode::Dark);
    assert!(manager.refresh());
    assert!(manager.is_dark());

    // Only the effective mode moved; the persisted preference did not.
    let reopened = FileStore::open(&path);
    assert_eq!(load_theme(&reopened), Theme::System);

    Ok(())
}

#[test]
#[serial]
fn test_sibling_settings_survive_restart() -> Result<()> {
    set_color_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prefs.json");

    {
        let mut store = FileStore::open(&path);
        save_setting(&mut store, "zoom", &1.25f64);
        shade::save_theme(&mut store, Theme::Dark);
    }

    // Both keys live in the same file
    let reopened = FileStore::open(&path);
    assert_eq!(load_setting_or(&reopened, "zoom", 1.0f64), 1.25);
    assert_eq!(load_theme(&reopened), Theme::Dark);

    Ok(())
}
