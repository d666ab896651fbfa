//! Settings file loading.

use std::fs;
use std::path::PathBuf;

use jerry_parser::config::{
    default_config_path, price_or_zero, resolve_price, Settings, CONFIG_FILE,
};
use jerry_parser::JerryError;

#[test]
fn load_numeric_price_and_log_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(
        &path,
        r#"{"recombobulatorPrice": 6500000, "logDir": "/srv/minecraft/logs"}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.recombobulator_price, Some(6_500_000));
    assert_eq!(settings.log_dir, Some(PathBuf::from("/srv/minecraft/logs")));
}

#[test]
fn load_price_written_with_separators() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, r#"{"recombobulatorPrice": "6,500,000"}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.recombobulator_price, Some(6_500_000));
    assert_eq!(settings.log_dir, None);
}

#[test]
fn empty_object_is_default() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, "{}").unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
}

#[test]
fn bad_price_string_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, r#"{"recombobulatorPrice": "lots"}"#).unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(JerryError::Json(_))
    ));
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load_from(&path).is_err());
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn missing_file_is_default() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE);

    assert!(matches!(Settings::load_from(&path), Err(JerryError::Io(_))));
    assert_eq!(Settings::load(&path), Settings::default());
}

#[test]
fn default_path_names_the_app() {
    let path = default_config_path();
    assert_eq!(path.file_name().unwrap(), CONFIG_FILE);
    let dir = path.parent().unwrap().file_name().unwrap();
    assert!(dir.to_string_lossy().contains("jerry-parser"));
}

// ---------------------------------------------------------------------------
// Recombobulator price
// ---------------------------------------------------------------------------

fn settings_with_price(price: Option<i64>) -> Settings {
    Settings {
        recombobulator_price: price,
        log_dir: None,
    }
}

#[test]
fn price_or_zero_parses_or_falls_back() {
    assert_eq!(price_or_zero("6,500,000\n"), 6_500_000);
    assert_eq!(price_or_zero("a lot"), 0);
    assert_eq!(price_or_zero(""), 0);
}

#[test]
fn flag_beats_settings() {
    let settings = settings_with_price(Some(1_000));
    assert_eq!(resolve_price(Some("2,500"), &settings), Some(2_500));
}

#[test]
fn invalid_flag_is_zero_not_settings() {
    let settings = settings_with_price(Some(1_000));
    assert_eq!(resolve_price(Some("cheap"), &settings), Some(0));
}

#[test]
fn settings_used_without_flag() {
    let settings = settings_with_price(Some(6_500_000));
    assert_eq!(resolve_price(None, &settings), Some(6_500_000));
}

#[test]
fn no_source_leaves_price_unresolved() {
    assert_eq!(resolve_price(None, &Settings::default()), None);
}
