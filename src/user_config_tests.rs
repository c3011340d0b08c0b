use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_defaults_match_pipeline_constants() {
    let cfg = UserConfig::default();
    assert_eq!(cfg.image.max_width, 900);
    assert_eq!(cfg.image.jpeg_quality, 85);
    assert_eq!(cfg.storage.key, "wishlist_items_v1");
    assert_eq!(cfg.storage.quota_bytes, 5 * 1024 * 1024);
    assert!(cfg.storage.dir.is_none());
}

#[test]
fn test_partial_tables_fill_in_defaults() {
    let toml_str = "[image]\nmax_width = 640\n\n[storage]\ndir = \"/tmp/wl\"\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse partial config");
    assert_eq!(cfg.image.max_width, 640);
    assert_eq!(cfg.image.jpeg_quality, 85);
    assert_eq!(cfg.storage.dir, Some(std::path::PathBuf::from("/tmp/wl")));
    assert_eq!(cfg.storage.key, "wishlist_items_v1");
}

#[test]
fn test_unknown_field_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[image]\nmax_height = 10\n");
    assert!(result.is_err());
}

#[test]
fn test_unknown_table_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[registry]\n");
    assert!(result.is_err());
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let dir = tempdir().expect("Should create temp dir");
    let cfg = load_user_config_from(&dir.path().join("config.toml")).expect("Should load");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("Should create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[storage]\nkey = \"custom\"\nquota_bytes = 1024\n").expect("Should write");

    let cfg = load_user_config_from(&path).expect("Should load");
    assert_eq!(cfg.storage.key, "custom");
    assert_eq!(cfg.storage.quota_bytes, 1024);
}

#[test]
fn test_load_from_invalid_file_is_toml_error() {
    let dir = tempdir().expect("Should create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[storage\n").expect("Should write");

    let result = load_user_config_from(&path);
    assert!(matches!(result, Err(UserConfigError::Toml(_))));
}

#[test]
fn test_user_config_path_is_under_wishlist_home() {
    assert!(user_config_path().ends_with(".wishlist/config.toml"));
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig::default();
    let toml_str = toml::to_string(&cfg).expect("Should serialize");
    let back: UserConfig = toml::from_str(&toml_str).expect("Should deserialize");
    assert_eq!(cfg, back);
}
