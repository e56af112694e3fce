//! Configuration and dataset loading tests

use std::fs;
use tempfile::TempDir;
use widgetry::table::{CellValue, RowIdentity};
use widgetry::ui::config::Config;
use widgetry::ui::dataset::{columns_for, load_rows};

#[tokio::test]
async fn test_missing_config_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.identity(), RowIdentity::Position);
}

#[tokio::test]
async fn test_config_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("widgetry").join("config.json");

    let config = Config {
        theme: "Nord".to_string(),
        row_identity: Some("id".to_string()),
        empty_text: None,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.theme, "Nord");
    assert_eq!(loaded.identity(), RowIdentity::Field("id".to_string()));
}

#[tokio::test]
async fn test_config_rejects_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"theme": "Nord", "colour": "red"}"#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[tokio::test]
async fn test_partial_config_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"empty_text": "Nothing yet"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme, "Catppuccin Mocha");
    assert_eq!(config.empty_text.as_deref(), Some("Nothing yet"));
}

#[tokio::test]
async fn test_load_rows_with_mixed_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    fs::write(
        &path,
        r#"[
            {"user_id": 1, "full_name": "Ada", "active": true, "score": 9.5},
            {"user_id": 2, "full_name": null, "active": false}
        ]"#,
    )
    .unwrap();

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("score"), &CellValue::Float(9.5));
    assert!(rows[1].get("full_name").is_null());
    assert!(rows[1].get("score").is_null());

    let titles: Vec<String> = columns_for(&rows).into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Active", "Full Name", "Score", "User Id"]);
}

#[tokio::test]
async fn test_load_rows_rejects_non_array() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    fs::write(&path, r#"{"name": "Ada"}"#).unwrap();

    let err = load_rows(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse data file"));
}

#[tokio::test]
async fn test_load_rows_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_rows(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read data file"));
}
