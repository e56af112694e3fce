//! Application state tests
//!
//! Tests for the demo state: search filtering, password validation, focus
//! cycling, loading and the selection the table reports back.

use tempfile::TempDir;
use widgetry::table::Row;
use widgetry::theme::Theme;
use widgetry::ui::app::{FocusPane, MIN_PASSWORD_LEN};
use widgetry::ui::config::Config;
use widgetry::ui::dataset::{sample_users, user_columns};
use widgetry::ui::App;

/// Helper to create a demo app over the built-in users
fn create_test_app() -> App {
    App::new(
        sample_users(),
        user_columns(),
        &Config::default(),
        Theme::default_theme(),
    )
}

fn view_names(app: &App) -> Vec<String> {
    app.table
        .view()
        .iter()
        .map(|r| r.get("name").to_string())
        .collect()
}

#[tokio::test]
async fn test_initial_state() {
    let app = create_test_app();
    assert_eq!(app.focus, FocusPane::Search);
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert_eq!(view_names(&app), vec!["Alice", "Bob", "Charlie"]);
    assert!(app.selected_rows().is_empty());
    assert_eq!(app.theme.name, "Catppuccin Mocha");
}

#[tokio::test]
async fn test_search_filters_and_clears() {
    let mut app = create_test_app();

    app.apply_search("li".to_string());
    assert_eq!(view_names(&app), vec!["Alice", "Charlie"]);

    app.apply_search("zzz".to_string());
    assert!(app.table.view().is_empty());

    app.apply_search(String::new());
    assert_eq!(app.table.rows().len(), 3);
}

#[tokio::test]
async fn test_filtering_prunes_positional_selection() {
    let mut app = create_test_app();
    app.table.toggle_row(2); // Charlie
    assert_eq!(app.selected_rows().len(), 1);

    app.apply_search("Alice".to_string());
    assert!(app.selected_rows().is_empty());
}

#[tokio::test]
async fn test_identity_config_keeps_selection_while_filtering() {
    let config = Config {
        row_identity: Some("id".to_string()),
        ..Config::default()
    };
    let mut app = App::new(sample_users(), user_columns(), &config, Theme::default_theme());
    app.table.toggle_row(2); // Charlie

    app.apply_search("li".to_string());
    let selected: Vec<String> = app
        .selected_rows()
        .iter()
        .map(|r: &Row| r.get("name").to_string())
        .collect();
    assert_eq!(selected, vec!["Charlie"]);
}

#[tokio::test]
async fn test_configured_empty_text() {
    let config = Config {
        empty_text: Some("No users match".to_string()),
        ..Config::default()
    };
    let app = App::new(Vec::new(), user_columns(), &config, Theme::default_theme());
    assert_eq!(app.table.empty_text(), "No users match");
}

#[tokio::test]
async fn test_password_validation_threshold() {
    let mut app = create_test_app();
    let short = "x".repeat(MIN_PASSWORD_LEN - 1);
    app.apply_password(short);
    assert!(app.password.is_invalid());
    assert!(app.password.message().is_some());

    app.apply_password("x".repeat(MIN_PASSWORD_LEN));
    assert!(!app.password.is_invalid());
}

#[tokio::test]
async fn test_focus_cycles_through_all_panes() {
    let mut app = create_test_app();
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Password);
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Table);
    app.toggle_focus();
    assert_eq!(app.focus, FocusPane::Search);
    app.focus_previous();
    assert_eq!(app.focus, FocusPane::Table);
}

#[tokio::test]
async fn test_toggle_theme_round_trip() {
    let mut app = create_test_app();
    app.toggle_theme();
    assert!(!app.theme.dark);
    app.toggle_theme();
    assert!(app.theme.dark);
}

#[tokio::test]
async fn test_toggle_loading_sets_table_and_search() {
    let mut app = create_test_app();
    app.toggle_loading();
    assert!(app.table.is_loading());
    assert!(app.search.is_loading());
    app.toggle_loading();
    assert!(!app.table.is_loading());
    assert!(!app.search.is_loading());
}

#[tokio::test]
async fn test_toggle_theme_saves_to_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("widgetry").join("config.json");
    let mut app = create_test_app().with_config_path(path.clone());

    app.toggle_theme();
    assert_eq!(Config::load_from(&path).unwrap().theme, "Catppuccin Latte");

    app.toggle_theme();
    assert_eq!(Config::load_from(&path).unwrap().theme, "Catppuccin Mocha");
}
