use crate::input::{InputEvent, InputField, InputKind, Size, Variant};
use crate::table::{Column, DataTable, Row};
use crate::theme::Theme;
use crate::ui::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Field the search box filters on.
pub const SEARCH_FIELD: &str = "name";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Search,
    Password,
    Table,
}

pub struct App {
    pub users: Vec<Row>,
    pub search: InputField,
    pub password: InputField,
    pub table: DataTable,
    pub focus: FocusPane,
    pub theme: &'static Theme,
    pub should_quit: bool,
    pub show_help: bool,
    /// Last selection reported by the table.
    selected: Rc<RefCell<Vec<Row>>>,
    /// Where theme changes are saved; nothing is written when unset.
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(users: Vec<Row>, columns: Vec<Column>, config: &Config, theme: &'static Theme) -> Self {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);

        let mut table = DataTable::new(columns)
            .with_identity(config.identity())
            .on_row_select(move |rows: &[&Row]| {
                tracing::info!(count = rows.len(), "Selected rows changed");
                *sink.borrow_mut() = rows.iter().map(|&r| r.clone()).collect();
            })
            .with_selectable(true)
            .with_rows(users.clone());
        if let Some(text) = &config.empty_text {
            table.set_empty_text(text.clone());
        }

        let search = InputField::new()
            .id("search")
            .label("Search users")
            .placeholder("Type a name…")
            .helper_text("Try Alice, Bob, or Charlie")
            .variant(Variant::Outlined)
            .size(Size::Medium)
            .clearable(true);

        let password = InputField::new()
            .id("password")
            .label("Password")
            .placeholder("Enter your password")
            .kind(InputKind::Password)
            .password_toggle(true)
            .variant(Variant::Filled)
            .size(Size::Medium);

        Self {
            users,
            search,
            password,
            table,
            focus: FocusPane::Search,
            theme,
            should_quit: false,
            show_help: false,
            selected,
            config_path: None,
        }
    }

    /// Save theme changes to the config file at `path`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Users whose name contains the search query, case-insensitively.
    pub fn filtered_users(&self) -> Vec<Row> {
        let query = self.search.value().to_lowercase();
        self.users
            .iter()
            .filter(|u| u.get(SEARCH_FIELD).to_string().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Apply a new search value and refilter the table.
    pub fn apply_search(&mut self, value: String) {
        self.search.set_value(value);
        let rows = self.filtered_users();
        tracing::debug!(query = self.search.value(), matches = rows.len(), "search changed");
        self.table.set_rows(rows);
    }

    /// Apply a new password value and revalidate it.
    pub fn apply_password(&mut self, value: String) {
        let too_short = !value.is_empty() && value.chars().count() < MIN_PASSWORD_LEN;
        self.password.set_value(value);
        self.password.set_invalid(
            too_short.then(|| format!("Use at least {MIN_PASSWORD_LEN} characters")),
        );
    }

    /// Rows most recently reported by the table's selection callback.
    pub fn selected_rows(&self) -> Vec<Row> {
        self.selected.borrow().clone()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Search => FocusPane::Password,
            FocusPane::Password => FocusPane::Table,
            FocusPane::Table => FocusPane::Search,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FocusPane::Search => FocusPane::Table,
            FocusPane::Password => FocusPane::Search,
            FocusPane::Table => FocusPane::Password,
        };
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = self.theme.name, "theme toggled");

        if let Some(path) = &self.config_path {
            if let Err(e) = Config::persist_theme(path, self.theme.name) {
                tracing::warn!("Failed to save theme: {e:#}");
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Flip the loading state of the table and the search box together.
    pub fn toggle_loading(&mut self) {
        let loading = !self.table.is_loading();
        self.table.set_loading(loading);
        self.search.set_loading(loading);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return;
        }

        match key.code {
            KeyCode::Tab => return self.toggle_focus(),
            KeyCode::BackTab => return self.focus_previous(),
            KeyCode::Esc if self.focus != FocusPane::Table => {
                self.focus = FocusPane::Table;
                return;
            }
            _ => {}
        }

        match self.focus {
            FocusPane::Search => {
                if let InputEvent::Changed(value) = self.search.handle_key(key) {
                    self.apply_search(value);
                }
            }
            FocusPane::Password => {
                if let InputEvent::Changed(value) = self.password.handle_key(key) {
                    self.apply_password(value);
                }
            }
            FocusPane::Table => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('L') => self.toggle_loading(),
                KeyCode::Char('?') => self.toggle_help(),
                KeyCode::Char('/') => self.focus = FocusPane::Search,
                _ => {
                    self.table.handle_key(key);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dataset::{sample_users, user_columns};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(
            sample_users(),
            user_columns(),
            &Config::default(),
            Theme::default_theme(),
        )
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut app = app();
        app.apply_search("AL".to_string());
        let names: Vec<String> = app
            .table
            .view()
            .iter()
            .map(|r| r.get("name").to_string())
            .collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_typing_in_search_goes_through_apply() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.search.value(), "b");
        assert_eq!(app.table.rows().len(), 1);
    }

    #[test]
    fn test_short_password_is_invalid() {
        let mut app = app();
        app.apply_password("abc".to_string());
        assert!(app.password.is_invalid());
        app.apply_password("abcdefgh".to_string());
        assert!(!app.password.is_invalid());
        app.apply_password(String::new());
        assert!(!app.password.is_invalid());
    }

    #[test]
    fn test_focus_cycle_both_ways() {
        let mut app = app();
        app.toggle_focus();
        assert_eq!(app.focus, FocusPane::Password);
        app.focus_previous();
        app.focus_previous();
        assert_eq!(app.focus, FocusPane::Table);
    }

    #[test]
    fn test_ctrl_c_quits_from_inputs() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
