//! Widget rendering tests
//!
//! Draws widgets into an in-memory buffer and checks the visible text.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use widgetry::input::{Adornment, InputField, InputKind};
use widgetry::table::{Column, DataTable, Row};
use widgetry::theme::Theme;

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw_table(table: &DataTable) -> String {
    let area = Rect::new(0, 0, 48, 8);
    let mut buf = Buffer::empty(area);
    table
        .widget(Theme::default_theme())
        .title("Users")
        .render(area, &mut buf);
    buffer_text(&buf)
}

fn draw_field(field: &InputField) -> String {
    let area = Rect::new(0, 0, 40, field.height());
    let mut buf = Buffer::empty(area);
    field.widget(Theme::default_theme()).render(area, &mut buf);
    buffer_text(&buf)
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", "name").sortable(),
        Column::new("age", "Age", "age"),
    ]
}

#[test]
fn test_empty_table_shows_custom_text() {
    let table = DataTable::new(columns()).with_empty_text("Nothing here");
    let text = draw_table(&table);
    assert!(text.contains("Nothing here"));
    assert!(text.contains("Name ↕"));
}

#[test]
fn test_loading_takes_precedence_over_empty_text() {
    let table = DataTable::new(columns())
        .with_empty_text("Nothing here")
        .with_loading(true);
    let text = draw_table(&table);
    assert!(text.contains("Loading…"));
    assert!(!text.contains("Nothing here"));
}

#[test]
fn test_loading_hides_rows() {
    let table = DataTable::new(columns())
        .with_rows(vec![Row::new().with("name", "Alice").with("age", 25)])
        .with_loading(true);
    let text = draw_table(&table);
    assert!(text.contains("Loading…"));
    assert!(!text.contains("Alice"));
}

#[test]
fn test_rows_render_in_sorted_order_with_indicator() {
    let mut table = DataTable::new(columns()).with_rows(vec![
        Row::new().with("name", "Bob").with("age", 30),
        Row::new().with("name", "Alice").with("age", 25),
    ]);
    table.toggle_sort(0);
    let text = draw_table(&table);

    assert!(text.contains("Name ↑"));
    // Unsortable headers carry no indicator
    assert!(!text.contains("Age ↕"));
    let alice = text.find("Alice").expect("Alice rendered");
    let bob = text.find("Bob").expect("Bob rendered");
    assert!(alice < bob);
}

#[test]
fn test_checkbox_column_tracks_selection() {
    let mut table = DataTable::new(columns())
        .with_selectable(true)
        .with_rows(vec![
            Row::new().with("name", "Alice"),
            Row::new().with("name", "Bob"),
        ]);
    table.toggle_row(1);
    let text = draw_table(&table);
    let bob_line = text
        .lines()
        .find(|l| l.contains("Bob"))
        .expect("Bob row");
    let alice_line = text
        .lines()
        .find(|l| l.contains("Alice"))
        .expect("Alice row");
    assert!(bob_line.contains("[x]"));
    assert!(alice_line.contains("[ ]"));

    table.set_all_selected(true);
    let header = draw_table(&table)
        .lines()
        .find(|l| l.contains("Name"))
        .map(str::to_string)
        .expect("header row");
    assert!(header.contains("[x]"));
}

#[test]
fn test_input_shows_label_placeholder_and_helper() {
    let field = InputField::new()
        .label("Email")
        .placeholder("you@example.com")
        .helper_text("We never share it");
    let text = draw_field(&field);
    assert!(text.contains("Email"));
    assert!(text.contains("you@example.com"));
    assert!(text.contains("We never share it"));
}

#[test]
fn test_invalid_input_shows_error_instead_of_helper() {
    let field = InputField::new()
        .label("Email")
        .helper_text("We never share it")
        .error_message("Invalid")
        .invalid(true);
    let text = draw_field(&field);
    assert!(text.contains("Invalid"));
    assert!(!text.contains("We never share it"));
}

#[test]
fn test_password_renders_masked_until_revealed() {
    let mut field = InputField::new()
        .label("Password")
        .kind(InputKind::Password)
        .password_toggle(true)
        .with_value("hunter22");
    let text = draw_field(&field);
    assert!(!text.contains("hunter22"));
    assert!(text.contains("••••••••"));

    field.toggle_password_visibility();
    assert!(draw_field(&field).contains("hunter22"));
}

#[test]
fn test_loading_input_draws_spinner_only() {
    let field = InputField::new()
        .with_value("abc")
        .clearable(true)
        .loading(true);
    let text = draw_field(&field);
    assert!(text.contains(Adornment::Spinner.glyph()));
    assert!(!text.contains(Adornment::Clear.glyph()));
}

#[test]
fn test_focused_table_labels_checkbox_under_cursor() {
    let mut table = DataTable::new(columns())
        .with_selectable(true)
        .with_rows(vec![
            Row::new().with("name", "Alice"),
            Row::new().with("name", "Bob"),
        ]);
    let area = Rect::new(0, 0, 48, 8);
    let draw_focused = |table: &DataTable| {
        let mut buf = Buffer::empty(area);
        table
            .widget(Theme::default_theme())
            .focused(true)
            .render(area, &mut buf);
        buffer_text(&buf)
    };

    assert!(draw_focused(&table).contains("Select row 1"));
    table.cursor_down();
    assert!(draw_focused(&table).contains("Select row 2"));

    // Unfocused tables carry no label
    assert!(!draw_table(&table).contains("Select row"));
}
