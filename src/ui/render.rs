use crate::ui::app::{App, FocusPane};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    let inputs_height = app.search.height().max(app.password.height());

    // Header + Inputs + Table + Selection + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(inputs_height), // Inputs
            Constraint::Min(6),                // Table
            Constraint::Length(6),             // Selection
            Constraint::Length(1),             // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_inputs(frame, app, main_chunks[1]);

    frame.render_widget(
        app.table
            .widget(theme)
            .title(" DataTable ")
            .focused(app.focus == FocusPane::Table),
        main_chunks[2],
    );

    render_selection(frame, app, main_chunks[3]);
    render_footer(frame, app, main_chunks[4]);

    if app.show_help {
        render_help_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  UI Components Demo",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   theme: {}", theme.name),
            Style::default().fg(theme.fg_dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(area);

    let search_focused = app.focus == FocusPane::Search;
    let password_focused = app.focus == FocusPane::Password;

    frame.render_widget(
        app.search.widget(app.theme).focused(search_focused),
        chunks[0],
    );
    frame.render_widget(
        app.password.widget(app.theme).focused(password_focused),
        chunks[1],
    );

    let cursor = if search_focused {
        app.search.cursor_position(chunks[0])
    } else if password_focused {
        app.password.cursor_position(chunks[1])
    } else {
        None
    };
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn render_selection(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let selected = app.selected_rows();

    let lines: Vec<Line> = if selected.is_empty() {
        vec![Line::from(Span::styled(
            "No rows selected",
            Style::default().fg(theme.fg_dim),
        ))]
    } else {
        selected
            .iter()
            .map(|row| {
                let json = serde_json::to_string(row).unwrap_or_default();
                Line::from(json)
            })
            .collect()
    };

    let border_color = if selected.is_empty() {
        theme.fg_dim
    } else {
        theme.success
    };
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Selected ({}) ", selected.len()))
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        FocusPane::Search => "[Type] Filter  [Ctrl+U] Clear  [Tab] Next  [Esc] Table  [Ctrl+C] Quit",
        FocusPane::Password => {
            "[Type] Edit  [Ctrl+T] Show/Hide  [Tab] Next  [Esc] Table  [Ctrl+C] Quit"
        }
        FocusPane::Table => {
            "[↑↓/jk] Row  [←→/hl] Column  [Enter/s] Sort  [Space] Select  [a] All  [t] Theme  [?] Help  [q] Quit"
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));

    frame.render_widget(footer, area);
}

fn render_help_modal(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(60, 60, frame.area());

    let key_style = Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD);
    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("{keys:<14}"), key_style),
            Span::raw(action),
        ])
    };

    let lines = vec![
        entry("Tab / S-Tab", "Move focus"),
        entry("Enter / s", "Cycle sort on the current column"),
        entry("Space", "Toggle the current row"),
        entry("a", "Select / deselect all rows"),
        entry("L", "Toggle loading state"),
        entry("t", "Toggle dark / light theme"),
        entry("Ctrl+U", "Clear the search box"),
        entry("Ctrl+T", "Show / hide password"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.fg_dim),
        )),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.bg).fg(theme.fg)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A rect of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
