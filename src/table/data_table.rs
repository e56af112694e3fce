//! # Data Table Widget
//!
//! [`DataTable`] owns the caller's rows and columns together with the sort
//! and selection state derived from user interaction. Rendering goes through
//! [`DataTableView`], which borrows the table and a [`Theme`].
//!
//! ## Body Precedence
//!
//! ```text
//! loading ──▶ "Loading…"
//! no rows ──▶ empty text
//! otherwise ──▶ sorted rows
//! ```
//!
//! ## Selection Notifications
//!
//! Every change to the selection, the sorted view, the dataset, or the
//! selectable flag reports the rows at the selected positions to the
//! registered callback, as long as selection is enabled.

use crate::table::column::Column;
use crate::table::selection::{RowIdentity, Selection};
use crate::table::sort::{sorted_order, AriaSort, SortState};
use crate::table::value::Row;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, Borders, Cell, Paragraph, Row as TableRow, StatefulWidget, Table, TableState,
        Widget,
    },
};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_EMPTY_TEXT: &str = "No data available";
pub const LOADING_TEXT: &str = "Loading…";

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Receives the currently selected rows, in view order.
pub type RowSelectCallback = Box<dyn FnMut(&[&Row])>;

/// What the table body shows.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    Loading,
    Empty(&'a str),
    Rows(Vec<&'a Row>),
}

pub struct DataTable {
    rows: Vec<Row>,
    columns: Vec<Column>,
    loading: bool,
    selectable: bool,
    empty_text: String,
    identity: RowIdentity,
    sort: SortState,
    /// Indices into `rows` in display order.
    order: Vec<usize>,
    selection: Selection,
    cursor_row: usize,
    cursor_column: usize,
    on_row_select: Option<RowSelectCallback>,
}

fn view_of<'a>(rows: &'a [Row], order: &[usize]) -> Vec<&'a Row> {
    order.iter().map(|&i| &rows[i]).collect()
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            loading: false,
            selectable: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            identity: RowIdentity::Position,
            sort: SortState::new(),
            order: Vec::new(),
            selection: Selection::new(),
            cursor_row: 0,
            cursor_column: 0,
            on_row_select: None,
        }
    }

    // -- Builders --

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.set_selectable(selectable);
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn with_identity(mut self, identity: RowIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn on_row_select(mut self, callback: impl FnMut(&[&Row]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    // -- Accessors --

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    pub fn identity(&self) -> &RowIdentity {
        &self.identity
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    /// Rows in display order.
    pub fn view(&self) -> Vec<&Row> {
        view_of(&self.rows, &self.order)
    }

    /// Rows at the selected positions, in display order.
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.selection.materialize(&self.view())
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selection.contains(position)
    }

    /// State of the header-level select-all control.
    pub fn all_selected(&self) -> bool {
        self.selectable && self.selection.all_selected(self.rows.len())
    }

    pub fn aria_sort(&self, column: usize) -> AriaSort {
        self.columns
            .get(column)
            .map_or(AriaSort::None, |c| self.sort.aria_sort(&c.field))
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.loading {
            TableBody::Loading
        } else if self.rows.is_empty() {
            TableBody::Empty(&self.empty_text)
        } else {
            TableBody::Rows(self.view())
        }
    }

    /// Accessible label of a row checkbox.
    pub fn row_label(position: usize) -> String {
        format!("Select row {}", position + 1)
    }

    // -- Mutations --

    /// Replace the dataset.
    ///
    /// Positional selections past the new row count are dropped. With
    /// [`RowIdentity::Field`] the selection follows the identity values.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let remembered = self.remember_selection();
        self.rows = rows;
        self.order = sorted_order(&self.rows, &self.sort);
        self.restore_selection(remembered);
        self.clamp_cursor();
        tracing::debug!(rows = self.rows.len(), "table data replaced");
        self.notify();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        if self.selectable != selectable {
            self.selectable = selectable;
            self.notify();
        }
    }

    pub fn set_empty_text(&mut self, text: impl Into<String>) {
        self.empty_text = text.into();
    }

    /// Advance the sort cycle of the column at `column`.
    ///
    /// Returns `false` when the column does not exist or is not sortable.
    pub fn toggle_sort(&mut self, column: usize) -> bool {
        let Some(col) = self.columns.get(column) else {
            return false;
        };
        if !col.sortable {
            return false;
        }
        let field = col.field.clone();

        let remembered = self.remember_selection();
        self.sort.toggle(&field);
        self.order = sorted_order(&self.rows, &self.sort);
        self.restore_selection(remembered);
        tracing::debug!(field = %field, sort = self.sort.aria_sort(&field).as_str(), "sort changed");
        self.notify();
        true
    }

    pub fn toggle_sort_by_key(&mut self, key: &str) -> bool {
        match self.columns.iter().position(|c| c.key == key) {
            Some(index) => self.toggle_sort(index),
            None => false,
        }
    }

    /// Flip the row at `position` in the current view.
    pub fn toggle_row(&mut self, position: usize) {
        if !self.selectable || position >= self.rows.len() {
            return;
        }
        self.selection.toggle(position);
        self.notify();
    }

    /// Header checkbox: select every row in the view, or clear.
    pub fn set_all_selected(&mut self, checked: bool) {
        if !self.selectable {
            return;
        }
        if checked {
            self.selection.select_all(self.rows.len());
        } else {
            self.selection.clear();
        }
        self.notify();
    }

    pub fn toggle_all(&mut self) {
        let checked = !self.all_selected();
        self.set_all_selected(checked);
    }

    // -- Cursor --

    pub fn cursor_down(&mut self) {
        if !self.rows.is_empty() {
            self.cursor_row = (self.cursor_row + 1) % self.rows.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.rows.is_empty() {
            self.cursor_row = if self.cursor_row > 0 {
                self.cursor_row - 1
            } else {
                self.rows.len() - 1
            };
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_column = self.cursor_column.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_column + 1 < self.columns.len() {
            self.cursor_column += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor_row = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor_row = self.rows.len().saturating_sub(1);
    }

    /// Handle a key press while the table has focus.
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Left | KeyCode::Char('h') => self.cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor_right(),
            KeyCode::Home | KeyCode::Char('g') => self.cursor_first(),
            KeyCode::End | KeyCode::Char('G') => self.cursor_last(),
            KeyCode::Enter | KeyCode::Char('s') => {
                self.toggle_sort(self.cursor_column);
            }
            KeyCode::Char(' ') if self.selectable && !self.loading => {
                self.toggle_row(self.cursor_row);
            }
            KeyCode::Char('a') if self.selectable => self.toggle_all(),
            _ => return false,
        }
        true
    }

    pub fn widget<'a>(&'a self, theme: &'a Theme) -> DataTableView<'a> {
        DataTableView {
            table: self,
            theme,
            focused: false,
            title: None,
        }
    }

    // -- Internals --

    fn remember_selection(&self) -> Option<HashSet<String>> {
        match &self.identity {
            RowIdentity::Field(field) => Some(self.selection.identity_keys(&self.view(), field)),
            RowIdentity::Position => None,
        }
    }

    fn restore_selection(&mut self, remembered: Option<HashSet<String>>) {
        match (&self.identity, remembered) {
            (RowIdentity::Field(field), Some(keys)) => {
                let view = view_of(&self.rows, &self.order);
                self.selection.restore_from_keys(&view, field, &keys);
            }
            _ => self.selection.retain_below(self.rows.len()),
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor_row = self.cursor_row.min(self.rows.len().saturating_sub(1));
        self.cursor_column = self.cursor_column.min(self.columns.len().saturating_sub(1));
    }

    fn notify(&mut self) {
        if !self.selectable {
            return;
        }
        let Some(callback) = self.on_row_select.as_mut() else {
            return;
        };
        let view = view_of(&self.rows, &self.order);
        let selected = self.selection.materialize(&view);
        tracing::debug!(selected = selected.len(), "row selection reported");
        callback(&selected);
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("on_row_select", &self.on_row_select.is_some())
            .finish()
    }
}

/// Renderable view of a [`DataTable`].
pub struct DataTableView<'a> {
    table: &'a DataTable,
    theme: &'a Theme,
    focused: bool,
    title: Option<&'a str>,
}

impl<'a> DataTableView<'a> {
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn header(&self) -> TableRow<'a> {
        let table = self.table;
        let theme = self.theme;
        let mut cells = Vec::with_capacity(table.columns.len() + 1);

        if table.selectable {
            let mark = if table.all_selected() { CHECKED } else { UNCHECKED };
            cells.push(Cell::from(mark));
        }

        for (i, col) in table.columns.iter().enumerate() {
            let label = if col.sortable {
                format!("{} {}", col.title, table.sort.indicator(&col.field))
            } else {
                col.title.clone()
            };
            let mut style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);
            if table.sort.direction_for(&col.field).is_some() {
                style = style.fg(theme.secondary);
            }
            if self.focused && i == table.cursor_column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            cells.push(Cell::from(label).style(style));
        }

        TableRow::new(cells).style(Style::default().bg(theme.surface))
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = Vec::with_capacity(self.table.columns.len() + 1);
        if self.table.selectable {
            widths.push(Constraint::Length(3));
        }
        widths.extend(self.table.columns.iter().map(|c| c.width));
        widths
    }
}

impl Widget for DataTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_color = if self.focused { theme.accent } else { theme.fg_dim };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg).fg(theme.fg));
        if let Some(title) = self.title {
            block = block.title(title);
        }
        // Label of the checkbox under the cursor
        let table = self.table;
        if self.focused && table.selectable && !table.loading && !table.rows.is_empty() {
            block = block.title_bottom(
                Line::from(format!(" {} ", DataTable::row_label(table.cursor_row)))
                    .right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let view = match self.table.body() {
            TableBody::Loading => {
                self.render_message(LOADING_TEXT, inner, buf);
                return;
            }
            TableBody::Empty(text) => {
                self.render_message(text, inner, buf);
                return;
            }
            TableBody::Rows(view) => view,
        };

        let rows: Vec<TableRow> = view
            .iter()
            .enumerate()
            .map(|(position, row)| {
                let selected = self.table.is_selected(position);
                let mut cells = Vec::with_capacity(self.table.columns.len() + 1);
                if self.table.selectable {
                    cells.push(Cell::from(if selected { CHECKED } else { UNCHECKED }));
                }
                cells.extend(
                    self.table
                        .columns
                        .iter()
                        .map(|col| Cell::from(row.get(&col.field).to_string())),
                );
                let style = if selected {
                    Style::default().bg(theme.selection_bg)
                } else {
                    Style::default()
                };
                TableRow::new(cells).style(style)
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };

        // TableState scrolls the offset so the cursor row stays visible
        let mut state = TableState::default().with_selected(Some(self.table.cursor_row));
        let table = Table::new(rows, self.widths())
            .header(self.header())
            .column_spacing(1)
            .row_highlight_style(highlight);
        StatefulWidget::render(table, inner, buf, &mut state);
    }
}

impl DataTableView<'_> {
    /// Header plus a centered message in place of the rows.
    fn render_message(&self, message: &str, inner: Rect, buf: &mut Buffer) {
        let table = Table::new(Vec::<TableRow>::new(), self.widths())
            .header(self.header())
            .column_spacing(1);
        Widget::render(table, inner, buf);

        if inner.height > 2 {
            let message_area = Rect {
                x: inner.x,
                y: inner.y + 2,
                width: inner.width,
                height: 1,
            };
            Paragraph::new(message.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.fg_dim))
                .render(message_area, buf);
        }
    }
}
