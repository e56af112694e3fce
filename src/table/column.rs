use ratatui::layout::Constraint;

/// Describes how one field of a row is rendered and sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Unique key, used as the column's rendering identity.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Name of the row field displayed and sorted by this column.
    pub field: String,
    pub sortable: bool,
    pub width: Constraint,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field: field.into(),
            sortable: false,
            width: Constraint::Fill(1),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }
}
