//! # Input Field Widget
//!
//! [`InputField`] is a controlled single-line text input. The owner holds
//! the value of record: edits are proposed through the change notifier (and
//! returned as [`InputEvent::Changed`]), and only [`InputField::set_value`]
//! changes what the field displays.
//!
//! ## Layout
//!
//! ```text
//! Label
//! ╭──────────────────────────────╮
//! │  value or placeholder      × │
//! ╰──────────────────────────────╯
//! helper text / error message
//! ```

use crate::input::props::{
    Adornment, FieldMessage, FieldStatus, InputEvent, InputKind, Size, Variant,
};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

const MASK: char = '•';

/// Receives the proposed value after an edit.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct InputField {
    value: String,
    id: String,
    name: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: Variant,
    size: Size,
    kind: InputKind,
    clearable: bool,
    password_toggle: bool,
    show_password: bool,
    /// Caret position, in chars.
    cursor: usize,
    on_change: Option<ChangeCallback>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    pub fn new() -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            value: String::new(),
            id: format!("input-{n}"),
            name: None,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: Variant::default(),
            size: Size::default(),
            kind: InputKind::default(),
            clearable: false,
            password_toggle: false,
            show_password: false,
            cursor: 0,
            on_change: None,
        }
    }

    // -- Builders --

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // -- Owner-side setters --

    /// Apply the value of record. Keeps the caret inside the new value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.value.chars().count());
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Mark the field invalid with an optional message, or clear both.
    pub fn set_invalid(&mut self, error_message: Option<String>) {
        self.invalid = error_message.is_some();
        self.error_message = error_message;
    }

    // -- Accessors --

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn field_id(&self) -> &str {
        &self.id
    }

    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn input_kind(&self) -> InputKind {
        self.kind
    }

    pub fn input_variant(&self) -> Variant {
        self.variant
    }

    pub fn input_size(&self) -> Size {
        self.size
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    // -- Derived state --

    pub fn status(&self) -> FieldStatus {
        if self.disabled {
            FieldStatus::Disabled
        } else if self.loading {
            FieldStatus::Loading
        } else if self.invalid {
            FieldStatus::Invalid
        } else {
            FieldStatus::Normal
        }
    }

    fn has_reveal_toggle(&self) -> bool {
        self.kind == InputKind::Password && self.password_toggle
    }

    /// Whether the text is drawn masked.
    pub fn is_masked(&self) -> bool {
        self.kind == InputKind::Password && !(self.password_toggle && self.show_password)
    }

    pub fn is_clear_visible(&self) -> bool {
        self.clearable && !self.loading && !self.value.is_empty()
    }

    /// Trailing controls, in drawing order. Loading shows only the spinner.
    pub fn adornments(&self) -> Vec<Adornment> {
        if self.loading {
            return vec![Adornment::Spinner];
        }
        let mut adornments = Vec::new();
        if self.is_clear_visible() {
            adornments.push(Adornment::Clear);
        }
        if self.has_reveal_toggle() {
            adornments.push(Adornment::Reveal {
                visible: self.show_password,
            });
        }
        adornments
    }

    /// Error text wins over helper text; helper text hides while invalid.
    pub fn message(&self) -> Option<FieldMessage<'_>> {
        if self.invalid {
            self.error_message.as_deref().map(FieldMessage::Error)
        } else {
            self.helper_text.as_deref().map(FieldMessage::Helper)
        }
    }

    /// Ids of the description elements, space separated.
    pub fn described_by(&self) -> Option<String> {
        match self.message()? {
            FieldMessage::Helper(_) => Some(format!("{}-help", self.id)),
            FieldMessage::Error(_) => Some(format!("{}-err", self.id)),
        }
    }

    /// The value as drawn: masked for hidden passwords.
    pub fn display_value(&self) -> String {
        if self.is_masked() {
            std::iter::repeat(MASK).take(self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Total rows the widget occupies.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let message = u16::from(self.message().is_some());
        label + self.size.box_height() + message
    }

    // -- Interaction --

    /// Flip password visibility. No-op unless the reveal control is shown.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if self.disabled || self.loading || !self.has_reveal_toggle() {
            return false;
        }
        self.show_password = !self.show_password;
        true
    }

    /// Activate the clear control: proposes an empty value.
    pub fn clear(&mut self) -> Option<String> {
        if self.disabled || !self.is_clear_visible() {
            return None;
        }
        self.cursor = 0;
        Some(self.propose(String::new()))
    }

    fn propose(&mut self, next: String) -> String {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&next);
        }
        next
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) -> String {
        let mut next = self.value.clone();
        next.insert(self.byte_offset(self.cursor), c);
        self.cursor += 1;
        self.propose(next)
    }

    pub fn delete_backward(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        let mut next = self.value.clone();
        next.replace_range(start..end, "");
        self.cursor -= 1;
        Some(self.propose(next))
    }

    pub fn delete_forward(&mut self) -> Option<String> {
        if self.cursor >= self.value.chars().count() {
            return None;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        let mut next = self.value.clone();
        next.replace_range(start..end, "");
        Some(self.propose(next))
    }

    /// Handle a key press while the field has focus.
    ///
    /// `Ctrl+U` activates the clear control, `Ctrl+T` the password reveal.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        if self.disabled {
            return InputEvent::Ignored;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let len = self.value.chars().count();

        let changed = match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('t') if ctrl => {
                return if self.toggle_password_visibility() {
                    InputEvent::Consumed
                } else {
                    InputEvent::Ignored
                };
            }
            KeyCode::Char(_) if ctrl => return InputEvent::Ignored,
            KeyCode::Char(c) => Some(self.insert_char(c)),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                return InputEvent::Consumed;
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                return InputEvent::Consumed;
            }
            KeyCode::Home => {
                self.cursor = 0;
                return InputEvent::Consumed;
            }
            KeyCode::End => {
                self.cursor = len;
                return InputEvent::Consumed;
            }
            _ => return InputEvent::Ignored,
        };

        match changed {
            Some(value) => InputEvent::Changed(value),
            None => InputEvent::Consumed,
        }
    }

    pub fn widget<'a>(&'a self, theme: &'a Theme) -> InputFieldView<'a> {
        InputFieldView {
            field: self,
            theme,
            focused: false,
        }
    }

    /// Where the terminal cursor goes when the field is focused in `area`.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if self.disabled {
            return None;
        }
        let content = self.layout(area).content;
        if content.width == 0 || content.height == 0 {
            return None;
        }
        let offset = u16::try_from(self.cursor).unwrap_or(u16::MAX);
        let x = content.x.saturating_add(offset).min(content.right().saturating_sub(1));
        Some(Position::new(x, content.y))
    }

    fn layout(&self, area: Rect) -> FieldLayout {
        let mut y = area.y;
        let bottom = area.bottom();

        let label = self.label.as_ref().map(|_| {
            let rect = Rect::new(area.x, y, area.width, 1u16.min(bottom - y));
            y = (y + 1).min(bottom);
            rect
        });

        let box_height = self.size.box_height().min(bottom - y);
        let input = Rect::new(area.x, y, area.width, box_height);
        y = (y + box_height).min(bottom);

        let message = self
            .message()
            .map(|_| Rect::new(area.x, y, area.width, 1u16.min(bottom - y)));

        let inner = match self.variant {
            Variant::Outlined => self.block().inner(input),
            // Unbordered boxes center the text vertically
            Variant::Filled | Variant::Ghost => {
                let row = input.y + input.height.saturating_sub(1) / 2;
                Rect::new(input.x, row, input.width, input.height.min(1))
            }
        };
        let pad = self.size.padding().min(inner.width / 2);
        let content = Rect::new(
            inner.x + pad,
            inner.y,
            inner.width.saturating_sub(pad * 2),
            inner.height.min(1),
        );

        FieldLayout {
            label,
            input,
            message,
            content,
        }
    }

    fn block(&self) -> Block<'static> {
        match self.variant {
            Variant::Outlined => Block::default()
                .borders(self.size.outline())
                .border_type(BorderType::Rounded),
            Variant::Filled | Variant::Ghost => Block::default().borders(Borders::NONE),
        }
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("value", &self.display_value())
            .field("status", &self.status())
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("kind", &self.kind)
            .field("on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

struct FieldLayout {
    label: Option<Rect>,
    input: Rect,
    message: Option<Rect>,
    content: Rect,
}

/// Renderable view of an [`InputField`].
pub struct InputFieldView<'a> {
    field: &'a InputField,
    theme: &'a Theme,
    focused: bool,
}

impl InputFieldView<'_> {
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for InputFieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let field = self.field;
        let theme = self.theme;
        let layout = field.layout(area);
        let status = field.status();

        let dim = if status == FieldStatus::Disabled {
            Modifier::DIM
        } else {
            Modifier::empty()
        };

        if let (Some(rect), Some(label)) = (layout.label, field.label.as_deref()) {
            Paragraph::new(label.to_string())
                .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD | dim))
                .render(rect, buf);
        }

        let border_color = match status {
            FieldStatus::Disabled => theme.fg_dim,
            FieldStatus::Invalid => theme.error,
            FieldStatus::Loading | FieldStatus::Normal if self.focused => theme.accent,
            FieldStatus::Loading | FieldStatus::Normal => theme.fg_dim,
        };
        let background = match field.variant {
            Variant::Filled => theme.surface,
            Variant::Outlined | Variant::Ghost => theme.bg,
        };
        field
            .block()
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background).add_modifier(dim))
            .render(layout.input, buf);

        // Trailing controls take the right edge of the content row
        let trailing: Vec<Span> = field
            .adornments()
            .into_iter()
            .flat_map(|a| {
                let color = match a {
                    Adornment::Spinner => theme.accent,
                    Adornment::Clear | Adornment::Reveal { .. } => theme.fg_dim,
                };
                [Span::raw(" "), Span::styled(a.glyph(), Style::default().fg(color))]
            })
            .collect();
        let trailing_width = u16::try_from(trailing.iter().map(Span::width).sum::<usize>())
            .unwrap_or(u16::MAX)
            .min(layout.content.width);

        let text_area = Rect {
            width: layout.content.width - trailing_width,
            ..layout.content
        };
        let text = if field.value.is_empty() {
            let placeholder = field.placeholder.clone().unwrap_or_default();
            Span::styled(placeholder, Style::default().fg(theme.fg_dim))
        } else {
            Span::styled(field.display_value(), Style::default().fg(theme.fg))
        };
        Paragraph::new(Line::from(text))
            .style(Style::default().add_modifier(dim))
            .render(text_area, buf);

        if trailing_width > 0 {
            let trailing_area = Rect {
                x: text_area.right(),
                width: trailing_width,
                ..layout.content
            };
            Paragraph::new(Line::from(trailing)).render(trailing_area, buf);
        }

        if let (Some(rect), Some(message)) = (layout.message, field.message()) {
            let (text, color) = match message {
                FieldMessage::Helper(text) => (text, theme.fg_dim),
                FieldMessage::Error(text) => (text, theme.error),
            };
            Paragraph::new(text.to_string())
                .style(Style::default().fg(color))
                .render(rect, buf);
        }
    }
}
