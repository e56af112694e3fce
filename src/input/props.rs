use ratatui::widgets::Borders;

/// Visual treatment of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Surface-colored background, no border.
    Filled,
    /// Border around the input.
    #[default]
    Outlined,
    /// No border, no background.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Horizontal padding inside the box, in cells.
    pub fn padding(self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        }
    }

    /// Height of the input box, in rows.
    pub fn box_height(self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium | Size::Large => 3,
        }
    }

    /// Borders an outlined box of this size can draw.
    pub fn outline(self) -> Borders {
        match self {
            Size::Small => Borders::LEFT | Borders::RIGHT,
            Size::Medium | Size::Large => Borders::ALL,
        }
    }
}

/// What kind of value the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Search,
    Number,
}

/// Resolved state of the field, highest priority first.
///
/// The flags can all be set at once; styling follows the first that holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Disabled,
    Loading,
    Invalid,
    Normal,
}

/// Controls drawn at the trailing edge of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adornment {
    Spinner,
    Clear,
    /// Password reveal toggle; `visible` is the current visibility.
    Reveal { visible: bool },
}

impl Adornment {
    pub fn glyph(self) -> &'static str {
        match self {
            Adornment::Spinner => "⠿",
            Adornment::Clear => "×",
            Adornment::Reveal { visible: false } => "show",
            Adornment::Reveal { visible: true } => "hide",
        }
    }

    /// Accessible label of the control.
    pub fn label(self) -> &'static str {
        match self {
            Adornment::Spinner => "Loading",
            Adornment::Clear => "Clear input",
            Adornment::Reveal { visible: false } => "Show password",
            Adornment::Reveal { visible: true } => "Hide password",
        }
    }
}

/// Text shown under the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMessage<'a> {
    Helper(&'a str),
    Error(&'a str),
}

/// Result of feeding a key to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked for a new value. The field itself is unchanged until
    /// the owner calls `set_value`.
    Changed(String),
    /// The key was handled without a value change.
    Consumed,
    Ignored,
}
