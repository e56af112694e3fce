//! # Theme System
//!
//! Provides the color themes shared by the widgets and the demo shell.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines every color the widgets draw with. Widgets
//! take a `&Theme` instead of hardcoding `ratatui::style::Color` values, so
//! the demo can flip between dark and light at runtime.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette

use ratatui::style::Color;

/// All colors used by the widgets, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name shown in the demo header.
    pub name: &'static str,
    /// Whether this is a dark theme (drives the dark/light toggle).
    pub dark: bool,

    // -- Background colors --
    /// Main background color for panels.
    pub bg: Color,
    /// Raised surface, used by filled inputs and the table header.
    pub surface: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (placeholders, helper text, hints).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Focused borders and the table cursor.
    pub accent: Color,
    /// Sort indicators and highlighted labels.
    pub secondary: Color,

    // -- Semantic status colors --
    /// Border of the selection panel while rows are selected.
    pub success: Color,
    /// Invalid fields and error messages.
    pub error: Color,

    /// Background of selected table rows.
    pub selection_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme the dark/light toggle switches to.
    pub fn toggled(&self) -> &'static Theme {
        if self.dark {
            &BUILT_IN_THEMES[1]
        } else {
            &BUILT_IN_THEMES[0]
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        dark: true,
        bg: Color::Rgb(30, 30, 46),           // base
        surface: Color::Rgb(49, 50, 68),      // surface0
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        selection_bg: Color::Rgb(69, 71, 90), // surface1
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        dark: false,
        bg: Color::Rgb(239, 241, 245),            // base
        surface: Color::Rgb(204, 208, 218),       // surface0
        fg: Color::Rgb(76, 79, 105),              // text
        fg_dim: Color::Rgb(156, 160, 176),        // overlay0
        accent: Color::Rgb(30, 102, 245),         // blue
        secondary: Color::Rgb(223, 142, 29),      // yellow
        success: Color::Rgb(64, 160, 43),         // green
        error: Color::Rgb(210, 15, 57),           // red
        selection_bg: Color::Rgb(188, 192, 204),  // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        dark: true,
        bg: Color::Rgb(40, 42, 54),
        surface: Color::Rgb(52, 55, 70),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        dark: true,
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(59, 66, 82),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
];
