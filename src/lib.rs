//! Widgetry - terminal UI widgets
//!
//! This library provides a styled text input field and a sortable,
//! selectable data table for ratatui, plus the demo shell that composes them.

pub mod input;
pub mod logging;
pub mod table;
pub mod theme;
pub mod ui;
