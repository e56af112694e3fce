//! # UI Module
//!
//! The demo shell that wires an [`crate::input::InputField`] search box and a
//! password field to a [`crate::table::DataTable`] of users.
//!
//! ## Components
//!
//! - [`App`] - demo state (focus, inputs, table, last reported selection)
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`mod@config`] - persisted settings
//! - [`mod@dataset`] - built-in users and JSON loading
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────────────────────────────────┤
//! │  Search users            Password               │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │   DataTable (sortable, selectable)              │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │   Selected rows                                 │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod dataset;
pub mod render;

pub use app::App;
pub use render::render;
