//! # Input Module
//!
//! A styled, controlled text input for ratatui.
//!
//! ## Components
//!
//! - [`InputField`] - field state and interaction, rendered through [`InputFieldView`]
//! - [`mod@props`] - variants, sizes, kinds and the derived status types
//!
//! ## Features
//!
//! - Label, placeholder, helper text and error message
//! - Clear control (`Ctrl+U`) proposing an empty value
//! - Password masking with an optional reveal toggle (`Ctrl+T`)
//! - Loading spinner that suppresses the other trailing controls

pub mod field;
pub mod props;

pub use field::{ChangeCallback, InputField, InputFieldView};
pub use props::{Adornment, FieldMessage, FieldStatus, InputEvent, InputKind, Size, Variant};
