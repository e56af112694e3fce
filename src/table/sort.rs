//! # Sort Engine
//!
//! Orders rows by a single field without touching the input slice.
//!
//! ## Header Cycle
//!
//! Activating a sortable header walks the active column through:
//!
//! ```text
//! none ──▶ ascending ──▶ descending ──▶ none
//! ```
//!
//! Activating a different column starts over at ascending on that column.
//!
//! ## Nulls
//!
//! Null values always order first, in both directions. Descending only
//! reverses comparisons between two non-null values.

use crate::table::value::{CellValue, Row};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// ARIA-style sort attribute for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaSort {
    Ascending,
    Descending,
    None,
}

impl AriaSort {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaSort::Ascending => "ascending",
            AriaSort::Descending => "descending",
            AriaSort::None => "none",
        }
    }
}

/// Which column, if any, currently orders the displayed rows.
///
/// There is no direction without a field and no field without a direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<SortKey>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&SortKey> {
        self.active.as_ref()
    }

    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|key| key.field == field)
            .map(|key| key.direction)
    }

    /// Advance the header cycle for `field`.
    pub fn toggle(&mut self, field: &str) {
        self.active = match self.active.take() {
            Some(key) if key.field == field => match key.direction {
                SortDirection::Ascending => Some(SortKey {
                    field: key.field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortKey {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn aria_sort(&self, field: &str) -> AriaSort {
        match self.direction_for(field) {
            Some(SortDirection::Ascending) => AriaSort::Ascending,
            Some(SortDirection::Descending) => AriaSort::Descending,
            None => AriaSort::None,
        }
    }

    /// Header glyph for a sortable column.
    pub fn indicator(&self, field: &str) -> &'static str {
        match self.direction_for(field) {
            Some(SortDirection::Ascending) => "↑",
            Some(SortDirection::Descending) => "↓",
            None => "↕",
        }
    }
}

/// Compare two cells under a direction. Nulls first regardless of direction.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            let ord = a.natural_cmp(b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

/// Indices into `rows` in display order. Identity order when unsorted.
pub fn sorted_order(rows: &[Row], state: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(key) = state.active() {
        // sort_by is stable, so equal keys keep their input order
        order.sort_by(|&a, &b| {
            compare_cells(rows[a].get(&key.field), rows[b].get(&key.field), key.direction)
        });
    }
    order
}

/// Sorted view of `rows`. The input is left untouched.
pub fn sort_rows<'a>(rows: &'a [Row], state: &SortState) -> Vec<&'a Row> {
    sorted_order(rows, state)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}
