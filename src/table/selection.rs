//! # Selection Engine
//!
//! Tracks which rows are selected as positions in the current sorted view.
//!
//! Positions are not stable row identities: re-sorting keeps the set of
//! positions but changes which rows they point at. Tables that need the
//! selection to follow the data use [`RowIdentity::Field`], and the table
//! remaps positions through the identity values whenever the view changes.

use crate::table::value::Row;
use std::collections::{BTreeSet, HashSet};

/// How selected rows are identified across view changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowIdentity {
    /// Selection is keyed by position in the sorted view.
    #[default]
    Position,
    /// Selection follows the value of the named field.
    Field(String),
}

/// Set of selected positions in the sorted view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    positions: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `position`.
    pub fn toggle(&mut self, position: usize) {
        if !self.positions.remove(&position) {
            self.positions.insert(position);
        }
    }

    /// Select positions `0..row_count`.
    pub fn select_all(&mut self, row_count: usize) {
        self.positions = (0..row_count).collect();
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True only for a non-empty view whose every position is selected.
    pub fn all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && self.positions.len() == row_count
    }

    /// Selected positions in view order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Drop positions at or past `row_count`.
    pub fn retain_below(&mut self, row_count: usize) {
        self.positions.retain(|&p| p < row_count);
    }

    /// Identity keys of the selected rows, for rows that have one.
    pub fn identity_keys(&self, view: &[&Row], field: &str) -> HashSet<String> {
        self.positions()
            .filter_map(|p| view.get(p))
            .filter_map(|row| row.get(field).identity_key())
            .collect()
    }

    /// Rebuild the selection from identity keys against a new view.
    pub fn restore_from_keys(&mut self, view: &[&Row], field: &str, keys: &HashSet<String>) {
        self.positions = view
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.get(field)
                    .identity_key()
                    .is_some_and(|key| keys.contains(&key))
            })
            .map(|(p, _)| p)
            .collect();
    }

    /// Rows at the selected positions, in view order.
    pub fn materialize<'a>(&self, view: &[&'a Row]) -> Vec<&'a Row> {
        self.positions().filter_map(|p| view.get(p).copied()).collect()
    }
}
