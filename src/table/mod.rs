//! # Table Module
//!
//! A sortable, selectable data table for ratatui.
//!
//! ## Components
//!
//! - [`Row`] / [`CellValue`] - caller-owned records
//! - [`Column`] - how one field is titled, rendered and sorted
//! - [`mod@sort`] - single-column stable sort with a three-step header cycle
//! - [`mod@selection`] - positional multi-selection
//! - [`DataTable`] - the widget state, rendered through [`DataTableView`]
//!
//! ## Example
//!
//! ```
//! use widgetry::table::{Column, DataTable, Row};
//!
//! let mut table = DataTable::new(vec![Column::new("name", "Name", "name").sortable()])
//!     .with_selectable(true)
//!     .with_rows(vec![Row::new().with("name", "B"), Row::new().with("name", "A")]);
//!
//! table.toggle_sort_by_key("name");
//! table.toggle_row(0);
//! assert_eq!(table.selected_rows()[0].get("name").to_string(), "A");
//! ```

pub mod column;
pub mod data_table;
pub mod selection;
pub mod sort;
pub mod value;

pub use column::Column;
pub use data_table::{DataTable, DataTableView, RowSelectCallback, TableBody};
pub use selection::{RowIdentity, Selection};
pub use sort::{AriaSort, SortDirection, SortKey, SortState};
pub use value::{CellValue, Row};
