//! Demo dataset: the built-in users and JSON loading.

use crate::table::{Column, Row};
use anyhow::{Context, Result};
use ratatui::layout::Constraint;
use std::fs;
use std::path::Path;

/// The three users the demo starts with.
pub fn sample_users() -> Vec<Row> {
    vec![
        Row::new()
            .with("id", 1)
            .with("name", "Alice")
            .with("email", "alice@example.com")
            .with("age", 25),
        Row::new()
            .with("id", 2)
            .with("name", "Bob")
            .with("email", "bob@example.com")
            .with("age", 30),
        Row::new()
            .with("id", 3)
            .with("name", "Charlie")
            .with("email", "charlie@example.com")
            .with("age", 22),
    ]
}

/// Columns for the built-in users.
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", "name").sortable(),
        Column::new("email", "Email", "email")
            .sortable()
            .width(Constraint::Fill(2)),
        Column::new("age", "Age", "age")
            .sortable()
            .width(Constraint::Length(6)),
    ]
}

/// Load rows from a JSON file holding an array of objects.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    let rows: Vec<Row> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))?;
    tracing::info!(rows = rows.len(), path = %path.display(), "loaded dataset");
    Ok(rows)
}

/// One sortable column per field of the first row, in field-name order.
pub fn columns_for(rows: &[Row]) -> Vec<Column> {
    rows.first()
        .map(|row| {
            row.fields()
                .map(|(field, _)| Column::new(field, format_title(field), field).sortable())
                .collect()
        })
        .unwrap_or_default()
}

/// Convert a field name into a header title.
///
/// Examples:
/// - `first_name` -> `First Name`
/// - `email` -> `Email`
pub fn format_title(field: &str) -> String {
    field
        .split(['_', '-'])
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;
    use tempfile::TempDir;

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("first_name"), "First Name");
        assert_eq!(format_title("email"), "Email");
        assert_eq!(format_title("sign-up_date"), "Sign Up Date");
        assert_eq!(format_title(""), "");
    }

    #[test]
    fn test_columns_for_uses_first_row_fields() {
        let rows = vec![Row::new().with("name", "A").with("age", 3)];
        let columns = columns_for(&rows);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["age", "name"]);
        assert!(columns.iter().all(|c| c.sortable));
        assert!(columns_for(&[]).is_empty());
    }

    #[test]
    fn test_load_rows_from_json_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("users.json");
        fs::write(&path, r#"[{"name": "Dana", "age": 41}, {"name": "Eve"}]"#).expect("write");

        let rows = load_rows(&path).expect("load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("age"), &CellValue::Int(41));
        assert!(rows[1].get("age").is_null());
    }

    #[test]
    fn test_load_rows_rejects_non_array() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("users.json");
        fs::write(&path, r#"{"name": "Dana"}"#).expect("write");

        let err = load_rows(&path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse data file"));
    }

    #[test]
    fn test_sample_users_have_columns_fields() {
        let users = sample_users();
        for column in user_columns() {
            assert!(users.iter().all(|u| !u.get(&column.field).is_null()));
        }
    }
}
