use crate::column::Column;

/// Get a column by name
pub fn col(name: &str) -> Column {
    Column::new(name.to_string())
}

/// Substring containment (literal, case-sensitive).
pub fn contains(column: &Column, substring: &str) -> Column {
    column.contains(substring)
}
