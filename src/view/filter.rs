//! Column filters
//!
//! At most one filter value per column. A row is visible when every active
//! filter accepts it. The predicate renders the cell as text and checks for a
//! case-insensitive substring match.

use super::join::EnrichedTransaction;
use super::table::{cell_text, Column};

/// Case-insensitive substring match of `filter` within `cell`
pub fn text_filter(cell: &str, filter: &str) -> bool {
    cell.to_lowercase().contains(&filter.to_lowercase())
}

/// Active filter values, one per column at most
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilters {
    values: Vec<(Column, String)>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the filter for `column`.
    ///
    /// The customer-name input is lower-cased on entry. An empty value
    /// removes the filter.
    pub fn set_filter(&mut self, column: Column, value: &str) {
        let value = match column {
            Column::CustomerName => value.to_lowercase(),
            _ => value.to_string(),
        };

        self.values.retain(|(c, _)| *c != column);
        if !value.is_empty() {
            self.values.push((column, value));
        }
    }

    /// Builder form of [`ColumnFilters::set_filter`]
    pub fn with(mut self, column: Column, value: &str) -> Self {
        self.set_filter(column, value);
        self
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.values
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Check if a row passes every active filter
    pub fn matches(&self, row: &EnrichedTransaction) -> bool {
        self.values
            .iter()
            .all(|(column, value)| text_filter(&cell_text(row, *column), value))
    }

    /// Rows passing all filters, in input order
    pub fn apply<'a>(&self, rows: &'a [EnrichedTransaction]) -> Vec<&'a EnrichedTransaction> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}
