//! Table data provider
//!
//! Column definitions, cell rendering, and the enriched row set handed to a
//! grid widget.

use serde::{Deserialize, Serialize};

use super::filter::ColumnFilters;
use super::join::{enrich, EnrichedTransaction};
use crate::dataset::{format_amount, Dataset};

/// Table column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    CustomerName,
    Date,
    Amount,
}

impl Column {
    /// Columns in display order
    pub fn all() -> &'static [Column] {
        &[Column::CustomerName, Column::Date, Column::Amount]
    }

    /// Header text
    pub fn header(&self) -> &'static str {
        match self {
            Column::CustomerName => "Customer Name",
            Column::Date => "Transaction Date",
            Column::Amount => "Transaction Amount",
        }
    }

    /// Field name on [`EnrichedTransaction`] (as serialized)
    pub fn accessor(&self) -> &'static str {
        match self {
            Column::CustomerName => "customerName",
            Column::Date => "date",
            Column::Amount => "amount",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accessor())
    }
}

/// Render a cell as text
pub fn cell_text(row: &EnrichedTransaction, column: Column) -> String {
    match column {
        Column::CustomerName => row.customer_name.clone(),
        Column::Date => row.date.clone(),
        Column::Amount => format_amount(row.amount),
    }
}

/// What a grid widget needs: columns, rows, and filter setters
pub trait TableSource {
    fn columns(&self) -> &'static [Column] {
        Column::all()
    }

    /// Every row, unfiltered
    fn rows(&self) -> &[EnrichedTransaction];

    /// Set or clear the filter for a column
    fn set_filter(&mut self, column: Column, value: &str);

    /// Rows passing the active filters, in row order
    fn visible_rows(&self) -> Vec<&EnrichedTransaction>;
}

/// Enriched rows plus filter state
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    rows: Vec<EnrichedTransaction>,
    filters: ColumnFilters,
}

impl TableModel {
    /// Join the dataset once; the rows never change afterwards
    pub fn new(dataset: &Dataset) -> Self {
        Self::from_rows(enrich(&dataset.transactions, &dataset.customers))
    }

    pub fn from_rows(rows: Vec<EnrichedTransaction>) -> Self {
        Self {
            rows,
            filters: ColumnFilters::new(),
        }
    }

    pub fn filters(&self) -> &ColumnFilters {
        &self.filters
    }
}

impl TableSource for TableModel {
    fn rows(&self) -> &[EnrichedTransaction] {
        &self.rows
    }

    fn set_filter(&mut self, column: Column, value: &str) {
        self.filters.set_filter(column, value);
        tracing::debug!(column = %column, value, "Filter updated");
    }

    fn visible_rows(&self) -> Vec<&EnrichedTransaction> {
        self.filters.apply(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Customer, Transaction};

    fn model() -> TableModel {
        TableModel::new(&Dataset::new(
            vec![Customer::new(1, "Alice")],
            vec![
                Transaction::new(1, "2024-01-01", 10.0),
                Transaction::new(1, "2024-01-01", 5.0),
                Transaction::new(2, "2024-01-02", 7.0),
            ],
        ))
    }

    #[test]
    fn test_columns() {
        let headers: Vec<&str> = model().columns().iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec!["Customer Name", "Transaction Date", "Transaction Amount"]
        );
        assert_eq!(Column::CustomerName.accessor(), "customerName");
    }

    #[test]
    fn test_cell_text() {
        let model = model();
        let row = &model.rows()[2];
        assert_eq!(cell_text(row, Column::CustomerName), "Unknown");
        assert_eq!(cell_text(row, Column::Date), "2024-01-02");
        assert_eq!(cell_text(row, Column::Amount), "7");
    }

    #[test]
    fn test_visible_rows_follow_filters() {
        let mut model = model();
        assert_eq!(model.visible_rows().len(), 3);

        model.set_filter(Column::CustomerName, "ali");
        assert_eq!(model.visible_rows().len(), 2);
        assert_eq!(model.rows().len(), 3);

        model.set_filter(Column::CustomerName, "");
        assert_eq!(model.visible_rows().len(), 3);
    }
}
