//! CustomerTable
//!
//! State behind the table-plus-chart component: the joined rows, the column
//! filters, and at most one selected customer. Selecting a row recomputes
//! the selected customer's transactions and daily totals; nothing else does.

use super::aggregate::{
    daily_totals, selected_transactions, selection_at, DailyAggregate, Selection,
};
use super::chart::{ChartData, ChartOptions, ChartSource};
use super::join::EnrichedTransaction;
use super::table::{Column, TableModel, TableSource};
use crate::config::ChartConfig;
use crate::dataset::{Dataset, Transaction};

/// Table, filters, selection and derived chart input for one dataset
#[derive(Debug, Clone)]
pub struct CustomerTable {
    table: TableModel,
    transactions: Vec<Transaction>,
    chart_config: ChartConfig,
    selection: Option<Selection>,
    selected: Vec<Transaction>,
    totals: DailyAggregate,
}

impl CustomerTable {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_chart_config(dataset, ChartConfig::default())
    }

    pub fn with_chart_config(dataset: Dataset, chart_config: ChartConfig) -> Self {
        let table = TableModel::new(&dataset);
        Self {
            table,
            transactions: dataset.transactions,
            chart_config,
            selection: None,
            selected: Vec::new(),
            totals: DailyAggregate::new(),
        }
    }

    /// Select the customer behind the visible row at `index`.
    ///
    /// Returns the new selection, or `None` (state untouched) when the index
    /// is past the visible rows.
    pub fn select_row(&mut self, index: usize) -> Option<&Selection> {
        let selection = selection_at(&self.table.visible_rows(), index);

        match selection {
            Some(selection) => {
                self.select(Some(selection));
                self.selection.as_ref()
            }
            None => {
                tracing::warn!(index, "Row index out of range, selection unchanged");
                None
            }
        }
    }

    /// Set or clear the selection and recompute the derived data
    pub fn select(&mut self, selection: Option<Selection>) {
        self.selected = selected_transactions(selection.as_ref(), &self.transactions)
            .into_iter()
            .cloned()
            .collect();
        self.totals = daily_totals(&self.selected);

        match &selection {
            Some(s) => tracing::info!(
                customer = %s.customer_name,
                transactions = self.selected.len(),
                dates = self.totals.len(),
                "Customer selected"
            ),
            None => tracing::info!("Selection cleared"),
        }

        self.selection = selection;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Transactions of the selected customer (empty without a selection)
    pub fn selected_transactions(&self) -> &[Transaction] {
        &self.selected
    }

    /// Per-date totals for the selected customer
    pub fn daily_totals(&self) -> &DailyAggregate {
        &self.totals
    }

    /// Heading for the details panel, present only with a selection
    pub fn details_heading(&self) -> Option<String> {
        self.selection.as_ref().map(Selection::heading)
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }
}

impl TableSource for CustomerTable {
    fn rows(&self) -> &[EnrichedTransaction] {
        self.table.rows()
    }

    fn set_filter(&mut self, column: Column, value: &str) {
        self.table.set_filter(column, value);
    }

    fn visible_rows(&self) -> Vec<&EnrichedTransaction> {
        self.table.visible_rows()
    }
}

impl ChartSource for CustomerTable {
    fn chart_data(&self) -> ChartData {
        ChartData::from_aggregate(&self.totals, &self.chart_config)
    }

    fn chart_options(&self) -> ChartOptions {
        ChartOptions::new(&self.chart_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Customer, CustomerId};

    fn component() -> CustomerTable {
        CustomerTable::new(Dataset::new(
            vec![Customer::new(1, "Alice"), Customer::new(2, "Bob")],
            vec![
                Transaction::new(1, "2024-01-01", 10.0),
                Transaction::new(2, "2024-01-01", 99.0),
                Transaction::new(1, "2024-01-01", 5.0),
                Transaction::new(3, "2024-01-02", 7.0),
                Transaction::new(1, "2024-01-04", 1.5),
            ],
        ))
    }

    #[test]
    fn test_initially_nothing_selected() {
        let table = component();
        assert!(table.selection().is_none());
        assert!(table.selected_transactions().is_empty());
        assert!(table.daily_totals().is_empty());
        assert!(table.details_heading().is_none());
        assert!(table.chart_data().is_empty());
    }

    #[test]
    fn test_select_row_aggregates_customer() {
        let mut table = component();
        let selection = table.select_row(0).cloned().unwrap();

        assert_eq!(selection.customer_id, Some(CustomerId::Int(1)));
        assert_eq!(table.selected_transactions().len(), 3);
        assert_eq!(table.daily_totals().get("2024-01-01"), Some(15.0));
        assert_eq!(table.daily_totals().get("2024-01-04"), Some(1.5));
        assert_eq!(table.daily_totals().len(), 2);
        assert_eq!(table.details_heading().as_deref(), Some("Alice's Transactions"));
    }

    #[test]
    fn test_select_row_uses_visible_rows() {
        let mut table = component();
        table.set_filter(Column::CustomerName, "bob");
        table.select_row(0);

        assert_eq!(table.selection().unwrap().customer_name, "Bob");
        assert_eq!(table.daily_totals().get("2024-01-01"), Some(99.0));
    }

    #[test]
    fn test_selecting_unknown_row() {
        let mut table = component();
        table.set_filter(Column::CustomerName, "unknown");
        table.select_row(0);

        assert_eq!(table.details_heading().as_deref(), Some("Unknown's Transactions"));
        assert_eq!(table.daily_totals().get("2024-01-02"), Some(7.0));
    }

    #[test]
    fn test_out_of_range_keeps_selection() {
        let mut table = component();
        table.select_row(1);
        assert!(table.select_row(42).is_none());
        assert_eq!(table.selection().unwrap().customer_name, "Bob");
    }

    #[test]
    fn test_clear_selection() {
        let mut table = component();
        table.select_row(0);
        table.select(None);

        assert!(table.selected_transactions().is_empty());
        assert!(table.daily_totals().is_empty());
    }

    #[test]
    fn test_chart_source() {
        let mut table = component();
        table.select_row(0);

        let data = table.chart_data();
        assert_eq!(data.datasets[0].data, vec![15.0, 1.5]);
        assert_eq!(table.chart_options().scales.x.time.unit, "day");
    }

    #[test]
    fn test_filtering_does_not_touch_selection() {
        let mut table = component();
        table.select_row(0);
        table.set_filter(Column::Amount, "99");

        assert_eq!(table.visible_rows().len(), 1);
        assert_eq!(table.selection().unwrap().customer_name, "Alice");
        assert_eq!(table.daily_totals().len(), 2);
    }
}
