//! Table State
//!
//! Reactive state behind the component. Filters and the selection are
//! signals; everything derived from them is a memo, so the join runs once
//! and the aggregation re-runs only when the selection changes.

use leptos::logging::{log, warn};
use leptos::*;
use ledgerview::config::ChartConfig;
use ledgerview::dataset::{Dataset, Transaction};
use ledgerview::view::{
    daily_totals, enrich, selected_transactions, selection_at, ChartData, ChartOptions, Column,
    ColumnFilters, DailyAggregate, EnrichedTransaction, Selection,
};

/// State provided to all components
#[derive(Clone, Copy)]
pub struct TableState {
    /// Raw customer-name filter input
    pub name_filter: RwSignal<String>,
    /// Raw amount filter input
    pub amount_filter: RwSignal<String>,
    /// Clicked customer, if any
    pub selection: RwSignal<Option<Selection>>,
    /// Joined rows (computed once, the dataset never changes)
    pub rows: Memo<Vec<EnrichedTransaction>>,
    /// Rows passing both filters
    pub visible_rows: Memo<Vec<EnrichedTransaction>>,
    /// Transactions of the selected customer
    pub selected: Memo<Vec<Transaction>>,
    /// Per-date totals of the selected customer
    pub daily_totals: Memo<DailyAggregate>,
    /// Line chart input
    pub chart_data: Memo<ChartData>,
    /// Axis configuration
    pub chart_options: StoredValue<ChartOptions>,
}

impl TableState {
    pub fn new(dataset: Dataset) -> Self {
        let chart_config = ChartConfig::default();
        let chart_options = store_value(ChartOptions::new(&chart_config));
        let dataset = store_value(dataset);

        let name_filter = create_rw_signal(String::new());
        let amount_filter = create_rw_signal(String::new());
        let selection = create_rw_signal(None::<Selection>);

        let rows = create_memo(move |_| {
            dataset.with_value(|d| enrich(&d.transactions, &d.customers))
        });

        let visible_rows = create_memo(move |_| {
            let filters = ColumnFilters::new()
                .with(Column::CustomerName, &name_filter.get())
                .with(Column::Amount, &amount_filter.get());
            rows.with(|rows| filters.apply(rows).into_iter().cloned().collect())
        });

        let selected = create_memo(move |_| {
            let selection = selection.get();
            dataset.with_value(|d| {
                selected_transactions(selection.as_ref(), &d.transactions)
                    .into_iter()
                    .cloned()
                    .collect()
            })
        });

        let totals = create_memo(move |_| selected.with(|txs| daily_totals(txs)));

        let chart_data =
            create_memo(move |_| totals.with(|t| ChartData::from_aggregate(t, &chart_config)));

        Self {
            name_filter,
            amount_filter,
            selection,
            rows,
            visible_rows,
            selected,
            daily_totals: totals,
            chart_data,
            chart_options,
        }
    }

    /// Select the customer behind the visible row at `index`
    pub fn select_visible_row(&self, index: usize) {
        let selection = self
            .visible_rows
            .with_untracked(|rows| selection_at(rows, index));

        match selection {
            Some(selection) => {
                log!("Selected {}", selection.customer_name);
                self.selection.set(Some(selection));
            }
            None => warn!("No visible row at index {}", index),
        }
    }

    /// Heading for the details panel
    pub fn details_heading(&self) -> Option<String> {
        self.selection.with(|s| s.as_ref().map(Selection::heading))
    }
}

/// Provide table state built from the bundled dataset
pub fn provide_table_state() {
    provide_context(TableState::new(Dataset::bundled()));
}

/// Fetch the table state from context
pub fn use_table_state() -> TableState {
    use_context::<TableState>().expect("TableState not found")
}
