//! Ledgerview View Pipeline
//!
//! Pure data shaping between the dataset and a renderer:
//!
//! - **join**: attach customer names to transactions
//! - **aggregate**: selection and per-date totals
//! - **filter**: case-insensitive column filters
//! - **table**: columns and rows for a grid widget
//! - **chart**: labels, series and axis options for a line chart
//! - **component**: the stateful table-plus-chart component
//!
//! # Data Flow
//!
//! ```text
//! Dataset ─ join ─> rows ─ filters ─> visible rows ─ click ─> Selection
//!                                                              │
//!          transactions ─ selected_transactions ─ daily_totals ┘─> ChartData
//! ```
//!
//! # Example
//!
//! ```rust
//! use ledgerview::dataset::{Customer, Dataset, Transaction};
//! use ledgerview::view::{Column, CustomerTable, TableSource};
//!
//! let dataset = Dataset::new(
//!     vec![Customer::new(1, "Alice")],
//!     vec![
//!         Transaction::new(1, "2024-01-01", 10.0),
//!         Transaction::new(1, "2024-01-01", 5.0),
//!         Transaction::new(2, "2024-01-02", 7.0),
//!     ],
//! );
//!
//! let mut table = CustomerTable::new(dataset);
//! table.set_filter(Column::CustomerName, "ali");
//! assert_eq!(table.visible_rows().len(), 2);
//!
//! table.select_row(0);
//! assert_eq!(table.daily_totals().get("2024-01-01"), Some(15.0));
//! ```

mod aggregate;
mod chart;
mod component;
mod filter;
mod join;
mod table;

pub use aggregate::{
    daily_totals, selected_transactions, selection_at, DailyAggregate, Selection,
};
pub use chart::{
    AxisTitle, ChartData, ChartOptions, ChartSeries, ChartSource, Scales, TimeAxis, TimeScale,
    ValueAxis,
};
pub use component::CustomerTable;
pub use filter::{text_filter, ColumnFilters};
pub use join::{enrich, find_customer, EnrichedTransaction, UNKNOWN_CUSTOMER};
pub use table::{cell_text, Column, TableModel, TableSource};
