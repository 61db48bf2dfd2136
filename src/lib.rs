//! # Ledgerview
//!
//! Joins a customer list with a transaction list, exposes the result as a
//! filterable table, and turns one customer's transactions into a per-day
//! time series for charting.
//!
//! ## Modules
//!
//! - [`dataset`]: record types and JSON loading
//! - [`view`]: join, filters, selection, aggregation and the render-facing
//!   table/chart providers
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgerview::{ChartSource, CustomerTable, Dataset};
//!
//! let mut table = CustomerTable::new(Dataset::bundled());
//! table.select_row(0);
//!
//! let chart = table.chart_data();
//! println!("{} days plotted", chart.labels.len());
//! ```

pub mod config;
pub mod dataset;
pub mod view;

// Re-export top-level types for convenience
pub use dataset::{Customer, CustomerId, Dataset, DatasetError, DatasetResult, Transaction};

pub use view::{
    daily_totals, enrich, selected_transactions, ChartData, ChartOptions, ChartSource, Column,
    ColumnFilters, CustomerTable, DailyAggregate, EnrichedTransaction, Selection, TableModel,
    TableSource, UNKNOWN_CUSTOMER,
};

pub use config::{ChartConfig, Config, ConfigError, ConfigSearch, DatasetConfig, LoggingConfig};
