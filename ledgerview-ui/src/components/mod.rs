//! UI Components
//!
//! Leptos components for the transaction view.

pub mod chart;
pub mod customer_details;
pub mod customer_table;
pub mod filter_inputs;

pub use chart::TransactionChart;
pub use customer_details::CustomerDetails;
pub use customer_table::CustomerTable;
pub use filter_inputs::FilterInputs;
