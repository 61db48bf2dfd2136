//! State Management
//!
//! Filter inputs, row selection and the memos derived from them.

pub mod table_state;

pub use table_state::{provide_table_state, use_table_state, TableState};
