//! Ledgerview Dataset
//!
//! The static input of the pipeline: a JSON document with two top-level
//! sequences.
//!
//! ```text
//! {
//!   "customers":    [{ "id": 1, "name": "Alice" }, ...],
//!   "transactions": [{ "customer_id": 1, "date": "2024-01-01", "amount": 10 }, ...]
//! }
//! ```
//!
//! No schema validation is performed beyond the top-level shape. A section
//! that is not an array reads as empty, and an entry that is not an object
//! reads as a record with every field missing.

mod error;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use types::{
    format_amount, parse_date, Customer, CustomerId, Transaction, DATE_FORMAT,
};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../data/db.json");

/// Customers and transactions, loaded once and never mutated
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_records")]
    pub customers: Vec<Customer>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub transactions: Vec<Transaction>,
}

fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let records = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!("Dataset section is not an array, reading it as empty: {}", other);
            Vec::new()
        }
    };
    Ok(records)
}

impl Dataset {
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("dataset must be a JSON object").into());
        }
        let dataset: Dataset = serde_json::from_value(value)?;
        tracing::debug!(
            customers = dataset.customers.len(),
            transactions = dataset.transactions.len(),
            "Parsed dataset"
        );
        Ok(dataset)
    }

    /// Read a dataset from a JSON file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded dataset from {:?} ({} customers, {} transactions)",
            path,
            dataset.customers.len(),
            dataset.transactions.len()
        );
        Ok(dataset)
    }

    /// The dataset shipped with the crate (`data/db.json`)
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_DATASET).unwrap_or_else(|e| {
            tracing::warn!("Bundled dataset is unreadable, starting empty: {}", e);
            Self::default()
        })
    }

    /// First customer whose id equals `id`
    pub fn customer(&self, id: &Option<CustomerId>) -> Option<&Customer> {
        crate::view::find_customer(&self.customers, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_dataset() {
        let dataset = Dataset::bundled();
        assert!(!dataset.customers.is_empty());
        assert!(!dataset.transactions.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = Dataset::from_json_str(r#"{"customers": [{"id": 1, "name": "Alice"}]}"#)
            .unwrap();
        assert_eq!(dataset.customers.len(), 1);
        assert!(dataset.transactions.is_empty());

        let dataset = Dataset::from_json_str("{}").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_not_an_object_is_rejected() {
        assert!(matches!(
            Dataset::from_json_str("[1, 2, 3]"),
            Err(DatasetError::Parse(_))
        ));
        assert!(Dataset::from_json_str("not json").is_err());
        assert!(Dataset::from_json_str("[[], []]").is_err());
        assert!(Dataset::from_json_str("null").is_err());
    }

    #[test]
    fn test_malformed_records_keep_the_rest_of_the_document() {
        let dataset = Dataset::from_json_str(
            r#"{
                "customers": [
                    {"id": 1, "name": null},
                    {"id": true, "name": "Flag"},
                    7,
                    {"id": 2, "name": "Bob"}
                ],
                "transactions": [
                    {"customer_id": 2, "date": 20240101, "amount": "x"},
                    {"customer_id": 2, "date": null, "amount": 4},
                    "junk"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.customers.len(), 4);
        assert_eq!(dataset.customers[0].name, "");
        assert_eq!(dataset.customers[2], Customer::default());
        assert_eq!(dataset.customers[3].name, "Bob");

        assert_eq!(dataset.transactions.len(), 3);
        assert_eq!(dataset.transactions[0].date, "20240101");
        assert!(dataset.transactions[0].amount.is_nan());
        assert_eq!(dataset.transactions[1].date, "");
        assert_eq!(dataset.transactions[1].amount, 4.0);
        assert_eq!(dataset.transactions[2].customer_id, None);
        assert!(dataset.transactions[2].amount.is_nan());
    }

    #[test]
    fn test_non_array_sections_read_as_empty() {
        let dataset =
            Dataset::from_json_str(r#"{"customers": null, "transactions": {"a": 1}}"#).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"customers": [{{"id": 1, "name": "Alice"}}],
                "transactions": [{{"customer_id": 1, "date": "2024-01-01", "amount": 10}}]}}"#
        )
        .unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.customers[0].name, "Alice");
        assert_eq!(dataset.transactions[0].amount, 10.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_customer_lookup_first_match() {
        let dataset = Dataset::new(
            vec![Customer::new(1, "First"), Customer::new(1, "Second")],
            vec![],
        );
        assert_eq!(
            dataset.customer(&Some(CustomerId::Int(1))).map(|c| c.name.as_str()),
            Some("First")
        );
        assert!(dataset.customer(&Some(CustomerId::Int(2))).is_none());
    }
}
