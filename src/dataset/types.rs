//! Core record types for Ledgerview
//!
//! - `Customer`: reference data, one display name per id
//! - `Transaction`: a dated amount booked against a customer id
//! - `CustomerId`: the join key shared by both
//!
//! Decoding is lenient. Missing or null fields fall back to empty values,
//! scalars in text fields become their text, and a non-numeric amount becomes
//! NaN, so malformed records still reach the table.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Date format used by transaction records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Customer identifier as it appears in the dataset
///
/// Ids may be JSON numbers or strings. Comparison is strict: `1` and `"1"`
/// are different customers. Any other JSON value is kept as `Other`; it never
/// equals a number or string id, and objects or arrays never equal anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl PartialEq for CustomerId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CustomerId::Int(a), CustomerId::Int(b)) => a == b,
            (CustomerId::Text(a), CustomerId::Text(b)) => a == b,
            (CustomerId::Float(a), CustomerId::Float(b)) => a == b,
            (CustomerId::Int(a), CustomerId::Float(b))
            | (CustomerId::Float(b), CustomerId::Int(a)) => *a as f64 == *b,
            (CustomerId::Other(Value::Bool(a)), CustomerId::Other(Value::Bool(b))) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        CustomerId::Int(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        CustomerId::Text(id.to_string())
    }
}

impl std::str::FromStr for CustomerId {
    type Err = std::convert::Infallible;

    /// Integers parse as numeric ids, everything else as text ids
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => CustomerId::Int(n),
            Err(_) => CustomerId::Text(s.to_string()),
        })
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Int(n) => write!(f, "{}", n),
            CustomerId::Float(n) => write!(f, "{}", format_amount(*n)),
            CustomerId::Text(s) => write!(f, "{}", s),
            CustomerId::Other(v) => write!(f, "{}", value_text(v)),
        }
    }
}

/// A customer (immutable reference data)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }
}

/// A single transaction booked against a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Foreign key into the customer list
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Calendar date, `YYYY-MM-DD`, kept verbatim
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    /// Transaction amount (NaN when missing or not a number)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub amount: f64,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            customer_id: None,
            date: String::new(),
            amount: missing_amount(),
        }
    }
}

impl Transaction {
    pub fn new(customer_id: impl Into<CustomerId>, date: impl Into<String>, amount: f64) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            date: date.into(),
            amount,
        }
    }

    /// Parse the date field; `None` if it is not a valid `YYYY-MM-DD` date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

/// Text of a JSON value as the table displays it; null is empty
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(v) => format_amount(v),
            None => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Render a number the way the table shows it: `15` rather than `15.0`,
/// `NaN` for missing amounts, and exponent form (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_strict_equality() {
        assert_eq!(CustomerId::Int(1), CustomerId::Int(1));
        assert_ne!(CustomerId::Int(1), CustomerId::Text("1".to_string()));
        assert_eq!(CustomerId::Int(2), CustomerId::Float(2.0));
        assert_eq!("abc".parse::<CustomerId>().unwrap(), CustomerId::from("abc"));
        assert_eq!("7".parse::<CustomerId>().unwrap(), CustomerId::Int(7));
    }

    #[test]
    fn test_transaction_lenient_decoding() {
        let tx: Transaction =
            serde_json::from_str(r#"{"customer_id": 1, "date": "2024-01-01", "amount": 10}"#)
                .unwrap();
        assert_eq!(tx.customer_id, Some(CustomerId::Int(1)));
        assert_eq!(tx.amount, 10.0);

        let tx: Transaction =
            serde_json::from_str(r#"{"customer_id": "c-9", "amount": "ten"}"#).unwrap();
        assert_eq!(tx.customer_id, Some(CustomerId::from("c-9")));
        assert_eq!(tx.date, "");
        assert!(tx.amount.is_nan());

        let tx: Transaction = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(tx.customer_id, None);
        assert!(tx.amount.is_nan());
    }

    #[test]
    fn test_parsed_date() {
        let tx = Transaction::new(1, "2024-02-29", 1.0);
        assert_eq!(tx.parsed_date(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let tx = Transaction::new(1, "29/02/2024", 1.0);
        assert_eq!(tx.parsed_date(), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15.0), "15");
        assert_eq!(format_amount(10.5), "10.5");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_amount_exponent_forms() {
        assert_eq!(format_amount(1e21), "1e+21");
        assert_eq!(format_amount(1.23e22), "1.23e+22");
        assert_eq!(format_amount(1e20), "100000000000000000000");
        assert_eq!(format_amount(1e-7), "1e-7");
        assert_eq!(format_amount(-2.5e-7), "-2.5e-7");
        assert_eq!(format_amount(0.000001), "0.000001");
    }

    #[test]
    fn test_null_and_scalar_text_fields() {
        let customer: Customer = serde_json::from_str(r#"{"id": 1, "name": null}"#).unwrap();
        assert_eq!(customer.name, "");

        let customer: Customer = serde_json::from_str(r#"{"id": 2, "name": 42}"#).unwrap();
        assert_eq!(customer.name, "42");

        let customer: Customer = serde_json::from_str(r#"{"id": 3, "name": true}"#).unwrap();
        assert_eq!(customer.name, "true");

        let tx: Transaction =
            serde_json::from_str(r#"{"customer_id": 1, "date": null, "amount": 1}"#).unwrap();
        assert_eq!(tx.date, "");

        let tx: Transaction =
            serde_json::from_str(r#"{"customer_id": 1, "date": 20240101, "amount": 1}"#).unwrap();
        assert_eq!(tx.date, "20240101");
        assert_eq!(tx.parsed_date(), None);

        let tx: Transaction =
            serde_json::from_str(r#"{"customer_id": 1, "date": false, "amount": null}"#).unwrap();
        assert_eq!(tx.date, "false");
        assert!(tx.amount.is_nan());
    }

    #[test]
    fn test_unusual_ids_decode_but_never_match_plain_ids() {
        let tx: Transaction = serde_json::from_str(r#"{"customer_id": true}"#).unwrap();
        let id = tx.customer_id.unwrap();
        assert_eq!(id, CustomerId::Other(Value::Bool(true)));
        assert_ne!(id, CustomerId::Int(1));
        assert_ne!(id, CustomerId::from("true"));

        let tx: Transaction = serde_json::from_str(r#"{"customer_id": {"k": 1}}"#).unwrap();
        let id = tx.customer_id.unwrap();
        assert_ne!(id, id.clone());

        let tx: Transaction = serde_json::from_str(r#"{"customer_id": null}"#).unwrap();
        assert_eq!(tx.customer_id, None);

        let customer: Customer = serde_json::from_str(r#"{"id": null, "name": "Ann"}"#).unwrap();
        assert_eq!(customer.id, None);
    }
}
