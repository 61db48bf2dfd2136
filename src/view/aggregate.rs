//! Selection & aggregation stage
//!
//! Filters the selected customer's transactions and sums their amounts per
//! date. Dates keep the order in which they first appear.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;

use super::join::EnrichedTransaction;
use crate::dataset::{CustomerId, Transaction};

/// The customer behind a clicked row
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub customer_id: Option<CustomerId>,
    #[serde(rename = "customerName")]
    pub customer_name: String,
}

impl Selection {
    pub fn new(customer_id: impl Into<CustomerId>, customer_name: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            customer_name: customer_name.into(),
        }
    }

    /// Heading shown above the chart
    pub fn heading(&self) -> String {
        format!("{}'s Transactions", self.customer_name)
    }
}

impl From<&EnrichedTransaction> for Selection {
    fn from(row: &EnrichedTransaction) -> Self {
        Self {
            customer_id: row.customer_id.clone(),
            customer_name: row.customer_name.clone(),
        }
    }
}

/// Selection for the visible row at `index`; `None` past the last row
pub fn selection_at<R>(visible_rows: &[R], index: usize) -> Option<Selection>
where
    R: Borrow<EnrichedTransaction>,
{
    visible_rows.get(index).map(|row| Selection::from(row.borrow()))
}

/// Transactions belonging to the selected customer, in input order.
///
/// No selection yields an empty list.
pub fn selected_transactions<'a>(
    selection: Option<&Selection>,
    transactions: &'a [Transaction],
) -> Vec<&'a Transaction> {
    match selection {
        Some(selection) => transactions
            .iter()
            .filter(|t| t.customer_id == selection.customer_id)
            .collect(),
        None => Vec::new(),
    }
}

/// Per-date sum of transaction amounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregate {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl DailyAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `date`.
    ///
    /// A NaN running total restarts from 0, so NaN only survives when it is
    /// the last amount booked on that date.
    pub fn add(&mut self, date: &str, amount: f64) {
        match self.index.get(date) {
            Some(&i) => {
                let total = &mut self.entries[i].1;
                let base = if total.is_nan() { 0.0 } else { *total };
                *total = base + amount;
            }
            None => {
                self.index.insert(date.to_string(), self.entries.len());
                self.entries.push((date.to_string(), 0.0 + amount));
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<f64> {
        self.index.get(date).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dates in first-appearance order
    pub fn dates(&self) -> Vec<&str> {
        self.entries.iter().map(|(d, _)| d.as_str()).collect()
    }

    /// Totals aligned with [`DailyAggregate::dates`]
    pub fn amounts(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, a)| *a).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(d, a)| (d.as_str(), *a))
    }

    /// Sum over all dates
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, a)| a).sum()
    }
}

impl Serialize for DailyAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, amount) in &self.entries {
            map.serialize_entry(date, amount)?;
        }
        map.end()
    }
}

/// Fold transactions into per-date totals
pub fn daily_totals<'a, I>(transactions: I) -> DailyAggregate
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let totals = transactions
        .into_iter()
        .fold(DailyAggregate::new(), |mut acc, t| {
            acc.add(&t.date, t.amount);
            acc
        });

    tracing::debug!(dates = totals.len(), "Aggregated daily totals");
    totals
}
