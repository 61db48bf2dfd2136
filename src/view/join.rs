//! Join stage
//!
//! Resolves each transaction's `customer_id` against the customer list and
//! attaches the customer's display name.

use serde::{Deserialize, Serialize};

use crate::dataset::{Customer, CustomerId, Transaction};

/// Display name used when no customer matches a transaction
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// A transaction with its resolved customer name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedTransaction {
    pub customer_id: Option<CustomerId>,
    pub date: String,
    pub amount: f64,
    #[serde(rename = "customerName")]
    pub customer_name: String,
}

impl EnrichedTransaction {
    fn from_transaction(transaction: &Transaction, customer_name: String) -> Self {
        Self {
            customer_id: transaction.customer_id.clone(),
            date: transaction.date.clone(),
            amount: transaction.amount,
            customer_name,
        }
    }

    /// The underlying transaction without the derived name
    pub fn transaction(&self) -> Transaction {
        Transaction {
            customer_id: self.customer_id.clone(),
            date: self.date.clone(),
            amount: self.amount,
        }
    }
}

/// Linear scan for the first customer with a matching id.
///
/// Duplicate ids are not rejected; the earliest entry shadows the rest.
pub fn find_customer<'a>(customers: &'a [Customer], id: &Option<CustomerId>) -> Option<&'a Customer> {
    customers.iter().find(|c| &c.id == id)
}

/// Enrich every transaction with its customer's name.
///
/// Output has the same length and order as `transactions`.
pub fn enrich(transactions: &[Transaction], customers: &[Customer]) -> Vec<EnrichedTransaction> {
    let mut unresolved = 0usize;

    let rows: Vec<EnrichedTransaction> = transactions
        .iter()
        .map(|transaction| {
            let name = match find_customer(customers, &transaction.customer_id) {
                Some(customer) => customer.name.clone(),
                None => {
                    unresolved += 1;
                    UNKNOWN_CUSTOMER.to_string()
                }
            };
            EnrichedTransaction::from_transaction(transaction, name)
        })
        .collect();

    tracing::debug!(
        rows = rows.len(),
        unresolved,
        "Joined transactions with customers"
    );

    rows
}
