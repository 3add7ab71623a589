//! This file defines the type `Transaction`, the core type of the budgeting
//! part of the application, along with its input and patch types.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::database_id::DatabaseId;

/// The bucket label used for transactions without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether a transaction moves money into or out of the family's pockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

/// The lifecycle state of a transaction.
///
/// Only completed transactions count toward realized income and expense
/// totals; pending ones are visible in listings but excluded from the sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Recorded but not yet settled.
    Pending,
    /// Settled; counts toward period totals.
    Completed,
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Amounts are non-negative by convention; the direction of the movement is
/// carried by [TransactionKind], not the sign. This layer does not validate
/// amounts (that is the data source's job) and passes them through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// A user-defined category. `None` or an empty string fold into the
    /// [UNCATEGORIZED] bucket during aggregation.
    pub category: Option<String>,
    /// When the transaction happened, in local wall-clock time.
    pub date: PrimitiveDateTime,
    /// The account the money moved through, if recorded.
    pub account_id: Option<DatabaseId>,
    /// The family member the transaction belongs to. `None` means it applies
    /// to the whole family.
    pub member_id: Option<DatabaseId>,
    /// Which installment this transaction is, starting at 1.
    pub installment_number: u32,
    /// How many installments the purchase was split into. Always at least 1.
    pub total_installments: u32,
    /// Whether the transaction has settled.
    pub status: TransactionStatus,
    /// Whether the transaction repeats on a schedule.
    pub is_recurring: bool,
}

impl Transaction {
    /// The category label to aggregate this transaction under.
    ///
    /// Missing and empty categories both fold into [UNCATEGORIZED].
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }
}

/// The fields required to create a new [Transaction].
///
/// The data source assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// A user-defined category, if any.
    pub category: Option<String>,
    /// When the transaction happened.
    pub date: PrimitiveDateTime,
    /// The account the money moved through, if recorded.
    pub account_id: Option<DatabaseId>,
    /// The family member the transaction belongs to.
    pub member_id: Option<DatabaseId>,
    /// Which installment this transaction is, starting at 1.
    pub installment_number: u32,
    /// How many installments the purchase was split into. Must be at least 1.
    pub total_installments: u32,
    /// Whether the transaction has settled.
    pub status: TransactionStatus,
    /// Whether the transaction repeats on a schedule.
    pub is_recurring: bool,
}

impl NewTransaction {
    /// Create a single-installment, completed, non-recurring transaction.
    ///
    /// Covers the common case; set the remaining fields directly for
    /// installments, pending status, or recurrence.
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        description: &str,
        date: PrimitiveDateTime,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.to_owned(),
            category: None,
            date,
            account_id: None,
            member_id: None,
            installment_number: 1,
            total_installments: 1,
            status: TransactionStatus::Completed,
            is_recurring: false,
        }
    }
}

/// A partial update to a [Transaction].
///
/// `None` leaves a field unchanged. For fields that are themselves optional
/// on the entity, the outer option selects whether to touch the field and the
/// inner option is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    /// Replace the transaction kind.
    pub kind: Option<TransactionKind>,
    /// Replace the amount.
    pub amount: Option<f64>,
    /// Replace the description.
    pub description: Option<String>,
    /// Replace or clear the category.
    pub category: Option<Option<String>>,
    /// Replace the date.
    pub date: Option<PrimitiveDateTime>,
    /// Replace or clear the account reference.
    pub account_id: Option<Option<DatabaseId>>,
    /// Replace or clear the member reference.
    pub member_id: Option<Option<DatabaseId>>,
    /// Replace the installment position.
    pub installment_number: Option<u32>,
    /// Replace the installment count.
    pub total_installments: Option<u32>,
    /// Replace the status.
    pub status: Option<TransactionStatus>,
    /// Replace the recurrence flag.
    pub is_recurring: Option<bool>,
}

impl TransactionUpdate {
    /// Apply this patch to `transaction`, field by field.
    ///
    /// Helper for data source implementations; the core itself never mutates
    /// stored transactions directly.
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(description) = &self.description {
            transaction.description = description.clone();
        }
        if let Some(category) = &self.category {
            transaction.category = category.clone();
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(account_id) = self.account_id {
            transaction.account_id = account_id;
        }
        if let Some(member_id) = self.member_id {
            transaction.member_id = member_id;
        }
        if let Some(installment_number) = self.installment_number {
            transaction.installment_number = installment_number;
        }
        if let Some(total_installments) = self.total_installments {
            transaction.total_installments = total_installments;
        }
        if let Some(status) = self.status {
            transaction.status = status;
        }
        if let Some(is_recurring) = self.is_recurring {
            transaction.is_recurring = is_recurring;
        }
    }
}
