//! The account entity: a place money sits (or a credit line it is borrowed
//! against).

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// The kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    /// A day-to-day bank account.
    Checking,
    /// A savings account.
    Savings,
    /// A credit card. `balance` is not authoritative for these; the spending
    /// headroom is `credit_limit - current_bill`.
    CreditCard,
}

/// A bank account or credit card belonging to one family member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The ID of the account.
    pub id: DatabaseId,
    /// The display name of the account.
    pub name: String,
    /// What kind of account this is.
    pub kind: AccountKind,
    /// The current balance. Meaningful for checking and savings accounts only.
    pub balance: f64,
    /// The credit limit. Meaningful for credit cards only.
    pub credit_limit: Option<f64>,
    /// The amount currently owed on the card. Meaningful for credit cards only.
    pub current_bill: f64,
    /// The family member that holds the account.
    pub holder_id: DatabaseId,
}

impl Account {
    /// The credit still available on a credit card.
    ///
    /// A missing limit counts as zero, so a card with an outstanding bill and
    /// no recorded limit contributes a negative amount.
    pub fn available_credit(&self) -> f64 {
        self.credit_limit.unwrap_or(0.0) - self.current_bill
    }

    /// What this account contributes to the family's net worth: the balance
    /// for bank accounts, the available credit for credit cards.
    pub fn net_worth_contribution(&self) -> f64 {
        match self.kind {
            AccountKind::CreditCard => self.available_credit(),
            AccountKind::Checking | AccountKind::Savings => self.balance,
        }
    }
}

/// The fields required to create a new [Account].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// The display name of the account.
    pub name: String,
    /// What kind of account this is.
    pub kind: AccountKind,
    /// The starting balance.
    pub balance: f64,
    /// The credit limit, for credit cards.
    pub credit_limit: Option<f64>,
    /// The starting bill, for credit cards.
    pub current_bill: f64,
    /// The family member that holds the account.
    pub holder_id: DatabaseId,
}

/// A partial update to an [Account]. `None` leaves a field unchanged;
/// `credit_limit` uses a nested option so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// Replace the display name.
    pub name: Option<String>,
    /// Replace the account kind.
    pub kind: Option<AccountKind>,
    /// Replace the balance.
    pub balance: Option<f64>,
    /// Replace or clear the credit limit.
    pub credit_limit: Option<Option<f64>>,
    /// Replace the current bill.
    pub current_bill: Option<f64>,
    /// Replace the holder.
    pub holder_id: Option<DatabaseId>,
}

impl AccountUpdate {
    /// Apply this patch to `account`, field by field.
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(name) = &self.name {
            account.name = name.clone();
        }
        if let Some(kind) = self.kind {
            account.kind = kind;
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
        if let Some(credit_limit) = self.credit_limit {
            account.credit_limit = credit_limit;
        }
        if let Some(current_bill) = self.current_bill {
            account.current_bill = current_bill;
        }
        if let Some(holder_id) = self.holder_id {
            account.holder_id = holder_id;
        }
    }
}
