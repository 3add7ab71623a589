//! Aggregation over the record store: period totals, category breakdowns,
//! balances and the savings rate.
//!
//! Everything in this module is a pure function over transaction and account
//! slices. All functions are total: empty input and zero denominators yield
//! zeroes, never NaN or infinities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    database_id::DatabaseId,
    filter::Period,
    models::{Account, Transaction, TransactionKind, TransactionStatus},
};

/// One category's share of a period's spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category label (missing categories appear as
    /// [UNCATEGORIZED](crate::models::UNCATEGORIZED)).
    pub category: String,
    /// The summed completed expenses in the category.
    pub amount: f64,
    /// The category's expenses as a percentage of the period's *income*.
    ///
    /// The denominator is deliberately total income, not total expenses: the
    /// figure answers "what fraction of what we earned went to X". Zero when
    /// the period has no income.
    pub percentage: f64,
}

/// The headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// See [Tracker::total_balance](crate::Tracker::total_balance).
    pub total_balance: f64,
    /// Completed income over the summary period.
    pub total_income: f64,
    /// Completed expenses over the summary period.
    pub total_expenses: f64,
    /// See [Tracker::savings_rate](crate::Tracker::savings_rate).
    pub savings_rate: f64,
}

/// Sum the completed transactions of `kind` inside `period`, restricted to
/// `selected_member` when one is set.
fn completed_total(
    transactions: &[Transaction],
    kind: TransactionKind,
    selected_member: Option<DatabaseId>,
    period: Period,
) -> f64 {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.kind == kind
                && transaction.status == TransactionStatus::Completed
                && selected_member.is_none_or(|member| transaction.member_id == Some(member))
                && period.contains(transaction.date)
        })
        .map(|transaction| transaction.amount)
        .sum()
}

/// Total completed income inside `period`.
///
/// Pending transactions never count; only settled money is income.
pub(crate) fn income_in_period(
    transactions: &[Transaction],
    selected_member: Option<DatabaseId>,
    period: Period,
) -> f64 {
    completed_total(transactions, TransactionKind::Income, selected_member, period)
}

/// Total completed expenses inside `period`.
pub(crate) fn expenses_in_period(
    transactions: &[Transaction],
    selected_member: Option<DatabaseId>,
    period: Period,
) -> f64 {
    completed_total(
        transactions,
        TransactionKind::Expense,
        selected_member,
        period,
    )
}

/// Group the period's completed expenses by category, largest first.
///
/// The buckets are family-wide: the member filter is not applied to them.
/// The percentage denominator is the period's income, which *does* respect
/// `selected_member` because it goes through [income_in_period].
pub(crate) fn expenses_by_category(
    transactions: &[Transaction],
    selected_member: Option<DatabaseId>,
    period: Period,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions.iter().filter(|transaction| {
        transaction.kind == TransactionKind::Expense
            && transaction.status == TransactionStatus::Completed
            && period.contains(transaction.date)
    }) {
        *totals.entry(transaction.category_label()).or_insert(0.0) += transaction.amount;
    }

    let income = income_in_period(transactions, selected_member, period);

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_owned(),
            amount,
            percentage: if income == 0.0 {
                0.0
            } else {
                amount / income * 100.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    breakdown
}

/// The percentage figure for one category, 0 if the category has no
/// completed expenses in the period.
pub(crate) fn category_percentage(
    transactions: &[Transaction],
    category: &str,
    selected_member: Option<DatabaseId>,
    period: Period,
) -> f64 {
    expenses_by_category(transactions, selected_member, period)
        .into_iter()
        .find(|total| total.category == category)
        .map(|total| total.percentage)
        .unwrap_or(0.0)
}

/// Net flow of a transaction list: income minus expenses, regardless of
/// status or date.
pub(crate) fn net_flow(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| match transaction.kind {
            TransactionKind::Income => transaction.amount,
            TransactionKind::Expense => -transaction.amount,
        })
        .sum()
}

/// The family's current net worth across all accounts.
///
/// Bank accounts contribute their balance; credit cards contribute their
/// available credit.
pub(crate) fn account_net_worth(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .map(Account::net_worth_contribution)
        .sum()
}

/// The fraction of income kept rather than spent, as a percentage.
///
/// Exactly 0 when the period has no income, regardless of expenses.
pub(crate) fn savings_rate(
    transactions: &[Transaction],
    selected_member: Option<DatabaseId>,
    period: Period,
) -> f64 {
    let income = income_in_period(transactions, selected_member, period);
    if income == 0.0 {
        return 0.0;
    }

    let expenses = expenses_in_period(transactions, selected_member, period);

    (income - expenses) / income * 100.0
}
