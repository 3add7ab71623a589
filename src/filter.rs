//! The view filters and the pipeline that applies them to the transaction
//! collection.

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time, macros::time};

use crate::{
    database_id::DatabaseId,
    models::{Transaction, TransactionKind},
};

const END_OF_DAY: Time = time!(23:59:59.999);

/// A closed date interval with whole-day semantics.
///
/// Either bound may be unset, in which case it imposes no constraint. A set
/// start is normalized to 00:00:00.000 and a set end to 23:59:59.999 before
/// comparison, so both boundary days are included in full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The first day of the period, inclusive.
    pub start: Option<Date>,
    /// The last day of the period, inclusive.
    pub end: Option<Date>,
}

impl Period {
    /// A period with both bounds set.
    pub fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether both bounds are unset.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `instant` falls inside the period.
    pub fn contains(&self, instant: PrimitiveDateTime) -> bool {
        if let Some(start) = self.start
            && instant < start.midnight()
        {
            return false;
        }

        if let Some(end) = self.end
            && instant > end.with_time(END_OF_DAY)
        {
            return false;
        }

        true
    }
}

/// Restricts the filter pipeline to one transaction kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KindFilter {
    /// Keep both income and expenses.
    #[default]
    All,
    /// Keep income only.
    Income,
    /// Keep expenses only.
    Expense,
}

/// The active view filters.
///
/// Purely data; nothing is recomputed when a filter changes. Every field may
/// be unset, and unset fields impose no constraint, so the pipeline is a
/// conjunction over the fields that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Keep only transactions belonging to this member. When set, family-wide
    /// transactions (`member_id == None`) are excluded.
    pub selected_member: Option<DatabaseId>,
    /// Keep only transactions dated inside this period.
    pub period: Period,
    /// Keep only transactions of this kind.
    pub kind: KindFilter,
    /// Keep only transactions whose description contains this text,
    /// case-insensitively. Whitespace-only text imposes no constraint.
    pub search_text: String,
}

impl FilterState {
    /// Whether a transaction passes every set filter dimension.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(member_id) = self.selected_member
            && transaction.member_id != Some(member_id)
        {
            return false;
        }

        let kind_matches = match self.kind {
            KindFilter::All => true,
            KindFilter::Income => transaction.kind == TransactionKind::Income,
            KindFilter::Expense => transaction.kind == TransactionKind::Expense,
        };
        if !kind_matches {
            return false;
        }

        if !self.period.contains(transaction.date) {
            return false;
        }

        let needle = self.search_text.trim();
        if !needle.is_empty()
            && !transaction
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }

        true
    }
}

/// Apply `filters` to `transactions` and sort the survivors by date,
/// most recent first.
///
/// Returns a fresh list; the input is never mutated. The sort is stable, so
/// transactions sharing a date keep their input order.
pub fn filter_transactions(transactions: &[Transaction], filters: &FilterState) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| filters.matches(transaction))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    filtered
}

#[cfg(test)]
mod period_tests {
    use time::macros::{date, datetime};

    use super::Period;

    #[test]
    fn unbounded_period_contains_everything() {
        let period = Period::default();

        assert!(period.contains(datetime!(1970-01-01 00:00)));
        assert!(period.contains(datetime!(2099-12-31 23:59:59.999999)));
    }

    #[test]
    fn start_day_is_included_from_midnight() {
        let period = Period {
            start: Some(date!(2024 - 01 - 10)),
            end: None,
        };

        assert!(period.contains(datetime!(2024-01-10 00:00:00)));
        assert!(!period.contains(datetime!(2024-01-09 23:59:59.999999)));
    }

    #[test]
    fn end_day_is_included_up_to_the_last_millisecond() {
        let period = Period {
            start: None,
            end: Some(date!(2024 - 01 - 31)),
        };

        assert!(period.contains(datetime!(2024-01-31 23:59:59.999)));
        assert!(!period.contains(datetime!(2024-01-31 23:59:59.999001)));
        assert!(!period.contains(datetime!(2024-02-01 00:00:00)));
    }
}
