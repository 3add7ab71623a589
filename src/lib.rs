//! Hearthbook is the filtering and aggregation core of a family finance
//! tracker.
//!
//! It holds the canonical in-memory collections (transactions, accounts,
//! savings goals and family members), a composable [FilterState], and derives
//! all financial figures on demand: balances, period totals, category
//! breakdowns and the savings rate. Persistence, identity and rendering are
//! external collaborators; the only seam to them is the [DataSource] trait.
//!
//! The entry point is [Tracker]: construct one over a data source, call
//! [Tracker::refresh] to load the snapshot, and read derived figures
//! synchronously.

#![warn(missing_docs)]

mod database_id;
mod error;
mod filter;
mod models;
mod stores;
mod summary;
mod tracker;

pub use database_id::DatabaseId;
pub use error::Error;
pub use filter::{FilterState, KindFilter, Period, filter_transactions};
pub use models::{
    Account, AccountKind, AccountUpdate, FamilyMember, FamilyMemberUpdate, Goal, GoalUpdate,
    NewAccount, NewFamilyMember, NewGoal, NewTransaction, Transaction, TransactionKind,
    TransactionStatus, TransactionUpdate, UNCATEGORIZED,
};
pub use stores::{DataSource, MemoryDataSource};
pub use summary::{CategoryTotal, FinancialSummary};
pub use tracker::Tracker;
