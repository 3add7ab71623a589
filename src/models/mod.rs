//! The domain entities held by the record store, plus the input and patch
//! types the mutation facade sends to the data source.

mod account;
mod goal;
mod member;
mod transaction;

pub use account::{Account, AccountKind, AccountUpdate, NewAccount};
pub use goal::{Goal, GoalUpdate, NewGoal};
pub use member::{FamilyMember, FamilyMemberUpdate, NewFamilyMember};
pub use transaction::{
    NewTransaction, Transaction, TransactionKind, TransactionStatus, TransactionUpdate,
    UNCATEGORIZED,
};
