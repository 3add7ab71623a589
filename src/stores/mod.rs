//! Contains the trait for objects that persist the domain
//! [models](crate::models), and an in-memory reference implementation.

mod memory;

pub use memory::MemoryDataSource;

use crate::{
    Error,
    database_id::DatabaseId,
    models::{
        Account, AccountUpdate, FamilyMember, FamilyMemberUpdate, Goal, GoalUpdate, NewAccount,
        NewFamilyMember, NewGoal, NewTransaction, Transaction, TransactionUpdate,
    },
};

/// Handles persistence of the four record collections.
///
/// Implementations are expected to scope every read and write to the active
/// user; this crate does not deal with identity. The bulk reads feed
/// [Tracker::refresh](crate::Tracker::refresh); the create/update/delete
/// methods are each called exactly once per mutation by the facade.
///
/// Updating or deleting a record that does not exist must return
/// [Error::NotFound].
// The core runs on a single-threaded event loop, so callers do not need Send
// futures from these methods.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch every transaction.
    async fn transactions(&self) -> Result<Vec<Transaction>, Error>;

    /// Persist a new transaction and return it with its assigned ID.
    async fn create_transaction(&self, input: NewTransaction) -> Result<Transaction, Error>;

    /// Apply `patch` to the transaction with `id` and return the result.
    async fn update_transaction(
        &self,
        id: DatabaseId,
        patch: TransactionUpdate,
    ) -> Result<Transaction, Error>;

    /// Delete the transaction with `id`.
    async fn delete_transaction(&self, id: DatabaseId) -> Result<(), Error>;

    /// Fetch every account.
    async fn accounts(&self) -> Result<Vec<Account>, Error>;

    /// Persist a new account and return it with its assigned ID.
    async fn create_account(&self, input: NewAccount) -> Result<Account, Error>;

    /// Apply `patch` to the account with `id` and return the result.
    async fn update_account(&self, id: DatabaseId, patch: AccountUpdate)
    -> Result<Account, Error>;

    /// Delete the account with `id`.
    async fn delete_account(&self, id: DatabaseId) -> Result<(), Error>;

    /// Fetch every goal.
    async fn goals(&self) -> Result<Vec<Goal>, Error>;

    /// Persist a new goal and return it with its assigned ID.
    async fn create_goal(&self, input: NewGoal) -> Result<Goal, Error>;

    /// Apply `patch` to the goal with `id` and return the result.
    async fn update_goal(&self, id: DatabaseId, patch: GoalUpdate) -> Result<Goal, Error>;

    /// Delete the goal with `id`.
    async fn delete_goal(&self, id: DatabaseId) -> Result<(), Error>;

    /// Fetch every family member.
    async fn members(&self) -> Result<Vec<FamilyMember>, Error>;

    /// Persist a new family member and return it with its assigned ID.
    async fn create_member(&self, input: NewFamilyMember) -> Result<FamilyMember, Error>;

    /// Apply `patch` to the member with `id` and return the result.
    async fn update_member(
        &self,
        id: DatabaseId,
        patch: FamilyMemberUpdate,
    ) -> Result<FamilyMember, Error>;

    /// Delete the member with `id`.
    ///
    /// Whether referencing transactions, accounts or goals are cleaned up is
    /// the implementation's policy; the core does not cascade.
    async fn delete_member(&self, id: DatabaseId) -> Result<(), Error>;
}
