//! Implements the struct that holds the record store, the active filters and
//! the mutation facade.

use crate::{
    Error,
    database_id::DatabaseId,
    filter::{FilterState, KindFilter, Period, filter_transactions},
    models::{
        Account, AccountUpdate, FamilyMember, FamilyMemberUpdate, Goal, GoalUpdate, NewAccount,
        NewFamilyMember, NewGoal, NewTransaction, Transaction, TransactionUpdate,
    },
    stores::DataSource,
    summary::{self, CategoryTotal, FinancialSummary},
};

/// The in-memory core of the finance tracker.
///
/// A `Tracker` owns a snapshot of the four record collections, the active
/// [FilterState], and the injected [DataSource]. All query methods are
/// synchronous and read the snapshot; [Tracker::refresh] is the only way the
/// snapshot changes, and each mutation method writes through the data source
/// and then reloads.
///
/// The data source is a constructor parameter so embeddings and tests can run
/// any number of independent trackers side by side.
#[derive(Debug)]
pub struct Tracker<D: DataSource> {
    source: D,
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    goals: Vec<Goal>,
    members: Vec<FamilyMember>,
    filters: FilterState,
    loading: bool,
    load_error: Option<String>,
    reload_serial: u64,
}

impl<D: DataSource> Tracker<D> {
    /// Create a tracker with an empty record store.
    ///
    /// Call [Tracker::refresh] to load the initial snapshot.
    pub fn new(source: D) -> Self {
        Self {
            source,
            transactions: Vec::new(),
            accounts: Vec::new(),
            goals: Vec::new(),
            members: Vec::new(),
            filters: FilterState::default(),
            loading: false,
            load_error: None,
            reload_serial: 0,
        }
    }

    /// The current transaction snapshot, in data source order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The current account snapshot.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The current goal snapshot.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The current family member snapshot.
    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// The active view filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Whether a reload batch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure message of the most recent reload, if it failed.
    ///
    /// While this is set the snapshot still holds the previous (possibly
    /// stale) records, so a UI can show them alongside the error.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Select a member to filter by, or `None` for the whole family.
    pub fn set_selected_member(&mut self, member_id: Option<DatabaseId>) {
        self.filters.selected_member = member_id;
    }

    /// Set the date range to filter by. Either bound may be unset.
    pub fn set_period(&mut self, period: Period) {
        self.filters.period = period;
    }

    /// Restrict the filtered view to one transaction kind.
    pub fn set_kind_filter(&mut self, kind: KindFilter) {
        self.filters.kind = kind;
    }

    /// Set the description search text. Whitespace-only text means no filter.
    pub fn set_search_text(&mut self, text: &str) {
        self.filters.search_text = text.to_owned();
    }

    /// Clear every filter back to its default.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// The transactions that pass every active filter, most recent first.
    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        filter_transactions(&self.transactions, &self.filters)
    }

    /// Total completed income inside `period`, respecting the member filter.
    ///
    /// The kind and search filters do not apply here; the period is an
    /// explicit parameter rather than the filter state's range.
    pub fn income_for_period(&self, period: Period) -> f64 {
        summary::income_in_period(&self.transactions, self.filters.selected_member, period)
    }

    /// Total completed expenses inside `period`, respecting the member filter.
    pub fn expenses_for_period(&self, period: Period) -> f64 {
        summary::expenses_in_period(&self.transactions, self.filters.selected_member, period)
    }

    /// The period's completed expenses grouped by category, largest first.
    ///
    /// Buckets are family-wide regardless of the member filter; see
    /// [CategoryTotal::percentage] for the denominator rules.
    pub fn expenses_by_category(&self, period: Period) -> Vec<CategoryTotal> {
        summary::expenses_by_category(&self.transactions, self.filters.selected_member, period)
    }

    /// One category's percentage from [Tracker::expenses_by_category], 0 if
    /// the category has no completed expenses in the period.
    pub fn category_percentage(&self, category: &str, period: Period) -> f64 {
        summary::category_percentage(
            &self.transactions,
            category,
            self.filters.selected_member,
            period,
        )
    }

    /// The family's money at a glance.
    ///
    /// With no member selected and no date range set, this is the net worth
    /// over all accounts (balances plus available credit). As soon as a
    /// member or a date bound is active it switches to the net flow of
    /// [Tracker::filtered_transactions] instead — income minus expenses over
    /// the filtered window, with no starting balance carried in. The filtered
    /// figure is a flow, not a balance.
    pub fn total_balance(&self) -> f64 {
        let narrowed =
            self.filters.selected_member.is_some() || !self.filters.period.is_unbounded();

        if narrowed {
            summary::net_flow(&self.filtered_transactions())
        } else {
            summary::account_net_worth(&self.accounts)
        }
    }

    /// The fraction of the period's income kept rather than spent, as a
    /// percentage. Exactly 0 when the period has no income.
    pub fn savings_rate(&self, period: Period) -> f64 {
        summary::savings_rate(&self.transactions, self.filters.selected_member, period)
    }

    /// The headline figures in one call.
    ///
    /// The period totals use `period` when given, otherwise the filter
    /// state's date range. The balance is always [Tracker::total_balance],
    /// whose mode depends on the filter state alone.
    pub fn financial_summary(&self, period: Option<Period>) -> FinancialSummary {
        let period = period.unwrap_or(self.filters.period);

        FinancialSummary {
            total_balance: self.total_balance(),
            total_income: self.income_for_period(period),
            total_expenses: self.expenses_for_period(period),
            savings_rate: self.savings_rate(period),
        }
    }

    /// Reload the record store from the data source.
    ///
    /// The four collection reads run concurrently and commit together: after
    /// a successful batch all four collections are replaced, after a failed
    /// one none are and the previous snapshot stays visible. The failure is
    /// recorded in [Tracker::load_error] as well as returned.
    ///
    /// Each reload takes a serial number and only the latest is allowed to
    /// commit, so a caller that drops an in-flight `refresh` future and
    /// starts another can never see the stale batch win.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.reload_serial += 1;
        let serial = self.reload_serial;
        self.loading = true;
        tracing::debug!(serial, "reloading record store");

        let (transactions, accounts, goals, members) = tokio::join!(
            self.source.transactions(),
            self.source.accounts(),
            self.source.goals(),
            self.source.members(),
        );

        self.loading = false;

        if serial != self.reload_serial {
            tracing::debug!(serial, "discarding superseded reload");
            return Ok(());
        }

        let batch =
            transactions.and_then(|transactions| Ok((transactions, accounts?, goals?, members?)));

        match batch {
            Ok((transactions, accounts, goals, members)) => {
                self.transactions = transactions;
                self.accounts = accounts;
                self.goals = goals;
                self.members = members;
                self.load_error = None;
                tracing::debug!(
                    serial,
                    transactions = self.transactions.len(),
                    accounts = self.accounts.len(),
                    goals = self.goals.len(),
                    members = self.members.len(),
                    "record store reloaded"
                );
                Ok(())
            }
            Err(error) => {
                self.load_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Create a transaction, then reload the record store.
    ///
    /// A write failure propagates without triggering a reload. If the write
    /// commits but the follow-up reload fails, the mutation still resolves
    /// `Ok` (the write persisted); the reload failure is logged and left in
    /// [Tracker::load_error].
    pub async fn add_transaction(&mut self, input: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self.source.create_transaction(input).await?;
        self.reload_after_write().await;
        Ok(transaction)
    }

    /// Patch a transaction, then reload the record store.
    pub async fn update_transaction(
        &mut self,
        id: DatabaseId,
        patch: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        let transaction = self.source.update_transaction(id, patch).await?;
        self.reload_after_write().await;
        Ok(transaction)
    }

    /// Delete a transaction, then reload the record store.
    pub async fn delete_transaction(&mut self, id: DatabaseId) -> Result<(), Error> {
        self.source.delete_transaction(id).await?;
        self.reload_after_write().await;
        Ok(())
    }

    /// Create an account, then reload the record store.
    pub async fn add_account(&mut self, input: NewAccount) -> Result<Account, Error> {
        let account = self.source.create_account(input).await?;
        self.reload_after_write().await;
        Ok(account)
    }

    /// Patch an account, then reload the record store.
    pub async fn update_account(
        &mut self,
        id: DatabaseId,
        patch: AccountUpdate,
    ) -> Result<Account, Error> {
        let account = self.source.update_account(id, patch).await?;
        self.reload_after_write().await;
        Ok(account)
    }

    /// Delete an account, then reload the record store.
    pub async fn delete_account(&mut self, id: DatabaseId) -> Result<(), Error> {
        self.source.delete_account(id).await?;
        self.reload_after_write().await;
        Ok(())
    }

    /// Create a goal, then reload the record store.
    pub async fn add_goal(&mut self, input: NewGoal) -> Result<Goal, Error> {
        let goal = self.source.create_goal(input).await?;
        self.reload_after_write().await;
        Ok(goal)
    }

    /// Patch a goal, then reload the record store.
    pub async fn update_goal(&mut self, id: DatabaseId, patch: GoalUpdate) -> Result<Goal, Error> {
        let goal = self.source.update_goal(id, patch).await?;
        self.reload_after_write().await;
        Ok(goal)
    }

    /// Delete a goal, then reload the record store.
    pub async fn delete_goal(&mut self, id: DatabaseId) -> Result<(), Error> {
        self.source.delete_goal(id).await?;
        self.reload_after_write().await;
        Ok(())
    }

    /// Create a family member, then reload the record store.
    pub async fn add_member(&mut self, input: NewFamilyMember) -> Result<FamilyMember, Error> {
        let member = self.source.create_member(input).await?;
        self.reload_after_write().await;
        Ok(member)
    }

    /// Patch a family member, then reload the record store.
    pub async fn update_member(
        &mut self,
        id: DatabaseId,
        patch: FamilyMemberUpdate,
    ) -> Result<FamilyMember, Error> {
        let member = self.source.update_member(id, patch).await?;
        self.reload_after_write().await;
        Ok(member)
    }

    /// Delete a family member, then reload the record store.
    ///
    /// Records that referenced the member are left to the data source's
    /// deletion policy; the core does not cascade.
    pub async fn delete_member(&mut self, id: DatabaseId) -> Result<(), Error> {
        self.source.delete_member(id).await?;
        self.reload_after_write().await;
        Ok(())
    }

    async fn reload_after_write(&mut self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!("reload after a committed write failed: {error}");
        }
    }
}
