//! An in-memory [DataSource] for tests and single-process embeddings.

use std::sync::Mutex;

use crate::{
    Error,
    database_id::DatabaseId,
    models::{
        Account, AccountUpdate, FamilyMember, FamilyMemberUpdate, Goal, GoalUpdate, NewAccount,
        NewFamilyMember, NewGoal, NewTransaction, Transaction, TransactionUpdate,
    },
    stores::DataSource,
};

#[derive(Debug, Default)]
struct Records {
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    goals: Vec<Goal>,
    members: Vec<FamilyMember>,
    next_id: DatabaseId,
}

impl Records {
    fn assign_id(&mut self) -> DatabaseId {
        self.next_id += 1;
        self.next_id
    }
}

/// A [DataSource] that keeps all records in process memory.
///
/// IDs are assigned sequentially across all four collections. Reads return
/// clones, so the tracker's snapshot never aliases the store's own records.
#[derive(Debug, Default)]
pub struct MemoryDataSource {
    records: Mutex<Records>,
}

impl MemoryDataSource {
    /// Create an empty data source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataSource for MemoryDataSource {
    async fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.records.lock().unwrap().transactions.clone())
    }

    async fn create_transaction(&self, input: NewTransaction) -> Result<Transaction, Error> {
        let mut records = self.records.lock().unwrap();
        let transaction = Transaction {
            id: records.assign_id(),
            kind: input.kind,
            amount: input.amount,
            description: input.description,
            category: input.category,
            date: input.date,
            account_id: input.account_id,
            member_id: input.member_id,
            installment_number: input.installment_number,
            total_installments: input.total_installments,
            status: input.status,
            is_recurring: input.is_recurring,
        };
        records.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        id: DatabaseId,
        patch: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        let mut records = self.records.lock().unwrap();
        let transaction = records
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound(id))?;
        patch.apply_to(transaction);

        Ok(transaction.clone())
    }

    async fn delete_transaction(&self, id: DatabaseId) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let index = records
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound(id))?;
        records.transactions.remove(index);

        Ok(())
    }

    async fn accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(self.records.lock().unwrap().accounts.clone())
    }

    async fn create_account(&self, input: NewAccount) -> Result<Account, Error> {
        let mut records = self.records.lock().unwrap();
        let account = Account {
            id: records.assign_id(),
            name: input.name,
            kind: input.kind,
            balance: input.balance,
            credit_limit: input.credit_limit,
            current_bill: input.current_bill,
            holder_id: input.holder_id,
        };
        records.accounts.push(account.clone());

        Ok(account)
    }

    async fn update_account(
        &self,
        id: DatabaseId,
        patch: AccountUpdate,
    ) -> Result<Account, Error> {
        let mut records = self.records.lock().unwrap();
        let account = records
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(Error::NotFound(id))?;
        patch.apply_to(account);

        Ok(account.clone())
    }

    async fn delete_account(&self, id: DatabaseId) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let index = records
            .accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or(Error::NotFound(id))?;
        records.accounts.remove(index);

        Ok(())
    }

    async fn goals(&self) -> Result<Vec<Goal>, Error> {
        Ok(self.records.lock().unwrap().goals.clone())
    }

    async fn create_goal(&self, input: NewGoal) -> Result<Goal, Error> {
        let mut records = self.records.lock().unwrap();
        let goal = Goal {
            id: records.assign_id(),
            name: input.name,
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            deadline: input.deadline,
            member_id: input.member_id,
            is_completed: false,
        };
        records.goals.push(goal.clone());

        Ok(goal)
    }

    async fn update_goal(&self, id: DatabaseId, patch: GoalUpdate) -> Result<Goal, Error> {
        let mut records = self.records.lock().unwrap();
        let goal = records
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(Error::NotFound(id))?;
        patch.apply_to(goal);

        Ok(goal.clone())
    }

    async fn delete_goal(&self, id: DatabaseId) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let index = records
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(Error::NotFound(id))?;
        records.goals.remove(index);

        Ok(())
    }

    async fn members(&self) -> Result<Vec<FamilyMember>, Error> {
        Ok(self.records.lock().unwrap().members.clone())
    }

    async fn create_member(&self, input: NewFamilyMember) -> Result<FamilyMember, Error> {
        let mut records = self.records.lock().unwrap();
        let member = FamilyMember {
            id: records.assign_id(),
            name: input.name,
            monthly_income: input.monthly_income,
        };
        records.members.push(member.clone());

        Ok(member)
    }

    async fn update_member(
        &self,
        id: DatabaseId,
        patch: FamilyMemberUpdate,
    ) -> Result<FamilyMember, Error> {
        let mut records = self.records.lock().unwrap();
        let member = records
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(Error::NotFound(id))?;
        patch.apply_to(member);

        Ok(member.clone())
    }

    async fn delete_member(&self, id: DatabaseId) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let index = records
            .members
            .iter()
            .position(|member| member.id == id)
            .ok_or(Error::NotFound(id))?;
        records.members.remove(index);

        Ok(())
    }
}
