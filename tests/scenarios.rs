//! End-to-end scenarios driven through the public API against the in-memory
//! data source.

use hearthbook::{
    AccountKind, DataSource, KindFilter, MemoryDataSource, NewAccount, NewFamilyMember,
    NewTransaction, Period, Tracker, TransactionKind, TransactionStatus,
};
use time::macros::{date, datetime};

async fn tracker_with(
    transactions: Vec<NewTransaction>,
    accounts: Vec<NewAccount>,
) -> Tracker<MemoryDataSource> {
    let source = MemoryDataSource::new();

    for account in accounts {
        source.create_account(account).await.unwrap();
    }
    for transaction in transactions {
        source.create_transaction(transaction).await.unwrap();
    }

    let mut tracker = Tracker::new(source);
    tracker.refresh().await.unwrap();
    tracker
}

fn checking(balance: f64) -> NewAccount {
    NewAccount {
        name: "Everyday".to_owned(),
        kind: AccountKind::Checking,
        balance,
        credit_limit: None,
        current_bill: 0.0,
        holder_id: 1,
    }
}

fn credit_card(credit_limit: f64, current_bill: f64) -> NewAccount {
    NewAccount {
        name: "Visa".to_owned(),
        kind: AccountKind::CreditCard,
        balance: 0.0,
        credit_limit: Some(credit_limit),
        current_bill,
        holder_id: 1,
    }
}

/// One completed income, one completed expense and one pending expense in
/// January; pending money must not count toward any realized total.
#[tokio::test]
async fn january_totals_exclude_pending_transactions() {
    let mut food_expense = NewTransaction::new(
        TransactionKind::Expense,
        200.0,
        "weekly groceries",
        datetime!(2024-01-12 18:00),
    );
    food_expense.category = Some("Food".to_owned());

    let mut pending_expense = NewTransaction::new(
        TransactionKind::Expense,
        100.0,
        "restaurant booking",
        datetime!(2024-01-20 20:00),
    );
    pending_expense.category = Some("Food".to_owned());
    pending_expense.status = TransactionStatus::Pending;

    let tracker = tracker_with(
        vec![
            NewTransaction::new(
                TransactionKind::Income,
                1000.0,
                "salary",
                datetime!(2024-01-10 09:00),
            ),
            food_expense,
            pending_expense,
        ],
        Vec::new(),
    )
    .await;

    let january = Period::between(date!(2024 - 01 - 01), date!(2024 - 01 - 31));

    assert_eq!(tracker.income_for_period(january), 1000.0);
    assert_eq!(tracker.expenses_for_period(january), 200.0);
    assert_eq!(tracker.savings_rate(january), 80.0);

    let breakdown = tracker.expenses_by_category(january);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "Food");
    assert_eq!(breakdown[0].amount, 200.0);
    assert_eq!(breakdown[0].percentage, 20.0);
    assert_eq!(tracker.category_percentage("Food", january), 20.0);
}

#[tokio::test]
async fn unfiltered_balance_sums_accounts_with_credit_card_headroom() {
    let tracker = tracker_with(Vec::new(), vec![checking(500.0), credit_card(1000.0, 300.0)]).await;

    assert_eq!(tracker.total_balance(), 1200.0);
}

#[tokio::test]
async fn member_filter_turns_the_balance_into_a_flow() {
    let source = MemoryDataSource::new();
    let member = source
        .create_member(NewFamilyMember {
            name: "Ana".to_owned(),
            monthly_income: 3000.0,
        })
        .await
        .unwrap();
    source.create_account(checking(500.0)).await.unwrap();
    source
        .create_account(credit_card(1000.0, 300.0))
        .await
        .unwrap();

    let mut income = NewTransaction::new(
        TransactionKind::Income,
        300.0,
        "tutoring",
        datetime!(2024-01-05 17:00),
    );
    income.member_id = Some(member.id);
    source.create_transaction(income).await.unwrap();

    let mut expense = NewTransaction::new(
        TransactionKind::Expense,
        100.0,
        "textbooks",
        datetime!(2024-01-08 11:00),
    );
    expense.member_id = Some(member.id);
    source.create_transaction(expense).await.unwrap();

    let mut tracker = Tracker::new(source);
    tracker.refresh().await.unwrap();

    assert_eq!(tracker.total_balance(), 1200.0);

    tracker.set_selected_member(Some(member.id));
    // Net flow only; the 1200 of account money is ignored.
    assert_eq!(tracker.total_balance(), 200.0);

    tracker.reset_filters();
    assert_eq!(tracker.total_balance(), 1200.0);
}

#[tokio::test]
async fn filtered_listing_composes_every_dimension() {
    let source = MemoryDataSource::new();
    let ana = source
        .create_member(NewFamilyMember {
            name: "Ana".to_owned(),
            monthly_income: 3000.0,
        })
        .await
        .unwrap();
    let bruno = source
        .create_member(NewFamilyMember {
            name: "Bruno".to_owned(),
            monthly_income: 2500.0,
        })
        .await
        .unwrap();

    for (kind, amount, description, day, member) in [
        (
            TransactionKind::Income,
            1000.0,
            "Ana salary",
            date!(2024 - 01 - 05),
            Some(ana.id),
        ),
        (
            TransactionKind::Expense,
            80.0,
            "market groceries",
            date!(2024 - 01 - 10),
            Some(ana.id),
        ),
        (
            TransactionKind::Expense,
            60.0,
            "Groceries again",
            date!(2024 - 02 - 02),
            Some(ana.id),
        ),
        (
            TransactionKind::Expense,
            45.0,
            "groceries",
            date!(2024 - 01 - 12),
            Some(bruno.id),
        ),
        (
            TransactionKind::Expense,
            30.0,
            "family groceries",
            date!(2024 - 01 - 15),
            None,
        ),
    ] {
        let mut transaction = NewTransaction::new(kind, amount, description, day.midnight());
        transaction.member_id = member;
        source.create_transaction(transaction).await.unwrap();
    }

    let mut tracker = Tracker::new(source);
    tracker.refresh().await.unwrap();

    tracker.set_selected_member(Some(ana.id));
    tracker.set_kind_filter(KindFilter::Expense);
    tracker.set_period(Period::between(date!(2024 - 01 - 01), date!(2024 - 01 - 31)));
    tracker.set_search_text("GROCERIES");

    let filtered = tracker.filtered_transactions();

    // Bruno's and the family-wide groceries are out (member), the February
    // one is out (period), the salary is out (kind).
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].description, "market groceries");
}

#[tokio::test]
async fn deleting_a_transaction_is_visible_after_the_reload() {
    let mut tracker = tracker_with(
        vec![
            NewTransaction::new(
                TransactionKind::Expense,
                25.0,
                "lunch",
                datetime!(2024-03-01 12:30),
            ),
            NewTransaction::new(
                TransactionKind::Expense,
                9.5,
                "coffee",
                datetime!(2024-03-02 08:15),
            ),
        ],
        Vec::new(),
    )
    .await;

    let doomed = tracker.transactions()[0].id;
    tracker.delete_transaction(doomed).await.unwrap();

    assert_eq!(tracker.transactions().len(), 1);
    assert!(tracker.transactions().iter().all(|t| t.id != doomed));
}

/// The serde shapes are the adapter contract: enum tags must match the
/// external data source's wire values.
#[test]
fn entity_enums_serialize_with_uppercase_tags() {
    let transaction = NewTransaction::new(
        TransactionKind::Income,
        1.0,
        "tag check",
        datetime!(2024-01-01 00:00),
    );

    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(value["kind"], "INCOME");
    assert_eq!(value["status"], "COMPLETED");

    let account = serde_json::to_value(&NewAccount {
        name: "Visa".to_owned(),
        kind: AccountKind::CreditCard,
        balance: 0.0,
        credit_limit: Some(1000.0),
        current_bill: 0.0,
        holder_id: 1,
    })
    .unwrap();
    assert_eq!(account["kind"], "CREDIT_CARD");
}
