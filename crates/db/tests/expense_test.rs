//! Integration tests for the expense ledger.

mod common;

use common::{admin_grant, date, test_db};
use maktab_core::aggregate::ExpenseSummary;
use maktab_core::ledger::{ExpenseCategory, ExpenseInput};
use maktab_db::ExpenseRepository;
use maktab_shared::types::ExpenseId;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_category_round_trips_through_storage() {
    let repo = ExpenseRepository::new(test_db().await);
    let grant = admin_grant();

    for (i, category) in ExpenseCategory::ALL.into_iter().enumerate() {
        let day = u32::try_from(i + 1).expect("small index");
        repo.create(
            &grant,
            ExpenseInput {
                description: format!("item {day}"),
                amount: dec!(10),
                date: date(2024, 4, day),
                category,
            },
        )
        .await
        .expect("Failed to create expense");
    }

    let all = repo.list_all().await.expect("Failed to list expenses");
    let categories: Vec<ExpenseCategory> = all.iter().map(|e| e.category).collect();
    let mut expected = ExpenseCategory::ALL.to_vec();
    expected.reverse();
    assert_eq!(categories, expected);
}

#[tokio::test]
async fn test_update_and_summary_reflect_new_values() {
    let repo = ExpenseRepository::new(test_db().await);
    let grant = admin_grant();

    let electricity = repo
        .create(
            &grant,
            ExpenseInput {
                description: "Electricity".into(),
                amount: dec!(120.50),
                date: date(2024, 3, 5),
                category: ExpenseCategory::Utilities,
            },
        )
        .await
        .expect("Failed to create expense");
    repo.create(
        &grant,
        ExpenseInput {
            description: "Chalk".into(),
            amount: dec!(50),
            date: date(2024, 3, 6),
            category: ExpenseCategory::Supplies,
        },
    )
    .await
    .expect("Failed to create expense");

    assert!(
        repo.update(
            &grant,
            electricity.id,
            ExpenseInput {
                description: "Roof repair".into(),
                amount: dec!(500),
                date: date(2024, 3, 5),
                category: ExpenseCategory::Maintenance,
            },
        )
        .await
        .expect("Failed to update expense")
    );
    assert!(
        !repo
            .delete(&grant, ExpenseId::new(electricity.id.into_inner() + 100))
            .await
            .expect("Failed to delete")
    );

    let all = repo.list_all().await.expect("Failed to list expenses");
    let summary = ExpenseSummary::compute(&all);
    assert_eq!(summary.total, dec!(550));
    let maintenance = summary
        .by_category
        .iter()
        .find(|g| g.key == ExpenseCategory::Maintenance)
        .expect("maintenance group");
    assert_eq!(maintenance.total, dec!(500));
    assert!(
        summary
            .by_category
            .iter()
            .all(|g| g.key != ExpenseCategory::Utilities)
    );
}
