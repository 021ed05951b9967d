//! Property-based tests for the aggregation functions.

use chrono::NaiveDate;
use maktab_shared::types::ExpenseId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{group_sum, monthly_series, sum, unique_count};
use crate::ledger::{Expense, ExpenseCategory};

/// Strategy to generate a non-negative amount with two decimal places.
fn amount() -> impl Strategy<Value = Decimal> {
    // 0.00 to 1,000,000.00
    (0i64..=100_000_000i64).prop_map(|paisa| Decimal::new(paisa, 2))
}

fn category() -> impl Strategy<Value = ExpenseCategory> {
    prop_oneof![
        Just(ExpenseCategory::Utilities),
        Just(ExpenseCategory::Supplies),
        Just(ExpenseCategory::Maintenance),
        Just(ExpenseCategory::Other),
    ]
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn expenses() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec((amount(), category(), date()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (amount, category, date))| Expense {
                id: ExpenseId::new(i32::try_from(i).unwrap()),
                description: format!("expense {i}"),
                amount,
                date,
                category,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering records never changes the total.
    #[test]
    fn prop_sum_invariant_under_reordering(records in expenses()) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(sum(&records), sum(&reversed));
    }

    /// Group totals add up to the overall total.
    #[test]
    fn prop_group_totals_add_up(records in expenses()) {
        let grouped: Decimal = group_sum(&records, |e| e.category)
            .into_iter()
            .map(|g| g.total)
            .sum();
        prop_assert_eq!(grouped, sum(&records));
    }

    /// Monthly buckets add up to the overall total and are strictly ascending.
    #[test]
    fn prop_monthly_series_ordered_and_complete(records in expenses()) {
        let series = monthly_series(&records);
        let total: Decimal = series.iter().map(|m| m.total).sum();
        prop_assert_eq!(total, sum(&records));
        prop_assert!(series.windows(2).all(|w| w[0].month < w[1].month));
    }

    /// The number of groups equals the number of distinct keys.
    #[test]
    fn prop_group_count_matches_unique_count(records in expenses()) {
        prop_assert_eq!(
            group_sum(&records, |e| e.category).len(),
            unique_count(&records, |e| e.category)
        );
    }
}
