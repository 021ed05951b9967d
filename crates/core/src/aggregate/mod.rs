//! Aggregation over ledger records.
//!
//! Pure, stateless functions over records already fetched from storage. Inputs are
//! assumed well formed: amounts and dates were validated when the records were written.

mod summary;

#[cfg(test)]
mod props;

pub use summary::{DashboardSummary, DonationSummary, ExpenseSummary, SalarySummary};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use maktab_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::LedgerRecord;

/// Total for one group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal<K> {
    /// Group key (category, teacher name, ...).
    pub key: K,
    /// Sum of amounts in the group.
    pub total: Decimal,
}

/// Total for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// The month, labelled `YYYY-MM` when serialized.
    pub month: YearMonth,
    /// Sum of amounts dated in that month.
    pub total: Decimal,
}

/// Sums the amounts of `records`. Zero for empty input.
pub fn sum<R: LedgerRecord>(records: &[R]) -> Decimal {
    records.iter().map(LedgerRecord::amount).sum()
}

/// Sums amounts per key. Groups appear in order of their first occurrence in `records`.
pub fn group_sum<R, K, F>(records: &[R], key: F) -> Vec<GroupTotal<K>>
where
    R: LedgerRecord,
    K: Eq + Hash + Clone,
    F: Fn(&R) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal<K>> = Vec::new();

    for record in records {
        let k = key(record);
        match positions.get(&k) {
            Some(&index) => groups[index].total += record.amount(),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push(GroupTotal {
                    key: k,
                    total: record.amount(),
                });
            }
        }
    }

    groups
}

/// Counts distinct keys. Zero for empty input.
pub fn unique_count<R, K, F>(records: &[R], key: F) -> usize
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    records.iter().map(key).collect::<HashSet<_>>().len()
}

/// Buckets amounts by calendar month, ascending.
pub fn monthly_series<R: LedgerRecord>(records: &[R]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for record in records {
        *buckets.entry(YearMonth::of(record.date())).or_default() += record.amount();
    }

    buckets
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Money left after expenses and salaries. May be negative.
#[must_use]
pub fn current_balance(
    total_donations: Decimal,
    total_expenses: Decimal,
    total_salaries: Decimal,
) -> Decimal {
    total_donations - (total_expenses + total_salaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Donation, Expense, ExpenseCategory};
    use chrono::NaiveDate;
    use maktab_shared::types::{DonationId, ExpenseId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: i32, amount: Decimal, category: ExpenseCategory) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            description: format!("expense {id}"),
            amount,
            date: date(2024, 3, 1),
            category,
        }
    }

    fn donation(id: i32, donor: &str, amount: Decimal, on: NaiveDate) -> Donation {
        Donation {
            id: DonationId::new(id),
            donor_name: donor.to_string(),
            amount,
            date: on,
            notes: None,
            is_anonymous: false,
        }
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let none: Vec<Expense> = vec![];
        assert_eq!(sum(&none), Decimal::ZERO);
    }

    #[test]
    fn test_group_sum_by_category() {
        let expenses = vec![
            expense(1, dec!(100), ExpenseCategory::Utilities),
            expense(2, dec!(50), ExpenseCategory::Utilities),
        ];

        let groups = group_sum(&expenses, |e| e.category);

        assert_eq!(
            groups,
            vec![GroupTotal {
                key: ExpenseCategory::Utilities,
                total: dec!(150),
            }]
        );
    }

    #[test]
    fn test_group_sum_keeps_first_occurrence_order() {
        let expenses = vec![
            expense(1, dec!(10), ExpenseCategory::Supplies),
            expense(2, dec!(20), ExpenseCategory::Other),
            expense(3, dec!(5), ExpenseCategory::Supplies),
        ];

        let keys: Vec<_> = group_sum(&expenses, |e| e.category)
            .into_iter()
            .map(|g| (g.key, g.total))
            .collect();

        assert_eq!(
            keys,
            vec![
                (ExpenseCategory::Supplies, dec!(15)),
                (ExpenseCategory::Other, dec!(20)),
            ]
        );
    }

    #[test]
    fn test_unique_count_uses_real_names() {
        let mut hidden = donation(3, "Karim", dec!(20), date(2024, 1, 3));
        hidden.is_anonymous = true;
        let donations = vec![
            donation(1, "Karim", dec!(10), date(2024, 1, 1)),
            donation(2, "Fatima", dec!(10), date(2024, 1, 2)),
            hidden,
        ];

        assert_eq!(unique_count(&donations, |d| d.donor_name.clone()), 2);
        assert_eq!(unique_count(&Vec::<Donation>::new(), |d| d.id), 0);
    }

    #[test]
    fn test_monthly_series_sorted_ascending() {
        let donations = vec![
            donation(2, "B", dec!(300), date(2024, 2, 10)),
            donation(1, "A", dec!(200), date(2024, 1, 15)),
        ];

        let series = monthly_series(&donations);

        let labelled: Vec<_> = series
            .iter()
            .map(|m| (m.month.to_string(), m.total))
            .collect();
        assert_eq!(
            labelled,
            vec![
                ("2024-01".to_string(), dec!(200)),
                ("2024-02".to_string(), dec!(300)),
            ]
        );
    }

    #[test]
    fn test_monthly_series_merges_same_month_across_years_separately() {
        let donations = vec![
            donation(1, "A", dec!(1), date(2023, 5, 1)),
            donation(2, "A", dec!(2), date(2024, 5, 1)),
            donation(3, "A", dec!(3), date(2024, 5, 31)),
        ];

        let series = monthly_series(&donations);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, YearMonth::new(2023, 5));
        assert_eq!(series[1].total, dec!(5));
    }

    #[test]
    fn test_current_balance_can_be_negative() {
        assert_eq!(current_balance(dec!(1000), dec!(300), dec!(200)), dec!(500));
        assert_eq!(current_balance(dec!(100), dec!(300), dec!(200)), dec!(-400));
    }
}
