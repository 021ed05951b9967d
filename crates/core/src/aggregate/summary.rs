//! Summaries shown alongside each ledger and on the dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    GroupTotal, MonthlyTotal, current_balance, group_sum, monthly_series, sum, unique_count,
};
use crate::ledger::{Donation, Expense, ExpenseCategory, Salary};

/// Totals for the donations ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationSummary {
    /// Sum of all donations.
    pub total: Decimal,
    /// Number of distinct donors, counted by real name.
    pub donor_count: usize,
}

impl DonationSummary {
    /// Summarizes `donations`.
    #[must_use]
    pub fn compute(donations: &[Donation]) -> Self {
        Self {
            total: sum(donations),
            donor_count: unique_count(donations, |d| d.donor_name.clone()),
        }
    }
}

/// Totals for the expenses ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    /// Sum of all expenses.
    pub total: Decimal,
    /// Per-category totals.
    pub by_category: Vec<GroupTotal<ExpenseCategory>>,
}

impl ExpenseSummary {
    /// Summarizes `expenses`.
    #[must_use]
    pub fn compute(expenses: &[Expense]) -> Self {
        Self {
            total: sum(expenses),
            by_category: group_sum(expenses, |e| e.category),
        }
    }
}

/// Totals for the salaries ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySummary {
    /// Sum of all salary payments.
    pub total: Decimal,
    /// Per-teacher totals.
    pub by_teacher: Vec<GroupTotal<String>>,
}

impl SalarySummary {
    /// Summarizes `salaries`.
    #[must_use]
    pub fn compute(salaries: &[Salary]) -> Self {
        Self {
            total: sum(salaries),
            by_teacher: group_sum(salaries, |s| s.teacher_name.clone()),
        }
    }
}

/// Financial overview across all three ledgers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Sum of all donations.
    pub total_donations: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// Sum of all salary payments.
    pub total_salaries: Decimal,
    /// Donations minus expenses and salaries.
    pub balance: Decimal,
    /// Number of distinct donors.
    pub donor_count: usize,
    /// Donations per month, ascending.
    pub monthly_donations: Vec<MonthlyTotal>,
}

impl DashboardSummary {
    /// Builds the overview from the full contents of each ledger.
    #[must_use]
    pub fn compute(donations: &[Donation], expenses: &[Expense], salaries: &[Salary]) -> Self {
        let donation_summary = DonationSummary::compute(donations);
        let total_expenses = sum(expenses);
        let total_salaries = sum(salaries);

        Self {
            total_donations: donation_summary.total,
            total_expenses,
            total_salaries,
            balance: current_balance(donation_summary.total, total_expenses, total_salaries),
            donor_count: donation_summary.donor_count,
            monthly_donations: monthly_series(donations),
        }
    }
}
