//! Dashboard routes.

use axum::{Json, Router, extract::State, routing::get};
use maktab_core::aggregate::{DashboardSummary, MonthlyTotal};
use maktab_db::{DonationRepository, ExpenseRepository, SalaryRepository};
use maktab_shared::types::format_taka;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// An amount with its display text.
#[derive(Debug, Serialize)]
pub struct Money {
    /// Raw amount.
    pub amount: Decimal,
    /// Formatted amount.
    pub display: String,
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self {
            amount,
            display: format_taka(amount),
        }
    }
}

/// Financial overview.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Sum of all donations.
    pub total_donations: Money,
    /// Sum of all expenses.
    pub total_expenses: Money,
    /// Sum of all salary payments.
    pub total_salaries: Money,
    /// Donations minus expenses minus salaries.
    pub balance: Money,
    /// Distinct donors.
    pub donor_count: usize,
    /// Donations per month as `{month: "YYYY-MM", total}`, oldest first.
    pub monthly_donations: Vec<MonthlyTotal>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_donations: summary.total_donations.into(),
            total_expenses: summary.total_expenses.into(),
            total_salaries: summary.total_salaries.into(),
            balance: summary.balance.into(),
            donor_count: summary.donor_count,
            monthly_donations: summary.monthly_donations,
        }
    }
}

/// GET /dashboard - Totals, balance and the monthly donation trend.
async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let db = (*state.db).clone();
    let donations = DonationRepository::new(db.clone()).list_all().await?;
    let expenses = ExpenseRepository::new(db.clone()).list_all().await?;
    let salaries = SalaryRepository::new(db).list_all().await?;

    let summary = DashboardSummary::compute(&donations, &expenses, &salaries);
    Ok(Json(summary.into()))
}
