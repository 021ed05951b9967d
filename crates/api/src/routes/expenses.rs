//! Expense ledger routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::NaiveDate;
use maktab_core::aggregate::{ExpenseSummary, GroupTotal};
use maktab_core::ledger::{Expense, ExpenseCategory, ExpenseInput, ValidationError};
use maktab_db::ExpenseRepository;
use maktab_shared::types::{ExpenseId, format_display_date, format_taka};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{AppState, error::ApiError, extract::JsonBody, middleware::AdminAccess};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}

/// Request body for creating or updating an expense.
///
/// The category arrives as text so an unknown value is reported as a validation error.
#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
    /// One of the fixed categories, case-insensitive.
    pub category: String,
}

impl TryFrom<ExpenseRequest> for ExpenseInput {
    type Error = ValidationError;

    fn try_from(request: ExpenseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            description: request.description,
            amount: request.amount,
            date: request.date,
            category: request.category.parse()?,
        })
    }
}

/// An expense with display fields.
#[derive(Debug, Serialize)]
pub struct ExpenseView {
    /// Expense ID.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Amount formatted for display.
    pub amount_display: String,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Date formatted for display.
    pub date_display: String,
    /// Expense category.
    pub category: ExpenseCategory,
}

impl From<Expense> for ExpenseView {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            amount_display: format_taka(expense.amount),
            date_display: format_display_date(expense.date),
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
            category: expense.category,
        }
    }
}

/// Per-category total with display text.
#[derive(Debug, Serialize)]
pub struct CategoryTotalView {
    /// Category.
    pub category: ExpenseCategory,
    /// Sum for the category.
    pub total: Decimal,
    /// Sum formatted for display.
    pub total_display: String,
}

impl From<GroupTotal<ExpenseCategory>> for CategoryTotalView {
    fn from(group: GroupTotal<ExpenseCategory>) -> Self {
        Self {
            category: group.key,
            total: group.total,
            total_display: format_taka(group.total),
        }
    }
}

/// Totals shown above the expense table.
#[derive(Debug, Serialize)]
pub struct ExpenseSummaryView {
    /// Sum of all expenses.
    pub total: Decimal,
    /// Sum formatted for display.
    pub total_display: String,
    /// Totals per category, in order of first appearance.
    pub by_category: Vec<CategoryTotalView>,
}

impl From<ExpenseSummary> for ExpenseSummaryView {
    fn from(summary: ExpenseSummary) -> Self {
        Self {
            total: summary.total,
            total_display: format_taka(summary.total),
            by_category: summary
                .by_category
                .into_iter()
                .map(CategoryTotalView::from)
                .collect(),
        }
    }
}

/// GET /expenses - All expenses, newest first, with per-category totals.
async fn list_expenses(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let expenses = ExpenseRepository::new((*state.db).clone()).list_all().await?;

    let summary = ExpenseSummaryView::from(ExpenseSummary::compute(&expenses));
    let views: Vec<ExpenseView> = expenses.into_iter().map(ExpenseView::from).collect();

    Ok(Json(json!({ "expenses": views, "summary": summary })))
}

/// POST /expenses - Record an expense.
async fn create_expense(
    State(state): State<AppState>,
    admin: AdminAccess,
    JsonBody(payload): JsonBody<ExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = ExpenseInput::try_from(payload)?;
    let expense = ExpenseRepository::new((*state.db).clone())
        .create(&admin.grant, input)
        .await?;

    Ok((StatusCode::CREATED, Json(ExpenseView::from(expense))))
}

/// PUT /expenses/{id} - Overwrite an expense.
async fn update_expense(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<ExpenseId>,
    JsonBody(payload): JsonBody<ExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = ExpenseInput::try_from(payload)?;
    let updated = ExpenseRepository::new((*state.db).clone())
        .update(&admin.grant, id, input)
        .await?;

    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /expenses/{id} - Remove an expense.
async fn delete_expense(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<ExpenseId>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = ExpenseRepository::new((*state.db).clone())
        .delete(&admin.grant, id)
        .await?;

    Ok(Json(json!({ "deleted": deleted })))
}
