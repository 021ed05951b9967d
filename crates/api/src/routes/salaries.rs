//! Teacher salary routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::NaiveDate;
use maktab_core::aggregate::{GroupTotal, SalarySummary};
use maktab_core::ledger::{Salary, SalaryInput};
use maktab_db::SalaryRepository;
use maktab_shared::types::{SalaryId, format_display_date, format_taka};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::{AppState, error::ApiError, extract::JsonBody, middleware::AdminAccess};

/// Creates the salary routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/salaries", get(list_salaries).post(create_salary))
        .route("/salaries/{id}", put(update_salary).delete(delete_salary))
}

/// A salary payment with display fields.
#[derive(Debug, Serialize)]
pub struct SalaryView {
    /// Payment ID.
    pub id: SalaryId,
    /// Teacher who was paid.
    pub teacher_name: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Amount formatted for display.
    pub amount_display: String,
    /// Payment date.
    pub date: NaiveDate,
    /// Date formatted for display.
    pub date_display: String,
}

impl From<Salary> for SalaryView {
    fn from(salary: Salary) -> Self {
        Self {
            id: salary.id,
            amount_display: format_taka(salary.amount),
            date_display: format_display_date(salary.date),
            teacher_name: salary.teacher_name,
            amount: salary.amount,
            date: salary.date,
        }
    }
}

/// Per-teacher total.
#[derive(Debug, Serialize)]
pub struct TeacherTotalView {
    /// Teacher name.
    pub teacher_name: String,
    /// Sum paid to the teacher.
    pub total: Decimal,
    /// Sum formatted for display.
    pub total_display: String,
}

impl From<GroupTotal<String>> for TeacherTotalView {
    fn from(group: GroupTotal<String>) -> Self {
        Self {
            total_display: format_taka(group.total),
            teacher_name: group.key,
            total: group.total,
        }
    }
}

/// Totals shown above the salary table.
#[derive(Debug, Serialize)]
pub struct SalarySummaryView {
    /// Sum of all payments.
    pub total: Decimal,
    /// Sum formatted for display.
    pub total_display: String,
    /// Totals per teacher, in order of first appearance.
    pub by_teacher: Vec<TeacherTotalView>,
}

impl From<SalarySummary> for SalarySummaryView {
    fn from(summary: SalarySummary) -> Self {
        Self {
            total: summary.total,
            total_display: format_taka(summary.total),
            by_teacher: summary
                .by_teacher
                .into_iter()
                .map(TeacherTotalView::from)
                .collect(),
        }
    }
}

/// GET /salaries - All salary payments, newest first, with per-teacher totals.
async fn list_salaries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let salaries = SalaryRepository::new((*state.db).clone()).list_all().await?;

    let summary = SalarySummaryView::from(SalarySummary::compute(&salaries));
    let views: Vec<SalaryView> = salaries.into_iter().map(SalaryView::from).collect();

    Ok(Json(json!({ "salaries": views, "summary": summary })))
}

/// POST /salaries - Record a salary payment.
async fn create_salary(
    State(state): State<AppState>,
    admin: AdminAccess,
    JsonBody(payload): JsonBody<SalaryInput>,
) -> Result<impl IntoResponse, ApiError> {
    let salary = SalaryRepository::new((*state.db).clone())
        .create(&admin.grant, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SalaryView::from(salary))))
}

/// PUT /salaries/{id} - Overwrite a salary payment.
async fn update_salary(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<SalaryId>,
    JsonBody(payload): JsonBody<SalaryInput>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = SalaryRepository::new((*state.db).clone())
        .update(&admin.grant, id, payload)
        .await?;

    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /salaries/{id} - Remove a salary payment.
async fn delete_salary(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<SalaryId>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = SalaryRepository::new((*state.db).clone())
        .delete(&admin.grant, id)
        .await?;

    Ok(Json(json!({ "deleted": deleted })))
}
