//! Donation ledger routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::NaiveDate;
use maktab_core::aggregate::DonationSummary;
use maktab_core::auth::Session;
use maktab_core::ledger::{Donation, DonationInput};
use maktab_db::DonationRepository;
use maktab_shared::types::{DonationId, format_display_date, format_taka};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::{
    AppState,
    error::ApiError,
    extract::JsonBody,
    middleware::{AdminAccess, CurrentSession},
};

/// Creates the donation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/donations", get(list_donations).post(create_donation))
        .route(
            "/donations/{id}",
            put(update_donation).delete(delete_donation),
        )
}

/// A donation as shown to the current session.
#[derive(Debug, Serialize)]
pub struct DonationView {
    /// Donation ID.
    pub id: DonationId,
    /// Donor name, masked for anonymous donations unless the viewer is admin.
    pub donor_name: String,
    /// Amount donated.
    pub amount: Decimal,
    /// Amount formatted for display.
    pub amount_display: String,
    /// Date received.
    pub date: NaiveDate,
    /// Date formatted for display.
    pub date_display: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether the donor asked to stay anonymous.
    pub is_anonymous: bool,
}

impl DonationView {
    fn new(donation: &Donation, viewer: &Session) -> Self {
        Self {
            id: donation.id,
            donor_name: viewer.donor_name(donation).to_string(),
            amount: donation.amount,
            amount_display: format_taka(donation.amount),
            date: donation.date,
            date_display: format_display_date(donation.date),
            notes: donation.notes.clone(),
            is_anonymous: donation.is_anonymous,
        }
    }
}

/// Totals shown under the donation table.
#[derive(Debug, Serialize)]
pub struct DonationSummaryView {
    /// Sum of all donations.
    pub total: Decimal,
    /// Sum formatted for display.
    pub total_display: String,
    /// Distinct donor names, counted under their real names.
    pub donor_count: usize,
}

impl From<DonationSummary> for DonationSummaryView {
    fn from(summary: DonationSummary) -> Self {
        Self {
            total: summary.total,
            total_display: format_taka(summary.total),
            donor_count: summary.donor_count,
        }
    }
}

/// GET /donations - All donations, newest first, with a summary.
async fn list_donations(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<impl IntoResponse, ApiError> {
    let donations = DonationRepository::new((*state.db).clone()).list_all().await?;

    let summary = DonationSummaryView::from(DonationSummary::compute(&donations));
    let views: Vec<DonationView> = donations
        .iter()
        .map(|d| DonationView::new(d, current.session()))
        .collect();

    Ok(Json(json!({ "donations": views, "summary": summary })))
}

/// POST /donations - Record a donation.
async fn create_donation(
    State(state): State<AppState>,
    admin: AdminAccess,
    current: CurrentSession,
    JsonBody(payload): JsonBody<DonationInput>,
) -> Result<impl IntoResponse, ApiError> {
    let donation = DonationRepository::new((*state.db).clone())
        .create(&admin.grant, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DonationView::new(&donation, current.session())),
    ))
}

/// PUT /donations/{id} - Overwrite a donation.
async fn update_donation(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<DonationId>,
    JsonBody(payload): JsonBody<DonationInput>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = DonationRepository::new((*state.db).clone())
        .update(&admin.grant, id, payload)
        .await?;

    Ok(Json(json!({ "updated": updated })))
}

/// DELETE /donations/{id} - Remove a donation.
async fn delete_donation(
    State(state): State<AppState>,
    admin: AdminAccess,
    Path(id): Path<DonationId>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = DonationRepository::new((*state.db).clone())
        .delete(&admin.grant, id)
        .await?;

    Ok(Json(json!({ "deleted": deleted })))
}
