//! Expense category listing.

use axum::{Json, Router, routing::get};
use maktab_core::ledger::ExpenseCategory;
use serde_json::{Value, json};

use crate::AppState;

/// GET /expense-categories - The fixed set of expense categories.
async fn list_categories() -> Json<Value> {
    Json(json!({ "categories": ExpenseCategory::ALL }))
}

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/expense-categories", get(list_categories))
}
