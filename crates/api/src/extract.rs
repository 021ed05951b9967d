//! Request body extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON request body whose rejections render as [`ApiError`].
///
/// A body that is not valid JSON, or does not match the expected shape (a
/// non-numeric `amount`, a malformed `date`), answers `400 VALIDATION_ERROR`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
