//! Path and query extractors whose rejections use the JSON error body.

use crate::response::ApiErrorResponse;
use axum::extract::FromRequestParts;

/// [`axum::extract::Query`] that rejects with a 400 `{ "error": ... }`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiErrorResponse))]
pub struct ApiQuery<T>(pub T);

/// [`axum::extract::Path`] that rejects with a 400 `{ "error": ... }`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiErrorResponse))]
pub struct ApiPath<T>(pub T);
