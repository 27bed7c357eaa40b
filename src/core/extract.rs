//! Extractors - axum's `Json`, `Query` and `Path` with rejections routed through `AppError`

use super::error::AppError;
use axum_macros::{FromRequest, FromRequestParts};

/// JSON body; malformed or mistyped payloads become 422 with field detail
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string; unparsable values become 422
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters; non-numeric ids become 422
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
