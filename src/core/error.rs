//! Error shaping - every failure leaves the API as `{"detail": ...}`
//!
//! `detail` is a plain message for not-found / storage failures and a list of
//! field errors for validation failures.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::error;

/// One offending input field
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Where the value came from (`body`, `query`, `path`) followed by the field name
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: Detail,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    detail: Detail,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            detail: Detail::Message(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Lookup by id found no live row. Missing and soft-deleted rows share this message
    pub fn not_found_or_deleted(kind: &str, id: impl std::fmt::Display) -> Self {
        Self::not_found(format!(
            "Error: `{kind}` data not found or deleted - ID: {id}"
        ))
    }

    pub fn unprocessable(fields: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: Detail::Fields(fields),
        }
    }

    fn rejected(status: StatusCode, source: &str, kind: &str, msg: String) -> Self {
        let status = match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            other => other,
        };
        Self {
            status,
            detail: Detail::Fields(vec![FieldError {
                loc: vec![source.to_string()],
                msg,
                kind: kind.to_string(),
            }]),
        }
    }

    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub fn service_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!(error = %err, "Database pool unavailable");
                Self::service_unavailable()
            }
            _ => {
                error!(error = %err, "Storage failure");
                Self::internal_server_error()
            }
        }
    }
}

impl AppError {
    /// Field-level 422 for a failed `validate()`; `source` is the first `loc` segment
    pub fn invalid(source: &str, err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                errors.iter().map(move |e| FieldError {
                    loc: vec![source.to_string(), field.clone()],
                    msg: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {field}")),
                    kind: e.code.to_string(),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.loc.cmp(&b.loc));
        Self::unprocessable(fields)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::invalid("body", err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body",
        };
        Self::rejected(rejection.status(), "body", kind, rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(rejection.status(), "query", "query_parsing", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), "path", "path_parsing", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            detail: self.detail,
        });
        (self.status, body).into_response()
    }
}
