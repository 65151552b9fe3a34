use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::response::{ErrorDetail, FieldIssue, ValidationDetail};

/// A user column that must be unique across all rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Phone,
    Email,
    Login,
}

impl UniqueField {
    pub fn message(self) -> &'static str {
        match self {
            UniqueField::Phone => "User with the same phone number already exists.",
            UniqueField::Email => "User with the same email address already exists.",
            UniqueField::Login => "User with the same login already exists.",
        }
    }

    /// Best-effort mapping of a Postgres unique-violation message to the column.
    fn from_constraint(message: &str) -> Option<Self> {
        if message.contains("phone") {
            Some(UniqueField::Phone)
        } else if message.contains("email") {
            Some(UniqueField::Email)
        } else if message.contains("login") {
            Some(UniqueField::Login)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{}", .0.message())]
    Conflict(UniqueField),

    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error("ORM error")]
    Orm(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(location: &str, errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues(location, errors, &mut issues);
        AppError::Validation(issues)
    }

    pub fn invalid_field(location: &str, field: &str, msg: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldIssue::new(location, field, msg, "value_error")])
    }

    /// Re-classify a database error raised by an insert/update on `users`.
    /// A unique-constraint violation becomes the matching 409; anything else
    /// stays an ORM error.
    pub fn from_user_write(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            if let Some(field) = UniqueField::from_constraint(&message) {
                tracing::warn!(?field, "unique constraint rejected user write");
                return AppError::Conflict(field);
            }
        }
        AppError::Orm(err)
    }
}

fn collect_issues(location: &str, errors: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    out.push(FieldIssue::new(location, field.to_string(), msg, err.code.to_string()));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_issues(location, inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_issues(location, inner, out);
                }
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_field("body", "__root__", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_field("query", "__root__", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_field("path", "id", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDetail::new(message))).into_response()
            }
            AppError::Conflict(field) => {
                (StatusCode::CONFLICT, Json(ErrorDetail::new(field.message()))).into_response()
            }
            AppError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationDetail { detail }),
            )
                .into_response(),
            AppError::Orm(ref err) => {
                tracing::error!(error = %err, "database error");
                internal_error()
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = %err, "internal error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail::new("Internal Server Error")),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;
