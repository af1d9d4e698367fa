//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type returned by services and controllers, and implements `IntoResponse` so every
//! error reaches the client as an `ErrorDto` envelope (`data: null` plus an `errors` list).

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Client errors (`MissingParameter`, `Validation`, `BadRequest`, `NotFound`) carry the
/// messages returned to the caller. Infrastructure errors are logged and answered with a
/// generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A required path or query parameter was absent or could not be parsed.
    ///
    /// Results in 400 Bad Request.
    #[error("Missing or invalid parameter: {0}")]
    MissingParameter(String),

    /// One or more validation rules failed.
    ///
    /// Results in 400 Bad Request listing every message. Duplicate names and CPFs are
    /// reported here as well rather than as 409 Conflict.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Request body could not be read as the expected JSON payload.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MissingParameter(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MissingParameter(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `MissingParameter`, `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all infrastructure errors (DbErr, IoErr, ConfigErr)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!("Rejected request: {}", errors.join("; "));
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(errors))).into_response()
            }
            Self::MissingParameter(_) | Self::BadRequest(_) => {
                let message = self.to_string();
                tracing::debug!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(vec![message]))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(vec![msg]))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(vec!["Internal server error".to_string()])),
        )
            .into_response()
    }
}
