// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Terminal outcome of the ownership gate.
///
/// Every variant carries a fixed caller-facing message. Collaborator faults
/// are logged where they happen and collapse into `Internal` so their
/// details never reach the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// No resolved actor on the request
    #[error("You must be logged in")]
    Unauthenticated,
    /// No product identifier on the request
    #[error("Product ID is required")]
    BadRequest,
    /// Lookup found no product
    #[error("Product not found")]
    NotFound,
    /// Actor is neither seller nor administrator
    #[error("You are not authorized to modify this product")]
    Forbidden,
    /// Lookup collaborator failed
    #[error("An error occurred")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    error_code: String,
}

impl GateError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            GateError::Unauthenticated => "unauthenticated",
            GateError::BadRequest => "bad_request",
            GateError::NotFound => "not_found",
            GateError::Forbidden => "forbidden",
            GateError::Internal => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::Unauthenticated => StatusCode::UNAUTHORIZED,
            GateError::BadRequest => StatusCode::BAD_REQUEST,
            GateError::NotFound => StatusCode::NOT_FOUND,
            GateError::Forbidden => StatusCode::FORBIDDEN,
            GateError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

/// Error returned by host API handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn error_code(&self) -> &'static str {
        match self.status {
            StatusCode::NOT_FOUND => "not_found",
            StatusCode::BAD_REQUEST => "bad_request",
            s if s.is_server_error() => "internal_error",
            _ => "request_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error_code: self.error_code().to_string(),
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
