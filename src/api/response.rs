//! Response types for the hour engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the period balance response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PeriodBalance, PeriodBounds};
use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        // 204 responses must not carry a body.
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigAbsent => ApiErrorResponse {
                status: StatusCode::NO_CONTENT,
                error: ApiError::new("CONFIG_ABSENT", "No active closure configuration"),
            },
            EngineError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid {}: {}", field, message),
                    "The request contains invalid information",
                ),
            },
            EngineError::EntryNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ENTRY_NOT_FOUND",
                    format!("Hour entry not found: {}", id),
                    "No hour entry exists with the requested id",
                ),
            },
            EngineError::AdjustmentNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ADJUSTMENT_NOT_FOUND",
                    format!("Hour adjustment not found: {}", id),
                    "No hour adjustment exists with the requested id",
                ),
            },
        }
    }
}

/// Response body for the period balance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodBalanceResponse {
    /// First day of the resolved closure period.
    pub period_start: NaiveDate,
    /// Last day of the resolved closure period.
    pub period_end: NaiveDate,
    /// Sum of worked hours inside the period.
    pub total_worked: Decimal,
    /// Sum of adjustment deltas inside the period.
    pub total_adjusted: Decimal,
    /// Worked hours plus adjustment deltas.
    pub balance: Decimal,
}

impl PeriodBalanceResponse {
    /// Flattens period bounds and a computed balance into one body.
    pub fn new(bounds: &PeriodBounds, balance: &PeriodBalance) -> Self {
        Self {
            period_start: bounds.start,
            period_end: bounds.end,
            total_worked: balance.total_worked,
            total_adjusted: balance.total_adjusted,
            balance: balance.balance,
        }
    }
}
