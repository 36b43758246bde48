//! # API Error Type
//!
//! Unified error type for route handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Basket                            │
//! │                                                                     │
//! │  Handler ──► CartError::InvalidOrder   ──► 400 INVALID_ORDER        │
//! │          ──► CartError::ItemNotInCart  ──► 400 ITEM_NOT_IN_CART     │
//! │          ──► anything unexpected       ──► 500 INTERNAL             │
//! │                                                                     │
//! │  Body on every error:                                               │
//! │    { "code": "INVALID_ORDER", "message": "order contains ..." }     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain errors are the client's problem (bad request); everything else is
//! a defect and gets a deliberately vague 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use basket_core::CartError;

/// API error returned from route handlers.
///
/// ## Serialization
/// This is the JSON body a client receives on failure:
/// ```json
/// {
///   "code": "ITEM_NOT_IN_CART",
///   "message": "item 2 is not in the cart, so it cannot be removed"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The order request could not be acted on (400).
    InvalidOrder,

    /// Remove was requested for an item the cart does not hold (400).
    ItemNotInCart,

    /// Unexpected failure (500).
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidOrder | ErrorCode::ItemNotInCart => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts cart domain errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::InvalidOrder => ErrorCode::InvalidOrder,
            CartError::ItemNotInCart { .. } => ErrorCode::ItemNotInCart,
        };
        ApiError::new(code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::Internal {
            // Log the detail, return a generic message.
            tracing::error!(message = %self.message, "internal error");
            let body = ApiError::internal("an unexpected problem occurred");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
