//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Demo API                           │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                    │
//! │         │                                                               │
//! │         ├── Bad JSON body ────────────── ApiError::invalid_input()     │
//! │         ├── CalculatorError ──┐                                        │
//! │         ├── UserError ────────┼──────── From<..> for ApiError          │
//! │         └── CoreError ────────┘              │                          │
//! │                                              ▼                          │
//! │                          HTTP 400 / 404 { "error": "...", "code": ... } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use cicd_demo_core::{CalculatorError, CoreError, UserError};

/// Message used for request bodies that fail the boundary checks.
pub const INVALID_INPUT: &str = "Invalid input";

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body or path failed boundary validation (400)
    InvalidInput,

    /// Calculator rejected the operands (400)
    CalculationError,

    /// User fields failed validation (400)
    ValidationError,

    /// Email already taken (400)
    DuplicateEmail,

    /// Resource not found (404)
    NotFound,
}

/// JSON body of every error response.
///
/// ```json
/// { "error": "User not found", "code": "NOT_FOUND" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

/// HTTP API error.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates the generic "Invalid input" error.
    pub fn invalid_input() -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, INVALID_INPUT)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, code = ?self.code, message = %self.message, "Request failed");
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Converts calculator errors to API errors.
impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        match err {
            // Operand type failures surface with the boundary's message.
            CalculatorError::InvalidArgumentType => ApiError::invalid_input(),
            CalculatorError::DivisionByZero | CalculatorError::UnknownOperation(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::CalculationError, err.to_string())
            }
        }
    }
}

/// Converts user store errors to API errors.
impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) => ApiError::not_found(message),
            UserError::DuplicateEmail { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::DuplicateEmail, message)
            }
            UserError::InvalidId(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, message)
            }
            UserError::MissingField | UserError::InvalidEmailFormat => {
                ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationError, message)
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Calculator(e) => e.into(),
            CoreError::User(e) => e.into(),
        }
    }
}
