//! # Error Types
//!
//! Domain-specific error types for cicd-demo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cicd-demo-core errors (this file)                                     │
//! │  ├── CalculatorError  - Operand / operation failures                   │
//! │  ├── UserError        - User store precondition failures               │
//! │  └── CoreError        - Umbrella over both                             │
//! │                                                                         │
//! │  demo-api errors (app crate)                                           │
//! │  └── ApiError         - What HTTP clients see ({"error": ...})         │
//! │                                                                         │
//! │  Flow: CalculatorError | UserError → ApiError → JSON response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is raised before any mutation happens, so a failed operation
//! never leaves partial state behind.

use thiserror::Error;

use crate::types::UserId;

// =============================================================================
// Calculator Error
// =============================================================================

/// Failures of a single calculator operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// An operand was not a number.
    ///
    /// Only reachable from untyped (JSON) input; the typed `f64` API makes it
    /// impossible.
    #[error("Both arguments must be numbers")]
    InvalidArgumentType,

    /// `divide` was called with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// The operation name is not one of add/subtract/multiply/divide.
    #[error("Unsupported operation: {0}")]
    UnknownOperation(String),
}

// =============================================================================
// User Error
// =============================================================================

/// User store precondition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Name or email missing, empty or whitespace-only.
    #[error("Name and email are required")]
    MissingField,

    /// Email does not contain `@`.
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Another record already owns this (normalized) email.
    #[error("User with this email already exists")]
    DuplicateEmail { email: String },

    /// No record with this id.
    #[error("User not found")]
    NotFound(UserId),

    /// An id could not be parsed as a positive integer.
    #[error("Invalid user id: {0}")]
    InvalidId(String),
}

// =============================================================================
// Core Error
// =============================================================================

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error(transparent)]
    User(#[from] UserError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type CalcResult<T> = Result<T, CalculatorError>;

pub type UserResult<T> = Result<T, UserError>;

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
