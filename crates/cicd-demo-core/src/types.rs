//! # Domain Types
//!
//! Core domain types shared by the store, the calculator and the HTTP layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │      User       │   │   UserUpdate    │   │    Calculation      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (u64)       │   │  name?          │   │  result             │   │
//! │  │  name           │   │  email?         │   │  operation          │   │
//! │  │  email (lower)  │   │  (no id!)       │   │  inputs { a, b }    │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::Operation;

/// Identifier of a user record.
///
/// Assigned by the store from a monotonically increasing counter and never
/// reused within the store's lifetime.
pub type UserId = u64;

// =============================================================================
// User
// =============================================================================

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Sequential identifier.
    #[ts(type = "number")]
    pub id: UserId,

    /// Display name, trimmed on create.
    pub name: String,

    /// Email, trimmed and lowercased on create. Unique at creation time.
    pub email: String,
}

impl User {
    /// Builds a record from already-normalized parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// User Update
// =============================================================================

/// Partial set of fields to merge over an existing user.
///
/// Absent fields keep their current value. There is deliberately no `id`
/// field: an update can never re-key a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,
}

impl UserUpdate {
    /// Update touching only the name.
    pub fn name(name: impl Into<String>) -> Self {
        UserUpdate {
            name: Some(name.into()),
            email: None,
        }
    }

    /// Update touching only the email.
    pub fn email(email: impl Into<String>) -> Self {
        UserUpdate {
            name: None,
            email: Some(email.into()),
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Operands echoed back alongside a calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationInputs {
    pub a: f64,
    pub b: f64,
}

/// Outcome of a successful calculator call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Calculation {
    pub result: f64,
    pub operation: Operation,
    pub inputs: CalculationInputs,
}
