//! # Validation Module
//!
//! Input normalization and precondition checks for user records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (demo-api)                                     │
//! │  ├── JSON deserialization                                              │
//! │  └── parse_user_id for path segments                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── require_fields       → MissingField                              │
//! │  ├── validate_email_format → InvalidEmailFormat                        │
//! │  └── normalize_name / normalize_email                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: UserStore                                                    │
//! │  └── uniqueness + existence (needs the collection)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{UserError, UserResult};
use crate::types::UserId;

/// Checks that both name and email carry content.
///
/// Empty and whitespace-only values both count as missing.
///
/// ## Example
/// ```rust
/// use cicd_demo_core::validation::require_fields;
///
/// assert!(require_fields("John", "john@example.com").is_ok());
/// assert!(require_fields("", "john@example.com").is_err());
/// assert!(require_fields("John", "   ").is_err());
/// ```
pub fn require_fields(name: &str, email: &str) -> UserResult<()> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(UserError::MissingField);
    }
    Ok(())
}

/// Checks the (deliberately minimal) email format rule: it must contain `@`.
pub fn validate_email_format(email: &str) -> UserResult<()> {
    if !email.contains('@') {
        return Err(UserError::InvalidEmailFormat);
    }
    Ok(())
}

/// Trims surrounding whitespace from a name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Trims and lowercases an email; the form used for storage and uniqueness.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parses a user id received as text (e.g. a URL path segment).
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a base-10 integer greater than zero
/// - No sign, fraction or trailing garbage (`"12abc"` is rejected)
///
/// ## Example
/// ```rust
/// use cicd_demo_core::validation::parse_user_id;
///
/// assert_eq!(parse_user_id("42").unwrap(), 42);
/// assert!(parse_user_id("42abc").is_err());
/// assert!(parse_user_id("0").is_err());
/// ```
pub fn parse_user_id(raw: &str) -> UserResult<UserId> {
    let trimmed = raw.trim();
    let invalid = || UserError::InvalidId(raw.to_string());

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<UserId>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(id) => Ok(id),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
