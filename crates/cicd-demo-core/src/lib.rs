//! # cicd-demo-core: Pure Business Logic for the CI/CD Demo API
//!
//! This crate holds everything the demo API actually *decides*: arithmetic,
//! user validation and the in-memory user store. It has zero I/O
//! dependencies; the HTTP layer in `apps/demo-api` only parses, calls in
//! here and serializes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CI/CD Demo Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 demo-api (axum routes)                          │   │
//! │  │    POST /calculate   GET|POST /users   PUT|DELETE /users/{id}   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cicd-demo-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │ calculator │  │   users    │  │ validation │  │  types  │  │   │
//! │  │   │ Operation  │  │ UserStore  │  │  email, id │  │  User   │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Enumerated binary operations with shared validation
//! - [`users`] - [`UserStore`], the ordered in-memory user collection
//! - [`validation`] - Normalization and precondition checks
//! - [`types`] - Domain types (User, UserUpdate, Calculation)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cicd_demo_core::{Operation, UserStore};
//!
//! let result = Operation::Divide.apply(10.0, 4.0).unwrap();
//! assert_eq!(result, 2.5);
//!
//! let mut store = UserStore::new();
//! let user = store.create("  John Doe  ", "  JOHN@example.com  ").unwrap();
//! assert_eq!(user.id, 3);
//! assert_eq!(user.email, "john@example.com");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod types;
pub mod users;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::Operation;
pub use error::{CalcResult, CalculatorError, CoreError, CoreResult, UserError, UserResult};
pub use types::*;
pub use users::UserStore;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First id handed out by a fresh (or reset) store.
///
/// The two seed records occupy ids 1 and 2.
pub const FIRST_ASSIGNED_ID: UserId = 3;
