//! # User Store
//!
//! Ordered, in-memory collection of user records.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    UserStore Operations                                 │
//! │                                                                         │
//! │  Operation        Checks (in order)                 State Change        │
//! │  ─────────        ─────────────────                 ────────────        │
//! │                                                                         │
//! │  create() ──────► fields → '@' → unique email ────► users.push(user)   │
//! │                                                     next_id += 1        │
//! │                                                                         │
//! │  update() ──────► exists → '@' (if email given) ──► merge in place     │
//! │                                                                         │
//! │  delete() ──────► exists ─────────────────────────► users.remove(i)    │
//! │                                                                         │
//! │  all() / get() ─► none ───────────────────────────► (read only)        │
//! │                                                                         │
//! │  reset() ───────► none ───────────────────────────► seeds, next_id = 3 │
//! │                                                                         │
//! │  NOTE: every check runs before the first mutation.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is preserved; update never reorders.
//! - Ids are never reused, even after delete.
//! - Emails are unique at creation time, compared trimmed and lowercased.
//!
//! `update` neither normalizes nor re-checks uniqueness of a new email. The
//! asymmetry with `create` is intentional and covered by tests.
//!
//! The store has no internal locking. Hosts that share one across threads
//! wrap it in a mutex and run each operation under a single lock.

use crate::error::{UserError, UserResult};
use crate::types::{User, UserId, UserUpdate};
use crate::validation::{normalize_email, normalize_name, require_fields, validate_email_format};
use crate::FIRST_ASSIGNED_ID;

/// The records every fresh or reset store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice@example.com"),
        User::new(2, "Bob Smith", "bob@example.com"),
    ]
}

/// In-memory user collection with an id counter.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: UserId,
}

impl UserStore {
    /// Creates a store holding the two seed records.
    pub fn new() -> Self {
        UserStore {
            users: seed_users(),
            next_id: FIRST_ASSIGNED_ID,
        }
    }

    /// Returns a snapshot of every record in insertion order.
    ///
    /// The returned vector is an owned copy; changing it has no effect on the
    /// store.
    pub fn all(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Looks up a record by id. `None` means not found.
    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Creates a record and returns it.
    ///
    /// ## Errors
    /// - [`UserError::MissingField`] if name or email is blank
    /// - [`UserError::InvalidEmailFormat`] if email has no `@`
    /// - [`UserError::DuplicateEmail`] if the normalized email is taken
    pub fn create(&mut self, name: &str, email: &str) -> UserResult<User> {
        require_fields(name, email)?;
        validate_email_format(email)?;

        let email = normalize_email(email);
        if self.users.iter().any(|u| u.email == email) {
            return Err(UserError::DuplicateEmail { email });
        }

        let user = User::new(self.next_id, normalize_name(name), email);
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    /// Merges `changes` over an existing record and returns the result.
    ///
    /// Fields are stored exactly as given.
    ///
    /// ## Errors
    /// - [`UserError::NotFound`] if no record has `id`
    /// - [`UserError::InvalidEmailFormat`] if a new email has no `@`
    pub fn update(&mut self, id: UserId, changes: UserUpdate) -> UserResult<User> {
        let index = self.position(id)?;

        if let Some(email) = changes.email.as_deref() {
            validate_email_format(email)?;
        }

        let user = &mut self.users[index];
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        Ok(user.clone())
    }

    /// Removes a record and returns it.
    ///
    /// ## Errors
    /// - [`UserError::NotFound`] if no record has `id`
    pub fn delete(&mut self, id: UserId) -> UserResult<User> {
        let index = self.position(id)?;
        Ok(self.users.remove(index))
    }

    /// Restores the seed records and the id counter.
    ///
    /// Meant for test isolation; nothing in the HTTP surface calls it.
    pub fn reset(&mut self) {
        self.users = seed_users();
        self.next_id = FIRST_ASSIGNED_ID;
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn position(&self, id: UserId) -> UserResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound(id))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
