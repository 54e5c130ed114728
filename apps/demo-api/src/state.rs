//! # Application State
//!
//! Shared state handed to every axum handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   UsersState     │  │    ApiConfig     │  │   Process clock      │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  Arc (read-only) │  │  started_at          │  │
//! │  │    UserStore>>   │  │                  │  │  (uptime, deployed)  │  │
//! │  │                  │  │                  │  │  ProcessMonitor      │  │
//! │  │                  │  │                  │  │  (memory)            │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • UsersState: one lock acquisition per store operation, so            │
//! │    check-then-append and find-then-mutate are atomic                   │
//! │  • ApiConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use cicd_demo_core::UserStore;

use crate::config::ApiConfig;
use crate::process::ProcessMonitor;

/// Mutex-guarded user store.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    store: Arc<Mutex<UserStore>>,
}

impl UsersState {
    pub fn new(store: UserStore) -> Self {
        UsersState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&UserStore) -> R,
    {
        // Store operations validate before mutating, so a poisoned guard
        // still holds a consistent store.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ```rust,ignore
    /// let user = users.with_store_mut(|store| store.create(&name, &email))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut UserStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

/// State shared by all routes.
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: UsersState,
    pub config: Arc<ApiConfig>,
    pub process: Arc<ProcessMonitor>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl AppState {
    /// Creates state with a freshly seeded user store.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, UserStore::new())
    }

    pub fn with_store(config: ApiConfig, store: UserStore) -> Self {
        AppState {
            users: UsersState::new(store),
            config: Arc::new(config),
            process: Arc::new(ProcessMonitor::new()),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Time since the state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Wall-clock time at which the state was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at_utc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_store() {
        let state = AppState::new(ApiConfig::default());
        let clone = state.clone();

        clone
            .users
            .with_store_mut(|store| store.create("Carol", "carol@example.com"))
            .unwrap();

        assert_eq!(state.users.with_store(UserStore::len), 3);
    }

    #[test]
    fn test_concurrent_creates_keep_emails_unique() {
        let users = UsersState::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let users = users.clone();
                std::thread::spawn(move || {
                    users.with_store_mut(|store| store.create("Racer", "race@example.com"))
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(created, 1);
        assert_eq!(users.with_store(UserStore::len), 3);
    }
}
