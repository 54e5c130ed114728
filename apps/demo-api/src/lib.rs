//! # Demo API
//!
//! HTTP surface for the CI/CD demo: arithmetic, in-memory user CRUD, a health
//! probe and deployment metadata.
//!
//! ## Module Organization
//! ```text
//! demo_api/
//! ├── lib.rs          ◄─── You are here (tracing setup, re-exports)
//! ├── main.rs         ◄─── Binary: config, bind, graceful shutdown
//! ├── config.rs       ◄─── ApiConfig (defaults → file → env)
//! ├── state.rs        ◄─── AppState, UsersState (Arc<Mutex<UserStore>>)
//! ├── error.rs        ◄─── ApiError → { "error": ... } responses
//! ├── process.rs      ◄─── ProcessMonitor (sysinfo memory sampling)
//! └── routes/
//!     ├── mod.rs      ◄─── Router assembly, CORS + trace layers
//!     ├── meta.rs     ◄─── /, /health, /status/deployment
//!     ├── calculate.rs◄─── /calculate
//!     └── users.rs    ◄─── /users, /users/{id}
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 3000)
//! - `APP_ENV` / `NODE_ENV` - Environment name (default: development)
//! - `GITHUB_SHA` - Deployment id (default: local)
//! - `GITHUB_RUN_NUMBER` - Build number (default: 0)
//! - `DEMO_API_*` - Any config key, e.g. `DEMO_API_BIND_ADDR`
//! - `DEMO_API_CONFIG` - TOML file path (default: demo-api.toml)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod process;
pub mod routes;
pub mod state;

use tracing_subscriber::EnvFilter;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,demo_api=debug,tower_http=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=demo_api=trace` - Trace this crate only
/// - Default: INFO, DEBUG for this crate and HTTP request spans
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
