//! HTTP routes.
//!
//! ```text
//! GET    /                    meta::info
//! GET    /health              meta::health
//! GET    /status/deployment   meta::deployment
//! POST   /calculate           calculate::calculate
//! GET    /users               users::list_users
//! POST   /users               users::create_user
//! GET    /users/{id}          users::get_user
//! PUT    /users/{id}          users::update_user
//! DELETE /users/{id}          users::delete_user
//! ```

pub mod calculate;
pub mod meta;
pub mod users;

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the application router with all routes and layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::info))
        .route("/health", get(meta::health))
        .route("/status/deployment", get(meta::deployment))
        .route("/calculate", post(calculate::calculate))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route not found: {}", uri.path()))
}
