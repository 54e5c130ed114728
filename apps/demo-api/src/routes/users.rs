//! User CRUD routes.
//!
//! Every handler runs exactly one store operation under the store lock.
//! Path ids go through [`parse_user_id`], so `/users/1abc` is a 400, not a
//! lookup of user 1.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cicd_demo_core::validation::parse_user_id;
use cicd_demo_core::{User, UserError, UserUpdate};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Body of `POST /users`. Absent fields are treated like empty ones.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response of `GET /users`.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub count: usize,
}

/// Response carrying a single user, with an optional confirmation message.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Unwraps a JSON body. A request that is not declared as JSON carries no
/// fields, so it reads as an empty payload; malformed JSON is invalid input.
fn body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(inner)) => Ok(inner),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            debug!(%rejection, "Rejected request body");
            Err(ApiError::invalid_input())
        }
    }
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    let users = state.users.with_store(|store| store.all());
    let count = users.len();
    Json(UserListResponse { users, count })
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let payload = body(payload)?;
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    let user = state
        .users
        .with_store_mut(|store| store.create(&name, &email))?;
    info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user,
            message: Some("User created successfully"),
        }),
    ))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_user_id(&raw_id)?;
    let user = state
        .users
        .with_store(|store| store.get(id))
        .ok_or(UserError::NotFound(id))?;

    Ok(Json(UserResponse {
        user,
        message: None,
    }))
}

/// `PUT /users/{id}`: partial update, absent fields are kept.
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_user_id(&raw_id)?;
    let changes = body(payload)?;

    let user = state
        .users
        .with_store_mut(|store| store.update(id, changes))?;
    info!(user_id = user.id, "User updated");

    Ok(Json(UserResponse {
        user,
        message: Some("User updated successfully"),
    }))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_user_id(&raw_id)?;
    let user = state.users.with_store_mut(|store| store.delete(id))?;
    info!(user_id = user.id, "User deleted");

    Ok(Json(UserResponse {
        user,
        message: Some("User deleted successfully"),
    }))
}
