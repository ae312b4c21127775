//! User CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{User, UserId};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Body of create and update requests
///
/// Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().map_or(0, |id| id.value()),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Confirmation body for deletes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the `/users` router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::parse(raw).map_err(|_| ApiError::bad_request("Invalid user ID"))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(email = %payload.email, "Creating user");

    let request = CreateUserRequest {
        name: payload.name,
        email: payload.email,
    };

    let user = state
        .user_service
        .create(request)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create user"))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Listing users");

    let users = state
        .user_service
        .list()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch users"))?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Getting user");

    let user = state
        .user_service
        .get(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch user"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{id}
///
/// Empty fields are left unchanged.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Updating user");

    let request = UpdateUserRequest {
        name: payload.name,
        email: payload.email,
    };

    let user = state
        .user_service
        .update(id, request)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update user"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(user_id = %id, "Deleting user");

    state
        .user_service
        .delete(id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete user"))?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
