//! User routes: listing, lookup and partial update.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::user::{UpdateUser, User};
use crate::AppState;

/// GET /api/usuarios
pub async fn list(State(state): State<AppState>) -> Result<Reply<Vec<User>>, AppError> {
    state.users.get_all_users().await
}

/// GET /api/usuarios/{id} — 404 with an empty body when the user is unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Reply<User>, AppError> {
    state.users.get_user_by_id(id).await
}

/// PUT /api/usuarios/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUser>,
) -> Result<Reply<User>, AppError> {
    state.users.update_user(id, body).await
}
