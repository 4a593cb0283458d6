//! Role routes: creation and permission assignment.

use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::role::{CreateRole, Permission, Role};
use crate::AppState;

/// POST /api/roles — create a role.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateRole>,
) -> Result<Reply<Role>, AppError> {
    state.roles.create_role(body).await
}

/// GET /api/roles/{id}/permissions — permissions granted to a role.
pub async fn permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Reply<Vec<Permission>>, AppError> {
    state.roles.get_permissions_by_role(id).await
}

/// PUT /api/roles/{id}/permissions — replace a role's permission set.
pub async fn update_permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(permission_ids): Json<BTreeSet<i64>>,
) -> Result<Reply<Vec<Permission>>, AppError> {
    state.roles.update_permissions(id, permission_ids).await
}
