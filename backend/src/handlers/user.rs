//! Staff user listing, lookup and partial update.

use std::sync::Arc;

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::user::{UpdateUser, User};
use crate::services::UserService;

#[derive(Clone)]
pub struct UserHandler {
    users: Arc<dyn UserService>,
}

impl UserHandler {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }

    pub async fn get_all_users(&self) -> Result<Reply<Vec<User>>, AppError> {
        let users = self.users.get_all_users().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(Reply::ok(users))
    }

    /// A miss is answered with `Status::NotFound` and no body.
    pub async fn get_user_by_id(&self, id: i64) -> Result<Reply<User>, AppError> {
        match self.users.get_user_by_id(id).await? {
            Some(user) => Ok(Reply::ok(user)),
            None => {
                tracing::debug!(user_id = id, "User not found");
                Ok(Reply::not_found())
            }
        }
    }

    pub async fn update_user(&self, id: i64, update: UpdateUser) -> Result<Reply<User>, AppError> {
        let user = self.users.update_user(id, &update).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(Reply::ok(user))
    }
}
