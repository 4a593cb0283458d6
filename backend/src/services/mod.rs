//! Collaborator contracts consumed by the handlers.
//!
//! Business rules and storage live behind these traits. Handlers hold them as
//! `Arc<dyn ...>` so any implementation can be injected, including the
//! in-process [`memory::MemoryBackend`] and hand-written test doubles.

pub mod memory;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::role::{CreateRole, Permission, Role};
use crate::models::user::{UpdateUser, User};

#[async_trait]
pub trait RoleService: Send + Sync {
    /// Persist a new role; the returned role carries its assigned id.
    async fn create_role(&self, input: &CreateRole) -> Result<Role, AppError>;

    async fn get_permissions_by_role(&self, role_id: i64) -> Result<Vec<Permission>, AppError>;

    /// Replace the role's permission set and return the resulting permissions.
    async fn update_permissions(
        &self,
        role_id: i64,
        permission_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Permission>, AppError>;
}

/// Clinical-history counters.
#[async_trait]
pub trait HistoryService: Send + Sync {
    async fn count_patients_served(&self) -> Result<u64, AppError>;

    async fn count_vaccinations_today(&self) -> Result<u64, AppError>;
}

/// Appointment counters.
#[async_trait]
pub trait VisitService: Send + Sync {
    async fn count_appointments_today(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<User>, AppError>;

    /// `Ok(None)` when no user has this id.
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn update_user(&self, id: i64, update: &UpdateUser) -> Result<User, AppError>;
}
