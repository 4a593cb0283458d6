//! Role management: creation and permission assignment.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::AppError;
use crate::handlers::Reply;
use crate::models::role::{CreateRole, Permission, Role};
use crate::services::RoleService;

#[derive(Clone)]
pub struct RoleHandler {
    roles: Arc<dyn RoleService>,
}

impl RoleHandler {
    pub fn new(roles: Arc<dyn RoleService>) -> Self {
        Self { roles }
    }

    pub async fn create_role(&self, input: CreateRole) -> Result<Reply<Role>, AppError> {
        let role = self.roles.create_role(&input).await?;
        tracing::info!(role_id = role.id, name = %role.name, "Role created");
        Ok(Reply::created(role))
    }

    /// An empty list is a normal answer, not a miss.
    pub async fn get_permissions_by_role(
        &self,
        role_id: i64,
    ) -> Result<Reply<Vec<Permission>>, AppError> {
        let permissions = self.roles.get_permissions_by_role(role_id).await?;
        tracing::debug!(role_id, count = permissions.len(), "Fetched role permissions");
        Ok(Reply::ok(permissions))
    }

    /// Returns the role's full permission list after the update.
    pub async fn update_permissions(
        &self,
        role_id: i64,
        permission_ids: BTreeSet<i64>,
    ) -> Result<Reply<Vec<Permission>>, AppError> {
        let permissions = self
            .roles
            .update_permissions(role_id, &permission_ids)
            .await?;
        tracing::info!(role_id, count = permissions.len(), "Role permissions updated");
        Ok(Reply::ok(permissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Status;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRoleService {
        permissions: Vec<Permission>,
        create_calls: AtomicUsize,
        get_calls: AtomicUsize,
        update_calls: Mutex<Vec<(i64, BTreeSet<i64>)>>,
    }

    #[async_trait]
    impl RoleService for MockRoleService {
        async fn create_role(&self, input: &CreateRole) -> Result<Role, AppError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Role {
                id: 1,
                name: input.name.clone(),
                description: input.description.clone(),
            })
        }

        async fn get_permissions_by_role(&self, role_id: i64) -> Result<Vec<Permission>, AppError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if role_id == 1 {
                Ok(self.permissions.clone())
            } else {
                Ok(Vec::new())
            }
        }

        async fn update_permissions(
            &self,
            role_id: i64,
            permission_ids: &BTreeSet<i64>,
        ) -> Result<Vec<Permission>, AppError> {
            self.update_calls
                .lock()
                .unwrap()
                .push((role_id, permission_ids.clone()));
            if role_id != 1 {
                return Err(AppError::NotFound(format!("Role {role_id} not found")));
            }
            Ok(self.permissions.clone())
        }
    }

    fn usuario_read() -> Permission {
        Permission {
            id: 1,
            name: "USUARIO_READ".to_string(),
        }
    }

    fn handler_with(service: Arc<MockRoleService>) -> RoleHandler {
        RoleHandler::new(service)
    }

    #[tokio::test]
    async fn create_role_returns_created() {
        let service = Arc::new(MockRoleService::default());
        let handler = handler_with(service.clone());

        let reply = handler
            .create_role(CreateRole {
                name: "VETERINARIO".to_string(),
                description: "Rol de veterinario".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply.status, Status::Created);
        let role = reply.body.unwrap();
        assert_eq!(role.name, "VETERINARIO");
        assert_eq!(role.id, 1);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_permissions_by_role_passes_list_through() {
        let service = Arc::new(MockRoleService {
            permissions: vec![usuario_read()],
            ..Default::default()
        });
        let handler = handler_with(service.clone());

        let reply = handler.get_permissions_by_role(1).await.unwrap();

        assert_eq!(reply.status, Status::Ok);
        let permissions = reply.body.unwrap();
        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].name, "USUARIO_READ");
        assert_eq!(service.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_permission_list_is_ok() {
        let handler = handler_with(Arc::new(MockRoleService::default()));
        let reply = handler.get_permissions_by_role(5).await.unwrap();
        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.body, Some(Vec::new()));
    }

    #[tokio::test]
    async fn update_permissions_returns_new_state() {
        let service = Arc::new(MockRoleService {
            permissions: vec![
                usuario_read(),
                Permission {
                    id: 2,
                    name: "USUARIO_WRITE".to_string(),
                },
            ],
            ..Default::default()
        });
        let handler = handler_with(service.clone());

        let reply = handler
            .update_permissions(1, BTreeSet::from([2, 1]))
            .await
            .unwrap();

        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.body.unwrap().len(), 2);
        let calls = service.update_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (1, BTreeSet::from([1, 2])));
    }

    #[tokio::test]
    async fn collaborator_errors_propagate() {
        let handler = handler_with(Arc::new(MockRoleService::default()));
        let err = handler
            .update_permissions(9, BTreeSet::from([1]))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
