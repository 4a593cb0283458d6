//! In-process implementation of every collaborator trait.
//!
//! Backs the development server and the HTTP tests. Nothing is durable: the
//! store lives as long as the process.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::errors::AppError;
use crate::models::role::{CreateRole, Permission, Role};
use crate::models::user::{UpdateUser, User};
use crate::services::{HistoryService, RoleService, UserService, VisitService};

/// Kind of clinical-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Consultation,
    Vaccination,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    patient_id: i64,
    kind: EntryKind,
    date: NaiveDate,
}

#[derive(Debug, Clone)]
struct Visit {
    date: NaiveDate,
}

#[derive(Debug, Default)]
struct Store {
    last_role_id: i64,
    last_permission_id: i64,
    last_user_id: i64,
    roles: BTreeMap<i64, Role>,
    permissions: BTreeMap<i64, Permission>,
    role_permissions: HashMap<i64, BTreeSet<i64>>,
    users: BTreeMap<i64, User>,
    history: Vec<HistoryEntry>,
    visits: Vec<Visit>,
}

fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: RwLock<Store>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with a small clinic: permission catalogue, two roles,
    /// two staff accounts and today's activity.
    pub fn seeded() -> Self {
        let backend = Self::new();
        if let Err(e) = backend.seed() {
            tracing::warn!(error = %e, "Failed to seed demo data");
        }
        backend
    }

    fn seed(&self) -> Result<(), AppError> {
        let read = self.add_permission("USUARIO_READ")?;
        let write = self.add_permission("USUARIO_WRITE")?;
        let stats = self.add_permission("STATS_READ")?;

        let vet = self.insert_role("VETERINARIO", "Rol de veterinario")?;
        let admin = self.insert_role("ADMIN", "Administrador de la clinica")?;
        {
            let mut store = self.write()?;
            store
                .role_permissions
                .insert(vet.id, BTreeSet::from([read.id, stats.id]));
            store
                .role_permissions
                .insert(admin.id, BTreeSet::from([read.id, write.id, stats.id]));
        }

        self.add_user("admin", "admin@clinica.test", &admin.name)?;
        self.add_user("veterinario1", "vet1@clinica.test", &vet.name)?;

        let day = today();
        self.record_history(1, EntryKind::Consultation, day)?;
        self.record_history(1, EntryKind::Vaccination, day)?;
        self.record_history(2, EntryKind::Vaccination, day)?;
        self.schedule_visit(day)?;
        self.schedule_visit(day)?;

        tracing::info!("Seeded demo clinic data");
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".to_string()))
    }

    /// Add an entry to the permission catalogue.
    pub fn add_permission(&self, name: &str) -> Result<Permission, AppError> {
        let mut store = self.write()?;
        let permission = Permission {
            id: next_id(&mut store.last_permission_id),
            name: name.to_string(),
        };
        store.permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    pub fn add_user(&self, username: &str, email: &str, role_name: &str) -> Result<User, AppError> {
        let mut store = self.write()?;
        let user = User {
            id: next_id(&mut store.last_user_id),
            username: username.to_string(),
            email: email.to_string(),
            role_name: role_name.to_string(),
            active: true,
            first_name: None,
            last_name: None,
        };
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn record_history(
        &self,
        patient_id: i64,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        self.write()?.history.push(HistoryEntry {
            patient_id,
            kind,
            date,
        });
        Ok(())
    }

    pub fn schedule_visit(&self, date: NaiveDate) -> Result<(), AppError> {
        self.write()?.visits.push(Visit { date });
        Ok(())
    }

    fn insert_role(&self, name: &str, description: &str) -> Result<Role, AppError> {
        let mut store = self.write()?;
        if store
            .roles
            .values()
            .any(|r| r.name.eq_ignore_ascii_case(name))
        {
            return Err(AppError::Conflict(format!("Role '{name}' already exists")));
        }
        let role = Role {
            id: next_id(&mut store.last_role_id),
            name: name.to_string(),
            description: description.to_string(),
        };
        store.roles.insert(role.id, role.clone());
        store.role_permissions.insert(role.id, BTreeSet::new());
        Ok(role)
    }
}

fn permissions_of(store: &Store, role_id: i64) -> Result<Vec<Permission>, AppError> {
    let ids = store
        .role_permissions
        .get(&role_id)
        .ok_or_else(|| AppError::NotFound(format!("Role {role_id} not found")))?;
    Ok(ids
        .iter()
        .filter_map(|id| store.permissions.get(id).cloned())
        .collect())
}

#[async_trait]
impl RoleService for MemoryBackend {
    async fn create_role(&self, input: &CreateRole) -> Result<Role, AppError> {
        let role = self.insert_role(&input.name, &input.description)?;
        tracing::debug!(role_id = role.id, name = %role.name, "Stored role");
        Ok(role)
    }

    async fn get_permissions_by_role(&self, role_id: i64) -> Result<Vec<Permission>, AppError> {
        permissions_of(&*self.read()?, role_id)
    }

    async fn update_permissions(
        &self,
        role_id: i64,
        permission_ids: &BTreeSet<i64>,
    ) -> Result<Vec<Permission>, AppError> {
        let mut store = self.write()?;
        if !store.roles.contains_key(&role_id) {
            return Err(AppError::NotFound(format!("Role {role_id} not found")));
        }
        if let Some(unknown) = permission_ids
            .iter()
            .find(|id| !store.permissions.contains_key(*id))
        {
            return Err(AppError::Validation(format!(
                "Unknown permission id {unknown}"
            )));
        }
        store
            .role_permissions
            .insert(role_id, permission_ids.clone());
        permissions_of(&store, role_id)
    }
}

#[async_trait]
impl HistoryService for MemoryBackend {
    async fn count_patients_served(&self) -> Result<u64, AppError> {
        let store = self.read()?;
        let patients: HashSet<i64> = store.history.iter().map(|e| e.patient_id).collect();
        Ok(patients.len() as u64)
    }

    async fn count_vaccinations_today(&self) -> Result<u64, AppError> {
        let day = today();
        let store = self.read()?;
        Ok(store
            .history
            .iter()
            .filter(|e| e.kind == EntryKind::Vaccination && e.date == day)
            .count() as u64)
    }
}

#[async_trait]
impl VisitService for MemoryBackend {
    async fn count_appointments_today(&self) -> Result<u64, AppError> {
        let day = today();
        Ok(self.read()?.visits.iter().filter(|v| v.date == day).count() as u64)
    }
}

#[async_trait]
impl UserService for MemoryBackend {
    async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn update_user(&self, id: i64, update: &UpdateUser) -> Result<User, AppError> {
        let mut store = self.write()?;
        let user = store
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
        user.apply(update);
        Ok(user.clone())
    }
}
