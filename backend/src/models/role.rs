//! Roles and the permissions granted through them.

use serde::{Deserialize, Serialize};

/// A role as stored by the role service. `id` is always service-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// Payload for creating a role.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRole {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// A single grantable permission, e.g. `USUARIO_READ`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permission {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn role_uses_frontend_field_names() {
        let role = Role {
            id: 1,
            name: "VETERINARIO".to_string(),
            description: "Rol de veterinario".to_string(),
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["nombre"], "VETERINARIO");
        assert_eq!(json["descripcion"], "Rol de veterinario");
    }

    #[test]
    fn create_role_description_is_optional() {
        let body: CreateRole = serde_json::from_str(r#"{"nombre":"RECEPCION"}"#).unwrap();
        assert_eq!(body.name, "RECEPCION");
        assert!(body.description.is_empty());
    }

    #[test]
    fn permission_id_set_dedupes_and_ignores_order() {
        let a: BTreeSet<i64> = serde_json::from_str("[2, 1, 2]").unwrap();
        let b: BTreeSet<i64> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}
