//! Clinic staff accounts as exposed by the user service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "rolNombre")]
    pub role_name: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial update. Fields left `None` are kept as they are by the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UpdateUser {
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
}

impl User {
    /// Overwrite the fields present in `update`.
    pub fn apply(&mut self, update: &UpdateUser) {
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(first_name) = &update.first_name {
            self.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = Some(last_name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vet() -> User {
        User {
            id: 1,
            username: "veterinario1".to_string(),
            email: "vet1@test.com".to_string(),
            role_name: "VETERINARIO".to_string(),
            active: true,
            first_name: None,
            last_name: None,
        }
    }

    #[test]
    fn user_serialization_omits_missing_names() {
        let json = serde_json::to_value(vet()).unwrap();
        assert_eq!(json["nombreUsuario"], "veterinario1");
        assert_eq!(json["rolNombre"], "VETERINARIO");
        assert_eq!(json["activo"], true);
        assert!(json.get("nombre").is_none());
    }

    #[test]
    fn update_with_only_email_keeps_other_fields() {
        let mut user = vet();
        user.first_name = Some("Ana".to_string());
        let update: UpdateUser =
            serde_json::from_str(r#"{"correo":"vet1_updated@test.com"}"#).unwrap();

        user.apply(&update);

        assert_eq!(user.email, "vet1_updated@test.com");
        assert_eq!(user.first_name.as_deref(), Some("Ana"));
        assert_eq!(user.username, "veterinario1");
    }
}
