//! System users and the new-user form draft.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::store::Record;

/// Access role of a system user.
///
/// Roles are data only; nothing in the app enforces authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Guest];

    /// Label shown on the screens.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::User => "Usuario",
            Role::Guest => "Invitado",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        };
        f.write_str(s)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "guest" => Ok(Role::Guest),
            _ => Err(()),
        }
    }
}

/// A system user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    // Searchable fields: name and email.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// Uncommitted state of the new-user form.
///
/// Field values are raw input text; `build` validates them and
/// produces the record to append. The id is assigned by the caller
/// since the form does not collect one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: String,
}

impl UserDraft {
    pub fn build(&self, id: String) -> Result<User, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "El nombre es obligatorio");
        }
        if self.email.trim().is_empty() {
            errors.push("email", "El email es obligatorio");
        } else if !self.email.contains('@') {
            errors.push("email", "El email no es válido");
        }
        let role = match self.role.parse::<Role>() {
            Ok(role) => Some(role),
            Err(()) => {
                errors.push("role", "Seleccione un rol");
                None
            }
        };
        if self.permissions.trim().is_empty() {
            errors.push("permissions", "Los permisos son obligatorios");
        }

        errors.into_result()?;
        Ok(User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            // Validated above.
            role: role.unwrap_or(Role::Guest),
            permissions: self.permissions.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> UserDraft {
        UserDraft {
            name: "Laura Rodríguez".to_string(),
            email: "laura@petmanager.com".to_string(),
            role: "user".to_string(),
            permissions: "ventas".to_string(),
        }
    }

    #[test]
    fn test_build_valid_draft() {
        let user = draft().build("8".to_string()).unwrap();

        assert_eq!(user.id, "8");
        assert_eq!(user.name, "Laura Rodríguez");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_build_rejects_empty_fields() {
        let err = UserDraft::default().build("8".to_string()).unwrap_err();

        assert!(err.get("name").is_some());
        assert!(err.get("email").is_some());
        assert!(err.get("role").is_some());
        assert!(err.get("permissions").is_some());
    }

    #[test]
    fn test_build_rejects_malformed_email() {
        let mut d = draft();
        d.email = "not-an-email".to_string();

        let err = d.build("8".to_string()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.get("email").is_some());
    }

    #[test]
    fn test_build_trims_whitespace() {
        let mut d = draft();
        d.name = "  Laura  ".to_string();

        let user = d.build("8".to_string()).unwrap();
        assert_eq!(user.name, "Laura");
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("superadmin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn test_user_matches_name_and_email() {
        let user = draft().build("8".to_string()).unwrap();

        assert!(user.matches("rodríguez"));
        assert!(user.matches("petmanager"));
        assert!(!user.matches("garcía"));
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let user = draft().build("8".to_string()).unwrap();

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
