//! Admin domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Admin domain entity.
///
/// Deliberately not `Serialize`: responses go through [`AdminRecord`] or
/// [`AdminResponse`], neither of which carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: String,
    pub enabled: bool,
    /// Soft delete marker
    pub removed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Redacted projection returned by single-record operations
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminResponse {
    /// Unique admin identifier
    #[serde(rename = "_id")]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    pub enabled: bool,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "Lovelace")]
    pub surname: Option<String>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            enabled: admin.enabled,
            email: admin.email,
            name: admin.name,
            surname: admin.surname,
        }
    }
}

impl From<&Identity> for AdminResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            enabled: identity.enabled,
            email: identity.email.clone(),
            name: identity.name.clone(),
            surname: identity.surname.clone(),
        }
    }
}

/// Full record as returned by list and search (password never included)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdminRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: String,
    pub enabled: bool,
    pub removed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<Admin> for AdminRecord {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            surname: admin.surname,
            role: admin.role,
            enabled: admin.enabled,
            removed: admin.removed,
            created: admin.created,
            updated: admin.updated,
        }
    }
}

/// Already-authenticated caller, resolved outside the admin service
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: String,
    pub enabled: bool,
}

impl From<Admin> for Identity {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            surname: admin.surname,
            role: admin.role,
            enabled: admin.enabled,
        }
    }
}

/// Admin creation payload.
///
/// Email and password are optional at the type level so the service can
/// report "missing" before any other rule.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateAdmin {
    #[schema(example = "admin@example.com")]
    pub email: Option<String>,
    /// Plain password (minimum 8 characters)
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: Option<String>,
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "Lovelace")]
    pub surname: Option<String>,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    #[schema(example = "admin")]
    pub role: Option<String>,
    pub enabled: Option<bool>,
}

/// Admin update payload. Only these four fields are ever applied;
/// anything else in the request body is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAdmin {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@example.com")]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    #[schema(example = "admin")]
    pub role: Option<String>,
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "Lovelace")]
    pub surname: Option<String>,
}

/// Password change payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePassword {
    #[schema(example = "NewSecurePass123!", min_length = 8)]
    pub password: Option<String>,
}

/// Insert data handed to the repository (password already hashed)
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: String,
    pub enabled: bool,
}

/// Profile field changes handed to the repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminChanges {
    pub email: Option<String>,
    pub role: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl From<UpdateAdmin> for AdminChanges {
    fn from(input: UpdateAdmin) -> Self {
        Self {
            email: input.email,
            role: input.role,
            name: input.name,
            surname: input.surname,
        }
    }
}
