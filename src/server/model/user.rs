//! User domain models and parameters.
//!
//! Provides the account model with its bcrypt password hash and admin flag, plus the
//! parameter types used when registering drivers and seeding the admin account.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterDto, UserDto};

/// Registered account.
///
/// The password hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Unique address that notifications are sent to.
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub full_name: Option<String>,
    /// Whether the user may manage lots and view the admin summary.
    pub admin: bool,
    /// Time of the last successful login.
    pub last_visit: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            full_name: entity.full_name,
            admin: entity.admin,
            last_visit: entity.last_visit,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            admin: self.admin,
        }
    }
}

/// Parameters for registering a driver account with a plain text password.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl RegisterParams {
    /// Converts a registration request into parameters, trimming the identifying fields.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
            full_name: dto
                .full_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        }
    }
}

/// Parameters for inserting a user row once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub admin: bool,
}
