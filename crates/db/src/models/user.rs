//! User entity model and DTOs.

use ledger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered user.
///
/// `password` holds whatever the access layer chose to store (a PHC hash
/// when created through the HTTP API) and is never serialized.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: Timestamp,
}

/// DTO for registering a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl CreateUser {
    pub fn into_record(self, id: DbId, created_at: Timestamp) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            created_at,
        }
    }
}
