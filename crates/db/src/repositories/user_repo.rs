//! Repository for the `users` table.

use ledger_core::types::{DbId, Timestamp};

use crate::error::{StoreError, StoreResult};
use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password, created_at";

/// Provides insert and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Duplicate usernames or emails surface as [`StoreError::Conflict`].
    pub async fn create(
        pool: &DbPool,
        input: &CreateUser,
        created_at: Timestamp,
    ) -> StoreResult<User> {
        let query = format!(
            "INSERT INTO users (username, email, password, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password)
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(StoreError::from_write)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Exact, case-sensitive match on `username`.
    pub async fn find_by_username(pool: &DbPool, username: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?1 ORDER BY id LIMIT 1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Exact, case-sensitive match on `email`.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?1 ORDER BY id LIMIT 1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// List all users in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;
        Ok(users)
    }
}
