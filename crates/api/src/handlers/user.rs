//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_db::models::investment::Investment;
use ledger_db::models::transaction::Transaction;
use ledger_db::models::user::{CreateUser, User};

use super::ensure_user;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/users
///
/// Stores an Argon2id hash in place of the submitted password. Duplicate
/// usernames or emails are rejected with `409`.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = state
        .store
        .create_user(CreateUser {
            password: hashed,
            ..input
        })
        .await?;
    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<User>> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// GET /api/users/{id}/investments
pub async fn list_investments(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Investment>>> {
    ensure_user(&state, id).await?;
    let investments = state.store.list_investments_by_user(id).await?;
    Ok(Json(investments))
}

/// GET /api/users/{id}/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Transaction>>> {
    ensure_user(&state, id).await?;
    let transactions = state.store.list_transactions_by_user(id).await?;
    Ok(Json(transactions))
}
