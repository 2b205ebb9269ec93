//! Handlers for the `/transactions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_db::models::transaction::{CreateTransaction, Transaction};

use super::ensure_references;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/transactions
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    ensure_references(&state, input.user_id, input.project_id).await?;
    let transaction = state.store.create_transaction(input).await?;
    tracing::info!(
        transaction_id = transaction.id,
        transaction_type = %transaction.transaction_type,
        status = %transaction.status,
        amount = transaction.amount,
        "Transaction recorded"
    );
    Ok((StatusCode::CREATED, Json(transaction)))
}
