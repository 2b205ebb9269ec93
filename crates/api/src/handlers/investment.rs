//! Handlers for the `/investments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_db::models::investment::{CreateInvestment, Investment};

use super::ensure_references;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/investments
///
/// Records the commitment only; the project's `currentAmount` is left as
/// the operator set it.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateInvestment>,
) -> AppResult<(StatusCode, Json<Investment>)> {
    ensure_references(&state, input.user_id, input.project_id).await?;
    let investment = state.store.create_investment(input).await?;
    tracing::info!(
        investment_id = investment.id,
        user_id = ?investment.user_id,
        project_id = ?investment.project_id,
        amount = investment.amount,
        "Investment recorded"
    );
    Ok((StatusCode::CREATED, Json(investment)))
}
