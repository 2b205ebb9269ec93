//! Handler for the investor dashboard summary.

use axum::extract::State;
use axum::Json;
use ledger_core::dashboard::{compute_dashboard_stats, DashboardStats};
use ledger_db::models::project::Project;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Recomputed from the current project list on every call.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let projects = state.store.list_projects().await?;
    let stats = compute_dashboard_stats(projects.iter().map(Project::figures));
    Ok(Json(stats))
}
