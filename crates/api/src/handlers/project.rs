//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_db::models::investment::Investment;
use ledger_db::models::project::{CreateProject, Project, UpdateProject};

use super::ensure_project;
use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.store.create_project(input).await?;
    tracing::info!(
        project_id = project.id,
        status = %project.status,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .get_project(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .update_project(id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(
        project_id = project.id,
        status = %project.status,
        current_amount = ?project.current_amount,
        "Project updated"
    );
    Ok(Json(project))
}

/// GET /api/projects/{id}/investments
pub async fn list_investments(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Investment>>> {
    ensure_project(&state, id).await?;
    let investments = state.store.list_investments_by_project(id).await?;
    Ok(Json(investments))
}
