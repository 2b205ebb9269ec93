pub mod dashboard;
pub mod investment;
pub mod project;
pub mod testimonial;
pub mod transaction;
pub mod user;

use ledger_core::error::CoreError;
use ledger_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fail with `404` unless the user exists.
pub(crate) async fn ensure_user(state: &AppState, id: DbId) -> AppResult<()> {
    match state.store.get_user(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::NotFound { entity: "User", id })),
    }
}

/// Fail with `404` unless the project exists.
pub(crate) async fn ensure_project(state: &AppState, id: DbId) -> AppResult<()> {
    match state.store.get_project(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })),
    }
}

/// Check the optional user and project an investment or transaction points
/// at, reporting the first missing one.
pub(crate) async fn ensure_references(
    state: &AppState,
    user_id: Option<DbId>,
    project_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = user_id {
        ensure_user(state, id).await?;
    }
    if let Some(id) = project_id {
        ensure_project(state, id).await?;
    }
    Ok(())
}
