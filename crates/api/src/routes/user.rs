//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// GET    /{id}/investments     -> list_investments
/// GET    /{id}/transactions    -> list_transactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/investments", get(user::list_investments))
        .route("/{id}/transactions", get(user::list_transactions))
}
