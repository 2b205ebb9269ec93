use axum::routing::post;
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(transaction::create))
}
