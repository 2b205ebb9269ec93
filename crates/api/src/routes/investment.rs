use axum::routing::post;
use axum::Router;

use crate::handlers::investment;
use crate::state::AppState;

/// Routes mounted at `/investments`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(investment::create))
}
