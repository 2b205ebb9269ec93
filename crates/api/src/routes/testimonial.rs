use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(testimonial::list).post(testimonial::create))
}
