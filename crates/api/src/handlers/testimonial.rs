//! Handlers for the `/testimonials` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_db::models::testimonial::{CreateTestimonial, Testimonial};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = state.store.create_testimonial(input).await?;
    tracing::info!(
        testimonial_id = testimonial.id,
        rating = testimonial.rating,
        "Testimonial created"
    );
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// GET /api/testimonials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.store.list_testimonials().await?;
    Ok(Json(testimonials))
}
