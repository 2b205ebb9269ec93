pub mod dashboard;
pub mod health;
pub mod investment;
pub mod project;
pub mod testimonial;
pub mod transaction;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get, partial update
/// /projects/{id}/investments         investments in a project
///
/// /testimonials                      list, create
///
/// /dashboard/stats                   aggregate figures
///
/// /users                             register
/// /users/{id}                        get
/// /users/{id}/investments            a user's investments
/// /users/{id}/transactions           a user's transactions
///
/// /investments                       record
/// /transactions                      record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/testimonials", testimonial::router())
        .nest("/dashboard", dashboard::router())
        .nest("/users", user::router())
        .nest("/investments", investment::router())
        .nest("/transactions", transaction::router())
}
