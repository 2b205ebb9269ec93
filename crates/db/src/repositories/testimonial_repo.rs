//! Repository for the `testimonials` table.

use ledger_core::types::{DbId, Timestamp};

use crate::error::{StoreError, StoreResult};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, avatar, content, rating, verified, created_at";

/// Provides insert and lookup operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    ///
    /// Expects `input` to have passed through [`CreateTestimonial::with_defaults`].
    pub async fn create(
        pool: &DbPool,
        input: &CreateTestimonial,
        created_at: Timestamp,
    ) -> StoreResult<Testimonial> {
        let query = format!(
            "INSERT INTO testimonials (name, avatar, content, rating, verified, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.avatar)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.verified.unwrap_or(false))
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(StoreError::from_write)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Testimonial>> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = ?1");
        let testimonial = sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(testimonial)
    }

    /// List all testimonials in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Testimonial>> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY id");
        let testimonials = sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await?;
        Ok(testimonials)
    }
}
