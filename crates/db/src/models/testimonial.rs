//! Testimonial entity model and DTOs.

use ledger_core::funding;
use ledger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::field_error;

/// A display-only social-proof record. Immutable once created.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub avatar: Option<String>,
    pub content: String,
    pub rating: i32,
    pub verified: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub avatar: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(custom(function = "rating_in_range"))]
    pub rating: i32,
    /// Defaults to `false` if omitted.
    pub verified: Option<bool>,
}

impl CreateTestimonial {
    pub fn with_defaults(self) -> Self {
        Self {
            verified: Some(self.verified.unwrap_or(false)),
            ..self
        }
    }

    /// Materialize the full record. Expects `with_defaults` to have run.
    pub fn into_record(self, id: DbId, created_at: Timestamp) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            avatar: self.avatar,
            content: self.content,
            rating: self.rating,
            verified: self.verified.unwrap_or(false),
            created_at,
        }
    }
}

fn rating_in_range(rating: i32) -> Result<(), ValidationError> {
    field_error("rating", funding::validate_rating(rating))
}
