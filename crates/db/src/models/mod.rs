//! Entity structs and DTOs for the five ledger entity kinds.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct (the full, materialized record)
//! - A `Deserialize` + `Validate` create DTO (the insertable shape) with a
//!   pure `with_defaults` step both stores apply before inserting
//! - For projects, a `Deserialize` update DTO (all `Option` fields)

pub mod investment;
pub mod project;
pub mod testimonial;
pub mod transaction;
pub mod user;

use ledger_core::error::CoreError;
use validator::ValidationError;

/// Turn a core validation failure into a `validator` field error.
pub(crate) fn field_error(code: &'static str, result: Result<(), CoreError>) -> Result<(), ValidationError> {
    result.map_err(|err| {
        let message = match err {
            CoreError::Validation(msg) => msg,
            other => other.to_string(),
        };
        let mut error = ValidationError::new(code);
        error.message = Some(message.into());
        error
    })
}
