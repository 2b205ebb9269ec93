//! Request extractors that turn malformed input into `400` responses with
//! the standard JSON error body.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use ledger_core::error::CoreError;
use ledger_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// A positive entity id taken from the single `{id}` path segment.
///
/// Non-numeric, zero, and negative ids are rejected with `400`.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        parse_id(&raw).map(IdPath)
    }
}

/// Parse a path id, accepting only positive integers.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "Invalid id '{raw}': expected a positive integer"
        ))),
    }
}

/// JSON body that has been deserialized and then checked with
/// [`Validate`].
///
/// Shape errors (missing fields, wrong types, unknown enum labels) become
/// `BAD_REQUEST`; rule violations become `VALIDATION_ERROR`. Both are `400`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Render validation failures as one line, ordered by field name so the
/// same input always yields the same message.
pub fn describe(errors: &ValidationErrors) -> String {
    let by_field: BTreeMap<_, _> = errors.field_errors().into_iter().collect();
    by_field
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", error.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
