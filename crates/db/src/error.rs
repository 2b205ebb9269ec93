/// Errors surfaced by an [`EntityStore`](crate::store::EntityStore).
///
/// Missing rows are not errors: lookups return `Option` so callers decide
/// the response. Both store backends produce the same `Conflict` messages
/// for the same violations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique key or reference rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored row could not be decoded into its entity type.
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// The durable backend failed (connectivity, I/O, timeouts).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub(crate) fn duplicate(field: &str) -> Self {
        Self::Conflict(format!("{field} is already taken"))
    }

    pub(crate) fn dangling_reference() -> Self {
        Self::Conflict("referenced user or project does not exist".to_string())
    }

    /// Classify a driver error, turning constraint failures into the
    /// backend-neutral conflict messages.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                let field = if message.contains("users.username") {
                    "username"
                } else if message.contains("users.email") {
                    "email"
                } else {
                    "value"
                };
                return Self::duplicate(field);
            }
            if db_err.is_foreign_key_violation() {
                return Self::dangling_reference();
            }
        }
        Self::Database(err)
    }
}
