//! Investment entity model and DTOs.

use ledger_core::funding::normalize_decimal;
use ledger_core::types::{Amount, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's commitment of funds to a project. Immutable once recorded.
///
/// Recording an investment does not move the project's `current_amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub amount: Amount,
    pub returns: Decimal,
    pub created_at: Timestamp,
}

/// DTO for recording an investment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestment {
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: Amount,
    /// Defaults to zero if omitted.
    pub returns: Option<Decimal>,
}

impl CreateInvestment {
    pub fn with_defaults(self) -> Self {
        Self {
            returns: Some(normalize_decimal(self.returns.unwrap_or(Decimal::ZERO))),
            ..self
        }
    }

    /// Materialize the full record. Expects `with_defaults` to have run.
    pub fn into_record(self, id: DbId, created_at: Timestamp) -> Investment {
        Investment {
            id,
            user_id: self.user_id,
            project_id: self.project_id,
            amount: self.amount,
            returns: self.returns.unwrap_or(Decimal::ZERO),
            created_at,
        }
    }
}
