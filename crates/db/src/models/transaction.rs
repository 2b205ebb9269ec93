//! Ledger transaction entity model and DTOs.

use ledger_core::funding::{TransactionStatus, TransactionType};
use ledger_core::types::{Amount, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A financial event on the ledger, distinct from an [`Investment`].
///
/// TODO: advance `PENDING` transactions once a payment provider reports
/// settlement; until then the status stays as recorded.
///
/// [`Investment`]: super::investment::Investment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub created_at: Timestamp,
}

/// DTO for recording a transaction.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub user_id: Option<DbId>,
    pub project_id: Option<DbId>,
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
}

impl CreateTransaction {
    pub fn into_record(self, id: DbId, created_at: Timestamp) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            project_id: self.project_id,
            amount: self.amount,
            transaction_type: self.transaction_type,
            status: self.status,
            created_at,
        }
    }
}
