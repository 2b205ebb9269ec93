//! Repository for the `transactions` table.

use ledger_core::funding::{TransactionStatus, TransactionType};
use ledger_core::types::{Amount, DbId, Timestamp};

use super::parse_column;
use crate::error::{StoreError, StoreResult};
use crate::models::transaction::{CreateTransaction, Transaction};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, amount, type, status, created_at";

#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: DbId,
    user_id: Option<DbId>,
    project_id: Option<DbId>,
    amount: Amount,
    #[sqlx(rename = "type")]
    transaction_type: String,
    status: String,
    created_at: Timestamp,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = StoreError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: row.id,
            user_id: row.user_id,
            project_id: row.project_id,
            amount: row.amount,
            transaction_type: parse_column::<TransactionType>(
                "transactions.type",
                &row.transaction_type,
            )?,
            status: parse_column::<TransactionStatus>("transactions.status", &row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Provides insert and lookup operations for ledger transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateTransaction,
        created_at: Timestamp,
    ) -> StoreResult<Transaction> {
        let query = format!(
            "INSERT INTO transactions (user_id, project_id, amount, type, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TransactionRow>(&query)
            .bind(input.user_id)
            .bind(input.project_id)
            .bind(input.amount)
            .bind(input.transaction_type.as_str())
            .bind(input.status.as_str())
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(StoreError::from_write)?
            .try_into()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Transaction>> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = ?1");
        sqlx::query_as::<_, TransactionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Transaction::try_from)
            .transpose()
    }

    /// List all transactions in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Transaction>> {
        let query = format!("SELECT {COLUMNS} FROM transactions ORDER BY id");
        sqlx::query_as::<_, TransactionRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> StoreResult<Vec<Transaction>> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE user_id = ?1 ORDER BY id");
        sqlx::query_as::<_, TransactionRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
