//! Repository for the `investments` table.

use ledger_core::funding::normalize_decimal;
use ledger_core::types::{Amount, DbId, Timestamp};
use rust_decimal::Decimal;

use super::parse_decimal;
use crate::error::{StoreError, StoreResult};
use crate::models::investment::{CreateInvestment, Investment};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, amount, returns, created_at";

#[derive(sqlx::FromRow)]
struct InvestmentRow {
    id: DbId,
    user_id: Option<DbId>,
    project_id: Option<DbId>,
    amount: Amount,
    returns: String,
    created_at: Timestamp,
}

impl TryFrom<InvestmentRow> for Investment {
    type Error = StoreError;

    fn try_from(row: InvestmentRow) -> Result<Self, Self::Error> {
        Ok(Investment {
            id: row.id,
            user_id: row.user_id,
            project_id: row.project_id,
            amount: row.amount,
            returns: normalize_decimal(parse_decimal("investments.returns", &row.returns)?),
            created_at: row.created_at,
        })
    }
}

/// Provides insert and lookup operations for investments.
pub struct InvestmentRepo;

impl InvestmentRepo {
    /// Insert a new investment, returning the created row.
    ///
    /// References to missing users or projects surface as
    /// [`StoreError::Conflict`] via the foreign keys.
    pub async fn create(
        pool: &DbPool,
        input: &CreateInvestment,
        created_at: Timestamp,
    ) -> StoreResult<Investment> {
        let query = format!(
            "INSERT INTO investments (user_id, project_id, amount, returns, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        let returns = input.returns.unwrap_or(Decimal::ZERO);
        sqlx::query_as::<_, InvestmentRow>(&query)
            .bind(input.user_id)
            .bind(input.project_id)
            .bind(input.amount)
            .bind(normalize_decimal(returns).to_string())
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(StoreError::from_write)?
            .try_into()
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Investment>> {
        let query = format!("SELECT {COLUMNS} FROM investments WHERE id = ?1");
        sqlx::query_as::<_, InvestmentRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Investment::try_from)
            .transpose()
    }

    /// List all investments in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Investment>> {
        let query = format!("SELECT {COLUMNS} FROM investments ORDER BY id");
        Self::fetch_all(pool, &query, None).await
    }

    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> StoreResult<Vec<Investment>> {
        let query = format!("SELECT {COLUMNS} FROM investments WHERE user_id = ?1 ORDER BY id");
        Self::fetch_all(pool, &query, Some(user_id)).await
    }

    pub async fn list_by_project(pool: &DbPool, project_id: DbId) -> StoreResult<Vec<Investment>> {
        let query = format!("SELECT {COLUMNS} FROM investments WHERE project_id = ?1 ORDER BY id");
        Self::fetch_all(pool, &query, Some(project_id)).await
    }

    async fn fetch_all(
        pool: &DbPool,
        query: &str,
        filter: Option<DbId>,
    ) -> StoreResult<Vec<Investment>> {
        let mut q = sqlx::query_as::<_, InvestmentRow>(query);
        if let Some(id) = filter {
            q = q.bind(id);
        }
        q.fetch_all(pool)
            .await?
            .into_iter()
            .map(Investment::try_from)
            .collect()
    }
}
