//! Repository for the `projects` table.

use ledger_core::funding::{normalize_decimal, ProjectStatus};
use ledger_core::types::{Amount, DbId, Timestamp};

use super::{parse_column, parse_decimal};
use crate::error::{StoreError, StoreResult};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, location, roi, min_investment, target_amount, \
                       current_amount, status, image_url, created_at";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: DbId,
    title: String,
    description: String,
    location: String,
    roi: String,
    min_investment: Amount,
    target_amount: Amount,
    current_amount: Option<Amount>,
    status: String,
    image_url: Option<String>,
    created_at: Timestamp,
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            roi: normalize_decimal(parse_decimal("projects.roi", &row.roi)?),
            min_investment: row.min_investment,
            target_amount: row.target_amount,
            current_amount: row.current_amount,
            status: parse_column::<ProjectStatus>("projects.status", &row.status)?,
            image_url: row.image_url,
            created_at: row.created_at,
        })
    }
}

/// Provides create, read, and partial-update operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Expects `input` to have passed through [`CreateProject::with_defaults`].
    pub async fn create(
        pool: &DbPool,
        input: &CreateProject,
        created_at: Timestamp,
    ) -> StoreResult<Project> {
        let query = format!(
            "INSERT INTO projects (title, description, location, roi, min_investment,
                                   target_amount, current_amount, status, image_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.roi.to_string())
            .bind(input.min_investment)
            .bind(input.target_amount)
            .bind(input.current_amount)
            .bind(input.status.as_str())
            .bind(&input.image_url)
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(StoreError::from_write)?;
        row.try_into()
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                location = COALESCE(?4, location),
                roi = COALESCE(?5, roi),
                min_investment = COALESCE(?6, min_investment),
                target_amount = COALESCE(?7, target_amount),
                current_amount = COALESCE(?8, current_amount),
                status = COALESCE(?9, status),
                image_url = COALESCE(?10, image_url)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.roi.map(|roi| normalize_decimal(roi).to_string()))
            .bind(input.min_investment)
            .bind(input.target_amount)
            .bind(input.current_amount)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
            .map_err(StoreError::from_write)?
            .map(Project::try_from)
            .transpose()
    }
}
