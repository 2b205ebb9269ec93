//! Project entity model and DTOs.

use ledger_core::dashboard::ProjectFigures;
use ledger_core::funding::{self, normalize_decimal, ProjectStatus};
use ledger_core::types::{Amount, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::field_error;

/// Funding recorded on a project when the creator does not supply one.
pub const DEFAULT_CURRENT_AMOUNT: Amount = 0;

/// An investable project.
///
/// `current_amount` is set by operators and is not reconciled with the
/// project's investment rows; it may exceed `target_amount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub roi: Decimal,
    pub min_investment: Amount,
    pub target_amount: Amount,
    pub current_amount: Option<Amount>,
    pub status: ProjectStatus,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl Project {
    /// The fields the dashboard aggregation reads.
    pub fn figures(&self) -> ProjectFigures {
        ProjectFigures {
            current_amount: self.current_amount,
            roi: self.roi,
            status: self.status,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[validate(custom(function = "roi_in_range"))]
    pub roi: Decimal,
    #[validate(range(min = 0, message = "minInvestment must not be negative"))]
    pub min_investment: Amount,
    #[validate(range(min = 1, message = "targetAmount must be positive"))]
    pub target_amount: Amount,
    /// Defaults to [`DEFAULT_CURRENT_AMOUNT`] if omitted.
    #[validate(range(min = 0, message = "currentAmount must not be negative"))]
    pub current_amount: Option<Amount>,
    pub status: ProjectStatus,
    pub image_url: Option<String>,
}

impl CreateProject {
    /// Fill defaulted fields and normalise the ROI scale.
    pub fn with_defaults(self) -> Self {
        Self {
            roi: normalize_decimal(self.roi),
            current_amount: Some(self.current_amount.unwrap_or(DEFAULT_CURRENT_AMOUNT)),
            ..self
        }
    }

    /// Materialize the full record. Expects `with_defaults` to have run.
    pub fn into_record(self, id: DbId, created_at: Timestamp) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            roi: self.roi,
            min_investment: self.min_investment,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            status: self.status,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// DTO for a partial project update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: Option<String>,
    #[validate(custom(function = "roi_in_range"))]
    pub roi: Option<Decimal>,
    #[validate(range(min = 0, message = "minInvestment must not be negative"))]
    pub min_investment: Option<Amount>,
    #[validate(range(min = 1, message = "targetAmount must be positive"))]
    pub target_amount: Option<Amount>,
    #[validate(range(min = 0, message = "currentAmount must not be negative"))]
    pub current_amount: Option<Amount>,
    pub status: Option<ProjectStatus>,
    pub image_url: Option<String>,
}

impl UpdateProject {
    /// Normalise the ROI scale, matching [`CreateProject::with_defaults`].
    pub fn normalized(self) -> Self {
        Self {
            roi: self.roi.map(normalize_decimal),
            ..self
        }
    }

    /// Merge the provided fields over `project`.
    pub fn apply(self, project: &mut Project) {
        let update = self.normalized();
        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(location) = update.location {
            project.location = location;
        }
        if let Some(roi) = update.roi {
            project.roi = roi;
        }
        if let Some(min_investment) = update.min_investment {
            project.min_investment = min_investment;
        }
        if let Some(target_amount) = update.target_amount {
            project.target_amount = target_amount;
        }
        if let Some(current_amount) = update.current_amount {
            project.current_amount = Some(current_amount);
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(image_url) = update.image_url {
            project.image_url = Some(image_url);
        }
    }
}

fn roi_in_range(roi: &Decimal) -> Result<(), ValidationError> {
    field_error("roi", funding::validate_roi(roi))
}
