//! Dashboard statistics derived from the live project collection.
//!
//! Nothing here is cached or stored: callers pass the current projects and
//! get a fresh [`DashboardStats`] back on every request.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::funding::ProjectStatus;
use crate::types::Amount;

/// Fractional digits shown for the average ROI.
pub const AVG_ROI_DISPLAY_SCALE: u32 = 1;

/// Months per year, used to spread annual returns.
pub const MONTHS_PER_YEAR: i64 = 12;

/// The slice of a project the aggregation reads.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFigures {
    pub current_amount: Option<Amount>,
    pub roi: Decimal,
    pub status: ProjectStatus,
}

/// Aggregate figures shown on the investor dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invested: Amount,
    pub monthly_returns: Amount,
    pub active_projects: usize,
    pub total_projects: usize,
    /// Mean ROI rounded to one fractional digit, e.g. `"12.8"`.
    #[serde(rename = "avgROI")]
    pub avg_roi: String,
}

/// Compute dashboard statistics over a set of projects.
///
/// `monthly_returns` is derived from the *rounded* average ROI so the
/// numbers shown side by side on the dashboard agree with each other.
/// An empty collection yields all zeros and an average ROI of `"0.0"`.
pub fn compute_dashboard_stats<I>(projects: I) -> DashboardStats
where
    I: IntoIterator<Item = ProjectFigures>,
{
    let mut total_invested: Amount = 0;
    let mut active_projects = 0usize;
    let mut total_projects = 0usize;
    let mut roi_sum = Decimal::ZERO;

    for project in projects {
        total_invested = total_invested.saturating_add(project.current_amount.unwrap_or(0));
        if project.status == ProjectStatus::Active {
            active_projects += 1;
        }
        total_projects += 1;
        roi_sum += project.roi;
    }

    let avg_roi = if total_projects == 0 {
        Decimal::ZERO
    } else {
        roi_sum / Decimal::from(total_projects)
    };
    let mut avg_roi =
        avg_roi.round_dp_with_strategy(AVG_ROI_DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    avg_roi.rescale(AVG_ROI_DISPLAY_SCALE);

    DashboardStats {
        total_invested,
        monthly_returns: monthly_returns(total_invested, avg_roi),
        active_projects,
        total_projects,
        avg_roi: avg_roi.to_string(),
    }
}

/// `floor(total × (roi / 100) / 12)`, computed in decimal arithmetic.
fn monthly_returns(total_invested: Amount, avg_roi: Decimal) -> Amount {
    let annual = Decimal::from(total_invested)
        .checked_mul(avg_roi)
        .map(|v| v / Decimal::ONE_HUNDRED);
    match annual {
        Some(annual) => (annual / Decimal::from(MONTHS_PER_YEAR))
            .floor()
            .to_i64()
            .unwrap_or(Amount::MAX),
        None => Amount::MAX,
    }
}
