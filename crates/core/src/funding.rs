//! Funding ledger vocabulary: status labels, transaction kinds, and the
//! value rules shared by both store backends and the HTTP layer.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Fractional digits kept for ROI percentages and investment returns.
pub const DECIMAL_SCALE: u32 = 2;

/// ROI is stored as `DECIMAL(5,2)`, so the integral part has three digits.
pub const MAX_ROI_EXCLUSIVE: Decimal = Decimal::ONE_THOUSAND;

/// Minimum allowed testimonial rating.
pub const MIN_RATING: i32 = 1;

/// Maximum allowed testimonial rating.
pub const MAX_RATING: i32 = 5;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Operator-assigned project status.
///
/// The label is never derived from the funding ratio: a project can be
/// `FUNDING` while fully funded, or `COMPLETE` below target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Active,
    Funding,
    Complete,
    WaitingForSale,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Funding => "FUNDING",
            Self::Complete => "COMPLETE",
            Self::WaitingForSale => "WAITING_FOR_SALE",
        }
    }
}

/// Kind of ledger event a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Investment,
    Return,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Investment => "INVESTMENT",
            Self::Return => "RETURN",
        }
    }
}

/// Settlement state of a transaction. Set once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

/// Error returned when a stored label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! label_conversions {
    ($ty:ident, $kind:literal, [$($variant:ident),+]) => {
        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == Self::$variant.as_str() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownLabel {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_conversions!(ProjectStatus, "project status", [Active, Funding, Complete, WaitingForSale]);
label_conversions!(TransactionType, "transaction type", [Investment, Return]);
label_conversions!(TransactionStatus, "transaction status", [Pending, Completed, Failed]);

// ---------------------------------------------------------------------------
// Value rules
// ---------------------------------------------------------------------------

/// Round a stored decimal to [`DECIMAL_SCALE`] digits and pad it to exactly
/// that scale, so `12.5` and `12.50` compare and serialize identically.
pub fn normalize_decimal(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_SCALE);
    rounded
}

/// Validate an ROI percentage: non-negative and below [`MAX_ROI_EXCLUSIVE`].
pub fn validate_roi(roi: &Decimal) -> Result<(), CoreError> {
    if roi.is_sign_negative() && !roi.is_zero() {
        return Err(CoreError::Validation(format!(
            "ROI must not be negative, got {roi}"
        )));
    }
    if normalize_decimal(*roi) >= MAX_ROI_EXCLUSIVE {
        return Err(CoreError::Validation(format!(
            "ROI must be below {MAX_ROI_EXCLUSIVE}, got {roi}"
        )));
    }
    Ok(())
}

/// Validate that a testimonial rating is within the allowed range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}
