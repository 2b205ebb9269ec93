//! SQLite repositories, one per table.
//!
//! Each repository is a zero-sized struct with async methods taking the pool
//! explicitly. Rows whose columns need parsing (decimals stored as text,
//! enum labels) are read through a private row struct and converted.

mod investment_repo;
mod project_repo;
mod testimonial_repo;
mod transaction_repo;
mod user_repo;

pub use investment_repo::InvestmentRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::StoreError;

/// Parse a text column, reporting the column name on failure.
fn parse_column<T>(column: &str, value: &str) -> Result<T, StoreError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("{column} = '{value}': {e}")))
}

fn parse_decimal(column: &str, value: &str) -> Result<Decimal, StoreError> {
    parse_column(column, value)
}
