//! The entity store contract and its two backends.
//!
//! [`MemoryStore`] keeps one arena per entity kind for the life of the
//! process; [`SqlStore`] persists to SQLite through the repositories. Both
//! apply the same `with_defaults` step before inserting, assign strictly
//! increasing ids that are never reused, list in insertion order, and report
//! the same conflicts, so callers cannot tell them apart.

mod memory;
mod sql;

pub use memory::MemoryStore;
pub use sql::SqlStore;

use async_trait::async_trait;
use ledger_core::types::DbId;

use crate::error::StoreResult;
use crate::models::investment::{CreateInvestment, Investment};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::models::transaction::{CreateTransaction, Transaction};
use crate::models::user::{CreateUser, User};

/// Keyed storage for users, projects, investments, transactions, and
/// testimonials.
///
/// Lookups return `Ok(None)` for missing rows. Ids are not validated here;
/// rejecting malformed ids is the caller's concern.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Verify the backend can serve requests.
    async fn health_check(&self) -> StoreResult<()>;

    // --- Users ---

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>>;
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn create_user(&self, input: CreateUser) -> StoreResult<User>;

    // --- Projects ---

    async fn get_project(&self, id: DbId) -> StoreResult<Option<Project>>;
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
    async fn create_project(&self, input: CreateProject) -> StoreResult<Project>;
    /// Merge `input` over an existing project. `Ok(None)` if `id` is unknown,
    /// in which case nothing is written.
    async fn update_project(&self, id: DbId, input: UpdateProject)
        -> StoreResult<Option<Project>>;

    // --- Investments ---

    async fn get_investment(&self, id: DbId) -> StoreResult<Option<Investment>>;
    async fn list_investments(&self) -> StoreResult<Vec<Investment>>;
    async fn list_investments_by_user(&self, user_id: DbId) -> StoreResult<Vec<Investment>>;
    async fn list_investments_by_project(&self, project_id: DbId)
        -> StoreResult<Vec<Investment>>;
    async fn create_investment(&self, input: CreateInvestment) -> StoreResult<Investment>;

    // --- Transactions ---

    async fn get_transaction(&self, id: DbId) -> StoreResult<Option<Transaction>>;
    async fn list_transactions(&self) -> StoreResult<Vec<Transaction>>;
    async fn list_transactions_by_user(&self, user_id: DbId) -> StoreResult<Vec<Transaction>>;
    async fn create_transaction(&self, input: CreateTransaction) -> StoreResult<Transaction>;

    // --- Testimonials ---

    async fn get_testimonial(&self, id: DbId) -> StoreResult<Option<Testimonial>>;
    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>>;
    async fn create_testimonial(&self, input: CreateTestimonial) -> StoreResult<Testimonial>;
}
