use async_trait::async_trait;
use chrono::Utc;
use ledger_core::types::DbId;

use super::EntityStore;
use crate::error::StoreResult;
use crate::models::investment::{CreateInvestment, Investment};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::models::transaction::{CreateTransaction, Transaction};
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    InvestmentRepo, ProjectRepo, TestimonialRepo, TransactionRepo, UserRepo,
};
use crate::DbPool;

/// Durable store backed by a SQLite pool. Every operation is one statement.
#[derive(Clone)]
pub struct SqlStore {
    pool: DbPool,
}

impl SqlStore {
    /// Wrap a pool whose schema has already been migrated.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for SqlStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        UserRepo::find_by_username(&self.pool, username).await
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        UserRepo::find_by_email(&self.pool, email).await
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        UserRepo::list(&self.pool).await
    }

    async fn create_user(&self, input: CreateUser) -> StoreResult<User> {
        UserRepo::create(&self.pool, &input, Utc::now()).await
    }

    async fn get_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        ProjectRepo::list(&self.pool).await
    }

    async fn create_project(&self, input: CreateProject) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, &input.with_defaults(), Utc::now()).await
    }

    async fn update_project(
        &self,
        id: DbId,
        input: UpdateProject,
    ) -> StoreResult<Option<Project>> {
        ProjectRepo::update(&self.pool, id, &input.normalized()).await
    }

    async fn get_investment(&self, id: DbId) -> StoreResult<Option<Investment>> {
        InvestmentRepo::find_by_id(&self.pool, id).await
    }

    async fn list_investments(&self) -> StoreResult<Vec<Investment>> {
        InvestmentRepo::list(&self.pool).await
    }

    async fn list_investments_by_user(&self, user_id: DbId) -> StoreResult<Vec<Investment>> {
        InvestmentRepo::list_by_user(&self.pool, user_id).await
    }

    async fn list_investments_by_project(
        &self,
        project_id: DbId,
    ) -> StoreResult<Vec<Investment>> {
        InvestmentRepo::list_by_project(&self.pool, project_id).await
    }

    async fn create_investment(&self, input: CreateInvestment) -> StoreResult<Investment> {
        InvestmentRepo::create(&self.pool, &input.with_defaults(), Utc::now()).await
    }

    async fn get_transaction(&self, id: DbId) -> StoreResult<Option<Transaction>> {
        TransactionRepo::find_by_id(&self.pool, id).await
    }

    async fn list_transactions(&self) -> StoreResult<Vec<Transaction>> {
        TransactionRepo::list(&self.pool).await
    }

    async fn list_transactions_by_user(&self, user_id: DbId) -> StoreResult<Vec<Transaction>> {
        TransactionRepo::list_by_user(&self.pool, user_id).await
    }

    async fn create_transaction(&self, input: CreateTransaction) -> StoreResult<Transaction> {
        TransactionRepo::create(&self.pool, &input, Utc::now()).await
    }

    async fn get_testimonial(&self, id: DbId) -> StoreResult<Option<Testimonial>> {
        TestimonialRepo::find_by_id(&self.pool, id).await
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        TestimonialRepo::list(&self.pool).await
    }

    async fn create_testimonial(&self, input: CreateTestimonial) -> StoreResult<Testimonial> {
        TestimonialRepo::create(&self.pool, &input.with_defaults(), Utc::now()).await
    }
}
