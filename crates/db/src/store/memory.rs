use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use ledger_core::types::DbId;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::error::{StoreError, StoreResult};
use crate::models::investment::{CreateInvestment, Investment};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::models::transaction::{CreateTransaction, Transaction};
use crate::models::user::{CreateUser, User};

/// Rows of one entity kind plus that kind's id counter.
///
/// Ids start at 1 and only ever increase; the `IndexMap` keeps insertion
/// order for listing.
struct Arena<T> {
    rows: IndexMap<DbId, T>,
    next_id: DbId,
}

impl<T: Clone> Arena<T> {
    fn new() -> Self {
        Self {
            rows: IndexMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    fn contains(&self, id: DbId) -> bool {
        self.rows.contains_key(&id)
    }
}

/// Process-lifetime store holding one [`Arena`] per entity kind.
///
/// Each arena sits behind its own `RwLock`; id assignment and the
/// read-modify-write in `update_project` run under the write lock. Users
/// and projects are never removed, so a reference check does not need to
/// hold its read locks while the referencing row is inserted.
pub struct MemoryStore {
    users: RwLock<Arena<User>>,
    projects: RwLock<Arena<Project>>,
    investments: RwLock<Arena<Investment>>,
    transactions: RwLock<Arena<Transaction>>,
    testimonials: RwLock<Arena<Testimonial>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Arena::new()),
            projects: RwLock::new(Arena::new()),
            investments: RwLock::new(Arena::new()),
            transactions: RwLock::new(Arena::new()),
            testimonials: RwLock::new(Arena::new()),
        }
    }

    /// Reject references to users or projects that do not exist, the way
    /// the durable store's foreign keys do.
    async fn check_references(
        &self,
        user_id: Option<DbId>,
        project_id: Option<DbId>,
    ) -> StoreResult<()> {
        let users = self.users.read().await;
        let projects = self.projects.read().await;
        let user_ok = user_id.map_or(true, |id| users.contains(id));
        let project_ok = project_id.map_or(true, |id| projects.contains(id));
        if user_ok && project_ok {
            Ok(())
        } else {
            Err(StoreError::dangling_reference())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_user(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.filter(|u| u.username == username).into_iter().next())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.filter(|u| u.email == email).into_iter().next())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.all())
    }

    async fn create_user(&self, input: CreateUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        // SQLite reports the email index first when both collide.
        if users.rows.values().any(|u| u.email == input.email) {
            return Err(StoreError::duplicate("email"));
        }
        if users.rows.values().any(|u| u.username == input.username) {
            return Err(StoreError::duplicate("username"));
        }
        let created_at = Utc::now();
        Ok(users.insert_with(|id| input.into_record(id, created_at)))
    }

    async fn get_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(self.projects.read().await.get(id))
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.projects.read().await.all())
    }

    async fn create_project(&self, input: CreateProject) -> StoreResult<Project> {
        let input = input.with_defaults();
        let created_at = Utc::now();
        let mut projects = self.projects.write().await;
        Ok(projects.insert_with(|id| input.into_record(id, created_at)))
    }

    async fn update_project(
        &self,
        id: DbId,
        input: UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.rows.get_mut(&id) else {
            return Ok(None);
        };
        input.apply(project);
        Ok(Some(project.clone()))
    }

    async fn get_investment(&self, id: DbId) -> StoreResult<Option<Investment>> {
        Ok(self.investments.read().await.get(id))
    }

    async fn list_investments(&self) -> StoreResult<Vec<Investment>> {
        Ok(self.investments.read().await.all())
    }

    async fn list_investments_by_user(&self, user_id: DbId) -> StoreResult<Vec<Investment>> {
        let investments = self.investments.read().await;
        Ok(investments.filter(|inv| inv.user_id == Some(user_id)))
    }

    async fn list_investments_by_project(
        &self,
        project_id: DbId,
    ) -> StoreResult<Vec<Investment>> {
        let investments = self.investments.read().await;
        Ok(investments.filter(|inv| inv.project_id == Some(project_id)))
    }

    async fn create_investment(&self, input: CreateInvestment) -> StoreResult<Investment> {
        let input = input.with_defaults();
        self.check_references(input.user_id, input.project_id).await?;
        let created_at = Utc::now();
        let mut investments = self.investments.write().await;
        Ok(investments.insert_with(|id| input.into_record(id, created_at)))
    }

    async fn get_transaction(&self, id: DbId) -> StoreResult<Option<Transaction>> {
        Ok(self.transactions.read().await.get(id))
    }

    async fn list_transactions(&self) -> StoreResult<Vec<Transaction>> {
        Ok(self.transactions.read().await.all())
    }

    async fn list_transactions_by_user(&self, user_id: DbId) -> StoreResult<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.filter(|tx| tx.user_id == Some(user_id)))
    }

    async fn create_transaction(&self, input: CreateTransaction) -> StoreResult<Transaction> {
        self.check_references(input.user_id, input.project_id).await?;
        let created_at = Utc::now();
        let mut transactions = self.transactions.write().await;
        Ok(transactions.insert_with(|id| input.into_record(id, created_at)))
    }

    async fn get_testimonial(&self, id: DbId) -> StoreResult<Option<Testimonial>> {
        Ok(self.testimonials.read().await.get(id))
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        Ok(self.testimonials.read().await.all())
    }

    async fn create_testimonial(&self, input: CreateTestimonial) -> StoreResult<Testimonial> {
        let input = input.with_defaults();
        let created_at = Utc::now();
        let mut testimonials = self.testimonials.write().await;
        Ok(testimonials.insert_with(|id| input.into_record(id, created_at)))
    }
}
