use std::time::Duration;

use ledger_core::funding::{ProjectStatus, TransactionStatus, TransactionType};
use ledger_db::models::investment::CreateInvestment;
use ledger_db::models::project::CreateProject;
use ledger_db::models::testimonial::CreateTestimonial;
use ledger_db::models::transaction::CreateTransaction;
use ledger_db::models::user::CreateUser;
use ledger_db::store::SqlStore;
use rust_decimal::Decimal;

/// A fresh, migrated SQLite store in memory.
#[allow(dead_code)]
pub async fn sql_store() -> SqlStore {
    let pool = ledger_db::create_pool("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("in-memory pool should open");
    ledger_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    SqlStore::new(pool)
}

#[allow(dead_code)]
pub fn new_project(title: &str, current_amount: Option<i64>, status: ProjectStatus) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} description"),
        location: "Hyderabad, Pakistan".to_string(),
        roi: Decimal::new(1500, 2),
        min_investment: 100_000,
        target_amount: 15_000_000,
        current_amount,
        status,
        image_url: None,
    }
}

#[allow(dead_code)]
pub fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "opaque".to_string(),
    }
}

#[allow(dead_code)]
pub fn new_investment(user_id: Option<i64>, project_id: Option<i64>, amount: i64) -> CreateInvestment {
    CreateInvestment {
        user_id,
        project_id,
        amount,
        returns: None,
    }
}

#[allow(dead_code)]
pub fn new_transaction(user_id: Option<i64>, project_id: Option<i64>, amount: i64) -> CreateTransaction {
    CreateTransaction {
        user_id,
        project_id,
        amount,
        transaction_type: TransactionType::Investment,
        status: TransactionStatus::Pending,
    }
}

#[allow(dead_code)]
pub fn new_testimonial(name: &str, verified: Option<bool>) -> CreateTestimonial {
    CreateTestimonial {
        name: name.to_string(),
        avatar: None,
        content: "Steady, transparent returns.".to_string(),
        rating: 4,
        verified,
    }
}
