//! Showcase projects and testimonials loaded into a fresh store.

use ledger_core::funding::ProjectStatus;
use rust_decimal::Decimal;

use crate::error::StoreResult;
use crate::models::project::CreateProject;
use crate::models::testimonial::CreateTestimonial;
use crate::store::EntityStore;

/// The three showcase projects.
pub fn project_fixtures() -> Vec<CreateProject> {
    vec![
        CreateProject {
            title: "Dubai Marina Tower".to_string(),
            description: "Premium residential complex in Dubai's financial district".to_string(),
            location: "Dubai, UAE".to_string(),
            roi: Decimal::new(125, 1),
            min_investment: 1_000,
            target_amount: 5_000_000,
            current_amount: Some(4_250_000),
            status: ProjectStatus::Active,
            image_url: Some(
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
        },
        CreateProject {
            title: "Singapore Business Hub".to_string(),
            description: "Commercial office space in Singapore's CBD".to_string(),
            location: "Singapore".to_string(),
            roi: Decimal::new(142, 1),
            min_investment: 2_500,
            target_amount: 8_000_000,
            current_amount: Some(4_960_000),
            status: ProjectStatus::Funding,
            image_url: Some(
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
        },
        CreateProject {
            title: "London Tech District".to_string(),
            description: "Mixed-use development in London's tech corridor".to_string(),
            location: "London, UK".to_string(),
            roi: Decimal::new(118, 1),
            min_investment: 5_000,
            target_amount: 12_000_000,
            current_amount: Some(12_000_000),
            status: ProjectStatus::Complete,
            image_url: Some(
                "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
        },
    ]
}

/// The three showcase testimonials.
pub fn testimonial_fixtures() -> Vec<CreateTestimonial> {
    let testimonial = |name: &str, avatar: &str, content: &str| CreateTestimonial {
        name: name.to_string(),
        avatar: Some(avatar.to_string()),
        content: content.to_string(),
        rating: 5,
        verified: Some(true),
    };

    vec![
        testimonial(
            "Ahmed Al-Rashid",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100",
            "SAIR REIT has revolutionized my investment strategy. The halal approach combined with excellent returns is exactly what I was looking for.",
        ),
        testimonial(
            "Sarah Johnson",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100",
            "The transparency and real-time tracking give me complete confidence in my investments. I've seen consistent 12%+ returns month after month.",
        ),
        testimonial(
            "Marcus Chen",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=100&h=100",
            "Finally, a platform that combines cutting-edge technology with solid fundamentals. My portfolio has grown 35% since joining SAIR REIT.",
        ),
    ]
}

/// Load the fixtures unless the store already holds projects.
///
/// Returns `true` if fixtures were inserted.
pub async fn seed_if_empty(store: &dyn EntityStore) -> StoreResult<bool> {
    if !store.list_projects().await?.is_empty() {
        tracing::debug!(backend = store.backend(), "Store already populated, skipping fixtures");
        return Ok(false);
    }

    for project in project_fixtures() {
        store.create_project(project).await?;
    }
    for testimonial in testimonial_fixtures() {
        store.create_testimonial(testimonial).await?;
    }

    tracing::info!(backend = store.backend(), "Loaded showcase fixtures");
    Ok(true)
}
