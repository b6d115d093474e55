use actix_cors::Cors;
use actix_web::http::{header, Method};
use sqlx::SqlitePool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;

pub use domain::{entities, password, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, cache, db, limiter, utils};

use auth::{denylist::TokenDenylist, jwt::JwtService};
use cache::content_cache::ContentCache;
use limiter::rate_limiter::RateLimiterStore;
use repositories::sqlx_repo::{
    SqlxAboutRepo, SqlxContactMessageRepo, SqlxLegalRepo, SqlxProjectRepo, SqlxSkillRepo,
    SqlxTestimonialRepo, SqlxUserRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    about::AboutHandler, auth::AuthHandler, contact::ContactHandler, legal::LegalHandler,
    projects::ProjectHandler, skills::SkillHandler, testimonials::TestimonialHandler,
};

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub project_handler: ProjectHandler<SqlxProjectRepo>,
    pub skill_handler: SkillHandler<SqlxSkillRepo>,
    pub testimonial_handler: TestimonialHandler<SqlxTestimonialRepo>,
    pub contact_handler: ContactHandler<SqlxContactMessageRepo>,
    pub about_handler: AboutHandler<SqlxAboutRepo>,
    pub legal_handler: LegalHandler<SqlxLegalRepo>,
    pub content_cache: ContentCache,
    pub contact_limiter: RateLimiterStore,
    pub trust_x_forwarded_for: bool,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: SqlitePool) -> Self {
        let repos = SharedRepositories::new(pool.clone());
        let content_cache = ContentCache::new(config.public_cache_ttl());

        AppState {
            auth_handler: AuthHandler::new(
                repos.user_repo,
                JwtService::new(config),
                TokenDenylist::new(),
            ),
            project_handler: ProjectHandler::new(repos.project_repo, content_cache.clone()),
            skill_handler: SkillHandler::new(repos.skill_repo, content_cache.clone()),
            testimonial_handler: TestimonialHandler::new(repos.testimonial_repo, content_cache.clone()),
            contact_handler: ContactHandler::new(repos.contact_repo),
            about_handler: AboutHandler::new(repos.about_repo, content_cache.clone()),
            legal_handler: LegalHandler::new(repos.legal_repo, content_cache.clone()),
            content_cache,
            contact_limiter: RateLimiterStore::new(
                config.contact_rate_window(),
                config.contact_rate_limit,
            ),
            trust_x_forwarded_for: config.trust_x_forwarded_for,
            pool,
        }
    }
}

/// CORS policy from configuration; `*` allows any origin.
pub fn build_cors(config: &settings::AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = if origins.iter().any(|o| o == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::RETRY_AFTER])
        .max_age(3600)
}
