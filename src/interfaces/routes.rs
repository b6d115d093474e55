use actix_web::{web, HttpResponse};

use crate::handlers::{home::home, json_error::json_error};

mod about;
mod admin;
mod auth;
mod contact;
mod json_error;
mod legal;
mod projects;
mod skills;
mod testimonials;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(skills::config_routes)
            .configure(testimonials::config_routes)
            .configure(contact::config_routes)
            .configure(about::config_routes)
            .configure(legal::config_routes)
            .configure(auth::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    json_error(actix_web::http::StatusCode::NOT_FOUND, "Resource not found")
}
