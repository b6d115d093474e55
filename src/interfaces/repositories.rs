pub mod about;
pub mod contact_message;
pub mod legal;
pub mod project;
pub mod skill;
pub mod sqlx_repo;
pub mod testimonial;
pub mod token;
pub mod user;
