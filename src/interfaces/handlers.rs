pub mod about;
pub mod auth;
pub mod contact;
pub mod home;
pub mod json_error;
pub mod legal;
pub mod projects;
pub mod skills;
pub mod system;
pub mod testimonials;
