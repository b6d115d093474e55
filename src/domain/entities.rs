pub mod about_info;
pub mod contact_message;
pub mod legal_doc;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod token;
pub mod user;
pub mod validation;
